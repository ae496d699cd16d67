//! Notification surface
//!
//! Thin wrapper over the OS notification center. On macOS notifications go
//! through `osascript`; elsewhere they degrade to a log line.

use tracing::info;

/// Maximum characters shown in a notification preview.
const PREVIEW_LEN: usize = 100;

/// Seam for user-visible notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, subtitle: &str, message: &str);
}

/// Notifier backed by the OS notification center.
#[derive(Default)]
pub struct SystemNotifier;

impl SystemNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for SystemNotifier {
    fn notify(&self, title: &str, subtitle: &str, message: &str) {
        info!("🔔 {} - {}: {}", title, subtitle, message);

        #[cfg(target_os = "macos")]
        {
            let script = format!(
                "display notification \"{}\" with title \"{}\" subtitle \"{}\"",
                escape(message),
                escape(title),
                escape(subtitle)
            );
            if let Err(e) = std::process::Command::new("osascript")
                .arg("-e")
                .arg(&script)
                .output()
            {
                tracing::warn!("Failed to post notification: {}", e);
            }
        }
    }
}

/// Escape a string for an AppleScript double-quoted literal.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Truncate text for a notification preview: the first 100 characters plus
/// an ellipsis marker when longer, verbatim otherwise.
pub fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_LEN {
        let head: String = text.chars().take(PREVIEW_LEN).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_verbatim() {
        assert_eq!(preview("Hello, world."), "Hello, world.");
        assert_eq!(preview(""), "");
    }

    #[test]
    fn test_preview_exactly_100_chars_verbatim() {
        let text = "a".repeat(100);
        assert_eq!(preview(&text), text);
    }

    #[test]
    fn test_preview_truncates_over_100_chars() {
        let text = "a".repeat(101);
        let p = preview(&text);
        assert_eq!(p.len(), 103);
        assert!(p.ends_with("..."));
        assert_eq!(&p[..100], &text[..100]);
    }

    #[test]
    fn test_preview_counts_chars_not_bytes() {
        // 101 multi-byte characters must still truncate at 100 characters
        let text = "ä".repeat(101);
        let p = preview(&text);
        assert_eq!(p.chars().count(), 103);
        assert!(p.ends_with("..."));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape(r"a\b"), r"a\\b");
    }
}
