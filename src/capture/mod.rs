//! Text Source Adapter
//!
//! Reads and writes text in the surrounding desktop session: the current
//! selection through the accessibility tree, and the system clipboard.
//! Accessibility failures never escape as panics; they degrade to the
//! matching [`BlurError`] variant and surface once as a notification.

use std::fmt;

use arboard::Clipboard;

use crate::error::{BlurError, BlurResult};

#[cfg(target_os = "macos")]
mod macos;

/// Where a piece of captured text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    Selection,
    Clipboard,
}

impl fmt::Display for CaptureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureMode::Selection => write!(f, "selection"),
            CaptureMode::Clipboard => write!(f, "clipboard"),
        }
    }
}

/// Text captured at dispatch time, consumed once by the pipeline.
#[derive(Debug, Clone)]
pub struct CapturedText {
    pub text: String,
    pub mode: CaptureMode,
}

/// Seam between the pipeline and the OS text surfaces.
pub trait TextSource: Send + Sync {
    /// Currently selected text in the focused UI element.
    fn selected_text(&self) -> BlurResult<String>;

    /// Overwrite the focused element's selection. The element may have
    /// vanished since the read; the write fails, no retry.
    fn replace_selection(&self, text: &str) -> BlurResult<()>;

    /// Current clipboard text.
    fn clipboard_text(&self) -> BlurResult<String>;

    /// Replace the clipboard content.
    fn set_clipboard(&self, text: &str) -> BlurResult<()>;
}

/// Live adapter over the accessibility tree and the OS clipboard.
#[derive(Default)]
pub struct SystemTextSource;

impl SystemTextSource {
    pub fn new() -> Self {
        Self
    }
}

impl TextSource for SystemTextSource {
    fn selected_text(&self) -> BlurResult<String> {
        #[cfg(target_os = "macos")]
        {
            let raw = macos::selected_text()?;
            let text = raw.trim();
            if text.is_empty() {
                return Err(BlurError::NoSelectedText);
            }
            // AX occasionally reports internal counters through the
            // selected-text attribute; skip values that are digits only.
            if is_numeric_sentinel(text) {
                tracing::debug!("Skipping numeric selection '{}'", text);
                return Err(BlurError::NoSelectedText);
            }
            Ok(text.to_string())
        }
        #[cfg(not(target_os = "macos"))]
        {
            tracing::warn!("Selection capture is only available on macOS");
            Err(BlurError::NoFocusedElement)
        }
    }

    fn replace_selection(&self, text: &str) -> BlurResult<()> {
        #[cfg(target_os = "macos")]
        {
            macos::set_selected_text(text)
        }
        #[cfg(not(target_os = "macos"))]
        {
            let _ = text;
            tracing::warn!("Selection replacement is only available on macOS");
            Err(BlurError::WriteBack)
        }
    }

    fn clipboard_text(&self) -> BlurResult<String> {
        let mut clipboard = Clipboard::new().map_err(clipboard_err)?;
        match clipboard.get_text() {
            Ok(text) if !text.is_empty() => Ok(text),
            Ok(_) => Err(BlurError::NoClipboardContent),
            Err(arboard::Error::ContentNotAvailable) => Err(BlurError::NoClipboardContent),
            Err(e) => Err(clipboard_err(e)),
        }
    }

    fn set_clipboard(&self, text: &str) -> BlurResult<()> {
        let mut clipboard = Clipboard::new().map_err(clipboard_err)?;
        clipboard.set_text(text.to_string()).map_err(clipboard_err)?;
        Ok(())
    }
}

fn clipboard_err(e: arboard::Error) -> BlurError {
    BlurError::Clipboard(e.to_string())
}

/// Digits-only strings coming out of the selected-text attribute are
/// treated as accessibility sentinel values, not user text.
pub fn is_numeric_sentinel(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// Whether the process holds accessibility permission.
pub fn accessibility_trusted() -> bool {
    #[cfg(target_os = "macos")]
    {
        macos::process_trusted()
    }
    #[cfg(not(target_os = "macos"))]
    {
        true
    }
}
