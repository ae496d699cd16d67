//! Terminal output
//!
//! Before/after panels and the startup banner, shown only when stdout is an
//! interactive terminal. When Blur runs detached (launchd, background), all
//! of this is skipped.

use std::io::IsTerminal;

const PANEL_WIDTH: usize = 72;

/// Whether stdout is attached to an interactive terminal.
pub fn is_interactive() -> bool {
    std::io::stdout().is_terminal()
}

/// Render a titled panel around the given body text.
pub fn render_panel(title: &str, body: &str) -> String {
    let pad = PANEL_WIDTH.saturating_sub(title.chars().count() + 4);
    let mut out = String::new();
    out.push_str(&format!("┌─ {} {}\n", title, "─".repeat(pad)));
    for line in body.lines() {
        out.push_str(&format!("│ {}\n", line));
    }
    out.push_str(&format!("└{}\n", "─".repeat(PANEL_WIDTH)));
    out
}

/// Print the original and improved text when running attached to a terminal.
pub fn print_comparison(original: &str, improved: &str) {
    if !is_interactive() {
        return;
    }
    println!("\n{}", render_panel("✍️ Original", original));
    println!("{}", render_panel("✨ Cleaned", improved));
}

/// Print the clipboard content when running attached to a terminal.
pub fn print_clipboard(text: &str) {
    if !is_interactive() {
        return;
    }
    println!("\n{}", render_panel("📋 Clipboard", text));
}

/// Startup instructions for terminal launches.
pub fn print_banner() {
    if !is_interactive() {
        return;
    }
    println!("Blur is running in the background.");
    println!("  1. Write your text anywhere");
    println!("  2. Select it and press Cmd+Opt+E to clean up the selection,");
    println!("     or copy it and press Cmd+Opt+C to clean up the clipboard");
    println!("  3. Cmd+Shift+C shows the current clipboard content");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_panel_wraps_body_lines() {
        let panel = render_panel("Test", "line one\nline two");
        let lines: Vec<&str> = panel.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Test"));
        assert_eq!(lines[1], "│ line one");
        assert_eq!(lines[2], "│ line two");
        assert!(lines[3].starts_with('└'));
    }

    #[test]
    fn test_render_panel_empty_body() {
        let panel = render_panel("Empty", "");
        assert_eq!(panel.lines().count(), 2);
    }
}
