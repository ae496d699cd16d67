use std::sync::Mutex;

use blur::capture::TextSource;
use blur::error::{BlurError, BlurResult};

/// Text source with scripted selection and clipboard content.
#[derive(Default)]
pub struct MockTextSource {
    pub selection: Mutex<Option<String>>,
    pub clipboard: Mutex<Option<String>>,
    pub replaced: Mutex<Option<String>>,
    /// Simulate the focused element vanishing before the write-back.
    pub fail_replace: bool,
}

impl MockTextSource {
    pub fn with_selection(text: &str) -> Self {
        let source = Self::default();
        *source.selection.lock().unwrap() = Some(text.to_string());
        source
    }

    pub fn with_clipboard(text: &str) -> Self {
        let source = Self::default();
        *source.clipboard.lock().unwrap() = Some(text.to_string());
        source
    }

    pub fn replaced_text(&self) -> Option<String> {
        self.replaced.lock().unwrap().clone()
    }

    pub fn clipboard_content(&self) -> Option<String> {
        self.clipboard.lock().unwrap().clone()
    }
}

impl TextSource for MockTextSource {
    fn selected_text(&self) -> BlurResult<String> {
        self.selection
            .lock()
            .unwrap()
            .clone()
            .ok_or(BlurError::NoSelectedText)
    }

    fn replace_selection(&self, text: &str) -> BlurResult<()> {
        if self.fail_replace {
            return Err(BlurError::WriteBack);
        }
        *self.replaced.lock().unwrap() = Some(text.to_string());
        Ok(())
    }

    fn clipboard_text(&self) -> BlurResult<String> {
        self.clipboard
            .lock()
            .unwrap()
            .clone()
            .ok_or(BlurError::NoClipboardContent)
    }

    fn set_clipboard(&self, text: &str) -> BlurResult<()> {
        *self.clipboard.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}
