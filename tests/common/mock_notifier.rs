use std::sync::Mutex;

use blur::notify::Notifier;

/// Records every notification for later assertions.
#[derive(Default)]
pub struct MockNotifier {
    pub messages: Mutex<Vec<(String, String, String)>>,
}

impl MockNotifier {
    pub fn count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    /// Whether any notification carried the given subtitle.
    pub fn has_subtitle(&self, subtitle: &str) -> bool {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .any(|(_, s, _)| s == subtitle)
    }

    /// Whether any notification body contains the given fragment.
    pub fn has_message(&self, fragment: &str) -> bool {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .any(|(_, _, m)| m.contains(fragment))
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, title: &str, subtitle: &str, message: &str) {
        self.messages.lock().unwrap().push((
            title.to_string(),
            subtitle.to_string(),
            message.to_string(),
        ));
    }
}
