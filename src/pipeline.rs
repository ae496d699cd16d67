//! Transform Pipeline
//!
//! capture -> rewrite -> apply. At most one transform is in flight at a
//! time; while one runs, new requests are refused with a notification
//! rather than queued. The rewrite itself runs on a detached background
//! task so hotkey handling never blocks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::capture::{CaptureMode, CapturedText, TextSource};
use crate::console;
use crate::core::Rewriter;
use crate::error::BlurResult;
use crate::hotkeys::HotkeyAction;
use crate::notify::{preview, Notifier};

const APP_TITLE: &str = "Blur";

/// Clears the busy flag when the owning request finishes, success or not.
struct BusyGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// The capture -> transform -> apply pipeline and its single-flight state.
pub struct Pipeline {
    source: Arc<dyn TextSource>,
    rewriter: Arc<dyn Rewriter>,
    notifier: Arc<dyn Notifier>,
    busy: Arc<AtomicBool>,
}

impl Pipeline {
    pub fn new(
        source: Arc<dyn TextSource>,
        rewriter: Arc<dyn Rewriter>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            source,
            rewriter,
            notifier,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a transform request is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Route a dispatched hotkey or menu action.
    pub fn handle(&self, action: HotkeyAction) {
        match action {
            HotkeyAction::CleanupSelection => self.cleanup_selection(),
            HotkeyAction::CleanupClipboard => self.cleanup_clipboard(),
            HotkeyAction::DisplayClipboard => self.display_clipboard(),
        }
    }

    /// Improve the currently selected text and write it back in place.
    pub fn cleanup_selection(&self) {
        let guard = match self.try_acquire() {
            Some(guard) => guard,
            None => return,
        };
        let text = match self.source.selected_text() {
            Ok(text) => text,
            Err(e) => {
                // Guard drops here, so the next request is admitted.
                self.notifier.notify(APP_TITLE, "Error", &e.to_string());
                return;
            }
        };
        debug!("Captured selection: {}", preview(&text));
        self.dispatch(
            CapturedText {
                text,
                mode: CaptureMode::Selection,
            },
            guard,
        );
    }

    /// Improve the clipboard content and copy the result back.
    pub fn cleanup_clipboard(&self) {
        let guard = match self.try_acquire() {
            Some(guard) => guard,
            None => return,
        };
        let text = match self.source.clipboard_text() {
            Ok(text) => text,
            Err(e) => {
                self.notifier.notify(APP_TITLE, "Error", &e.to_string());
                return;
            }
        };
        self.dispatch(
            CapturedText {
                text,
                mode: CaptureMode::Clipboard,
            },
            guard,
        );
    }

    /// Show the current clipboard content. Never touches the remote service
    /// and is not gated by the busy flag.
    pub fn display_clipboard(&self) {
        match self.source.clipboard_text() {
            Ok(text) => {
                console::print_clipboard(&text);
                self.notifier
                    .notify(APP_TITLE, "Current clipboard content:", &preview(&text));
            }
            Err(e) => {
                self.notifier.notify(APP_TITLE, "Error", &e.to_string());
            }
        }
    }

    /// Atomically claim the single request slot.
    fn try_acquire(&self) -> Option<BusyGuard> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("Transform already in flight, refusing request");
            self.notifier
                .notify(APP_TITLE, "Please wait", "Still processing previous text...");
            return None;
        }
        Some(BusyGuard {
            flag: Arc::clone(&self.busy),
        })
    }

    /// Hand the captured text to a detached background task.
    fn dispatch(&self, captured: CapturedText, guard: BusyGuard) {
        let source = Arc::clone(&self.source);
        let rewriter = Arc::clone(&self.rewriter);
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            // The guard lives for the whole task; the flag clears however
            // the task exits, panic included.
            let _guard = guard;
            process(source, rewriter, notifier, captured).await;
        });
    }
}

async fn process(
    source: Arc<dyn TextSource>,
    rewriter: Arc<dyn Rewriter>,
    notifier: Arc<dyn Notifier>,
    captured: CapturedText,
) {
    info!(
        "🛠️ Improving {} text ({} chars)",
        captured.mode,
        captured.text.chars().count()
    );

    let improved = match rewriter.rewrite(&captured.text).await {
        Ok(improved) => improved,
        Err(e) => {
            warn!("Completion request failed: {}", e);
            notifier.notify(APP_TITLE, "Error", &e.to_string());
            return;
        }
    };

    match apply(&*source, &captured.mode, &improved) {
        Ok(()) => {
            let subtitle = match captured.mode {
                CaptureMode::Selection => "Text cleaned and replaced",
                CaptureMode::Clipboard => "Text cleaned and copied to clipboard",
            };
            notifier.notify(APP_TITLE, subtitle, &preview(&improved));
            console::print_comparison(&captured.text, &improved);
        }
        Err(e) => {
            warn!("Write-back failed: {}", e);
            notifier.notify(APP_TITLE, "Error", &e.to_string());
        }
    }
}

/// Route the improved text back per capture mode.
fn apply(source: &dyn TextSource, mode: &CaptureMode, improved: &str) -> BlurResult<()> {
    match mode {
        CaptureMode::Selection => source.replace_selection(improved),
        CaptureMode::Clipboard => source.set_clipboard(improved),
    }
}
