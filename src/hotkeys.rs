//! Hotkey Dispatcher
//!
//! Global key-event listener registered once at startup. Modifier state is
//! tracked from press/release events and recognized chords are resolved
//! through a static table, so no per-keystroke string comparison happens.
//! The callback only enqueues the mapped action; all work runs on the event
//! loop side. Events that don't map to anything are silently ignored - a
//! stray event must never take the listener down.

use std::thread;

use rdev::{listen, Event, EventType, Key};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

/// Actions a chord can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    CleanupSelection,
    CleanupClipboard,
    DisplayClipboard,
}

/// Modifier keys held down at the time of a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub command: bool,
    pub option: bool,
    pub shift: bool,
}

impl Modifiers {
    /// Apply a modifier press/release. Returns true when the key was a
    /// modifier (and therefore not a chord candidate).
    fn apply(&mut self, key: Key, pressed: bool) -> bool {
        match key {
            Key::MetaLeft | Key::MetaRight => self.command = pressed,
            Key::Alt | Key::AltGr => self.option = pressed,
            Key::ShiftLeft | Key::ShiftRight => self.shift = pressed,
            _ => return false,
        }
        true
    }
}

/// Chord table: (required modifier set, key) -> action.
const CHORDS: &[(Modifiers, Key, HotkeyAction)] = &[
    (
        Modifiers { command: true, option: true, shift: false },
        Key::KeyE,
        HotkeyAction::CleanupSelection,
    ),
    (
        Modifiers { command: true, option: true, shift: false },
        Key::KeyC,
        HotkeyAction::CleanupClipboard,
    ),
    (
        Modifiers { command: true, option: false, shift: true },
        Key::KeyC,
        HotkeyAction::DisplayClipboard,
    ),
];

/// Look up the action for a key press under the given modifier state.
pub fn match_chord(modifiers: Modifiers, key: Key) -> Option<HotkeyAction> {
    CHORDS
        .iter()
        .find(|(required, chord_key, _)| *required == modifiers && *chord_key == key)
        .map(|(_, _, action)| *action)
}

/// Register the global listener on its own thread.
///
/// rdev's listen() never returns under normal operation, so the thread is
/// detached for the lifetime of the process.
pub fn spawn_listener(tx: UnboundedSender<HotkeyAction>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut modifiers = Modifiers::default();
        let callback = move |event: Event| match event.event_type {
            EventType::KeyPress(key) => {
                if modifiers.apply(key, true) {
                    return;
                }
                if let Some(action) = match_chord(modifiers, key) {
                    debug!("⌨️ Hotkey chord matched: {:?}", action);
                    // Receiver gone means we are shutting down.
                    let _ = tx.send(action);
                }
            }
            EventType::KeyRelease(key) => {
                modifiers.apply(key, false);
            }
            _ => {}
        };
        if let Err(e) = listen(callback) {
            warn!("Global key listener stopped: {:?}", e);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CMD_OPT: Modifiers = Modifiers { command: true, option: true, shift: false };
    const CMD_SHIFT: Modifiers = Modifiers { command: true, option: false, shift: true };

    #[test]
    fn test_chord_table() {
        assert_eq!(
            match_chord(CMD_OPT, Key::KeyE),
            Some(HotkeyAction::CleanupSelection)
        );
        assert_eq!(
            match_chord(CMD_OPT, Key::KeyC),
            Some(HotkeyAction::CleanupClipboard)
        );
        assert_eq!(
            match_chord(CMD_SHIFT, Key::KeyC),
            Some(HotkeyAction::DisplayClipboard)
        );
    }

    #[test]
    fn test_chord_requires_exact_modifiers() {
        assert_eq!(match_chord(Modifiers::default(), Key::KeyE), None);
        assert_eq!(
            match_chord(Modifiers { command: true, option: false, shift: false }, Key::KeyE),
            None
        );
        // Extra shift held down does not fire the cleanup chord
        assert_eq!(
            match_chord(Modifiers { command: true, option: true, shift: true }, Key::KeyE),
            None
        );
    }

    #[test]
    fn test_unbound_keys_ignored() {
        assert_eq!(match_chord(CMD_OPT, Key::KeyX), None);
        assert_eq!(match_chord(CMD_OPT, Key::Space), None);
    }

    #[test]
    fn test_modifier_tracking() {
        let mut mods = Modifiers::default();
        assert!(mods.apply(Key::MetaLeft, true));
        assert!(mods.apply(Key::Alt, true));
        assert_eq!(mods, CMD_OPT);

        assert!(mods.apply(Key::Alt, false));
        assert!(!mods.option);

        // Regular keys are not modifiers
        assert!(!mods.apply(Key::KeyE, true));
    }
}
