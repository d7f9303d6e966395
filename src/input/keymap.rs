//! Default key bindings for voicebox

use std::collections::HashMap;

/// Key sequence type
pub type KeySequence = Vec<u8>;

/// Action identifier for key bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Language picker
    PrevLanguage,
    NextLanguage,

    // Voice picker
    PrevVoice,
    NextVoice,

    // Playback
    Play,
    Silence,

    // Text input
    Backspace,

    Quit,
}

/// Create the default keymap
pub fn create_default_keymap() -> HashMap<KeySequence, KeyAction> {
    let mut map = HashMap::new();

    // Arrow keys, normal and application cursor mode
    map.insert(b"\x1b[D".to_vec(), KeyAction::PrevLanguage);
    map.insert(b"\x1b[C".to_vec(), KeyAction::NextLanguage);
    map.insert(b"\x1b[A".to_vec(), KeyAction::PrevVoice);
    map.insert(b"\x1b[B".to_vec(), KeyAction::NextVoice);
    map.insert(b"\x1bOD".to_vec(), KeyAction::PrevLanguage);
    map.insert(b"\x1bOC".to_vec(), KeyAction::NextLanguage);
    map.insert(b"\x1bOA".to_vec(), KeyAction::PrevVoice);
    map.insert(b"\x1bOB".to_vec(), KeyAction::NextVoice);

    // Enter and ctrl+p play, ctrl+x silences
    map.insert(b"\r".to_vec(), KeyAction::Play);
    map.insert(b"\n".to_vec(), KeyAction::Play);
    map.insert(b"\x10".to_vec(), KeyAction::Play);
    map.insert(b"\x18".to_vec(), KeyAction::Silence);

    map.insert(b"\x08".to_vec(), KeyAction::Backspace);
    map.insert(b"\x7f".to_vec(), KeyAction::Backspace);

    // Escape and ctrl+c
    map.insert(b"\x1b".to_vec(), KeyAction::Quit);
    map.insert(b"\x03".to_vec(), KeyAction::Quit);

    map
}
