//! Input handling and key bindings
//!
//! Raw stdin bytes are looked up in the keymap; bound keys drive the pickers
//! and playback, printable text goes to the input line.

pub mod handler;
pub mod keymap;

pub use handler::{Command, DefaultKeyHandler};
pub use keymap::{create_default_keymap, KeyAction, KeySequence};
