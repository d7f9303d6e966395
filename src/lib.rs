//! voicebox - pick an accent and a voice, then hear your text
//!
//! Enumerates the platform's speech voices, groups one language family by
//! locale, and plays typed text with the chosen voice.

pub mod error;
pub mod input;
pub mod selection;
pub mod speech;
pub mod state;
pub mod terminal;
pub mod ui;
pub mod voice;

pub use error::{Result, SelectionError, VoiceboxError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "voicebox";
