//! Speech synthesizer abstraction
//!
//! Provides a unified interface over the platform's text-to-speech.
//! The picker uses this to enumerate voices and play back typed text.

use crate::voice::Voice;
use crate::{Result, VoiceboxError};
use log::info;

/// Speech synthesizer trait
///
/// Backends enumerate their voices and accept one utterance at a time.
pub trait Synth {
    /// Voices currently known to the backend
    ///
    /// May be empty while the platform is still populating its list.
    fn voices(&mut self) -> Result<Vec<Voice>>;

    /// Use `voice` for subsequent speech
    fn set_voice(&mut self, voice: &Voice) -> Result<()>;

    /// Set speech rate (0-100, where 50 is normal)
    fn set_rate(&mut self, rate: u8) -> Result<()>;

    /// Set speech volume (0-100)
    fn set_volume(&mut self, volume: u8) -> Result<()>;

    /// Queue text for speaking
    fn speak(&mut self, text: &str) -> Result<()>;

    /// Cancel speech that is playing or queued
    fn cancel(&mut self) -> Result<()>;
}

/// Create a platform-appropriate speech synthesizer
///
/// The `tts` crate picks Speech Dispatcher on Linux, AVFoundation on macOS
/// and WinRT/SAPI on Windows.
pub fn create_synth() -> Result<Box<dyn Synth>> {
    let platform = std::env::consts::OS;
    info!("Creating native speech synthesizer for platform: {}", platform);

    use super::backends::native::NativeSynth;

    match NativeSynth::new() {
        Ok(synth) => {
            info!("Initialized native TTS backend");
            Ok(Box::new(synth))
        }
        Err(e) => Err(VoiceboxError::Speech(format!(
            "Failed to initialize speech backend for platform '{}': {}",
            platform, e
        ))),
    }
}
