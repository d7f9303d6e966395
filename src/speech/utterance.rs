//! Reusable utterance and the play trigger

use crate::speech::Synth;
use crate::voice::Voice;
use crate::Result;
use log::debug;

/// One request to speak `text` with `voice`
///
/// The picker keeps a single utterance and overwrites it on every play.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Utterance {
    pub voice: Option<Voice>,
    pub text: String,
}

impl Utterance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit this utterance to `synth`
    pub fn submit(&self, synth: &mut dyn Synth) -> Result<()> {
        if let Some(voice) = &self.voice {
            synth.set_voice(voice)?;
        }
        synth.speak(&self.text)
    }
}

/// Speak `text` with `voice`, replacing whatever is playing
///
/// Empty text is a no-op. Otherwise prior speech is cancelled before the
/// reused utterance is submitted. Without a voice the backend's current one
/// is used. Returns whether anything was spoken.
pub fn play(
    synth: &mut dyn Synth,
    utterance: &mut Utterance,
    voice: Option<&Voice>,
    text: &str,
) -> Result<bool> {
    if text.is_empty() {
        return Ok(false);
    }

    synth.cancel()?;
    utterance.voice = voice.cloned();
    utterance.text = text.to_string();
    debug!("Playing {} chars with voice {:?}", text.len(), voice.map(|v| &v.id));
    utterance.submit(synth)?;

    Ok(true)
}
