//! Native TTS backend using the tts crate
//!
//! The `tts` crate provides a unified interface to:
//! - Speech Dispatcher on Linux
//! - AVFoundation on macOS/iOS
//! - WinRT on Windows

use crate::speech::Synth;
use crate::voice::Voice;
use crate::{Result, VoiceboxError};
use log::{debug, error, warn};
use tts::Tts as TtsCrate;

/// Native TTS backend using the tts crate
pub struct NativeSynth {
    /// The tts crate's TTS instance
    tts: TtsCrate,

    /// Platform voices from the last enumeration, kept to map ids back
    platform_voices: Vec<tts::Voice>,
}

impl NativeSynth {
    /// Create a new native TTS synthesizer
    pub fn new() -> Result<Self> {
        debug!("Creating native TTS backend");

        let tts = TtsCrate::default()
            .map_err(|e| VoiceboxError::Speech(format!("Failed to initialize TTS: {}", e)))?;

        debug!("Native TTS backend created successfully");

        Ok(Self {
            tts,
            platform_voices: Vec::new(),
        })
    }

    /// Convert our volume (0-100) to tts crate volume (0.0-1.0)
    fn convert_volume(volume: u8) -> f32 {
        volume as f32 / 100.0
    }

    /// Map our rate (0-100, 50 normal) onto the backend's rate range
    fn convert_rate(rate: u8, min: f32, normal: f32, max: f32) -> f32 {
        let rate = rate.min(100) as f32;
        if rate <= 50.0 {
            min + (normal - min) * rate / 50.0
        } else {
            normal + (max - normal) * (rate - 50.0) / 50.0
        }
    }
}

impl Synth for NativeSynth {
    fn voices(&mut self) -> Result<Vec<Voice>> {
        if !self.tts.supported_features().voice {
            warn!("Voice selection not supported on this platform");
            return Ok(Vec::new());
        }

        self.platform_voices = self
            .tts
            .voices()
            .map_err(|e| VoiceboxError::Speech(format!("Failed to get voices: {}", e)))?;

        Ok(self
            .platform_voices
            .iter()
            .map(|v| Voice::new(v.name(), v.language().to_string(), v.id()))
            .collect())
    }

    fn set_voice(&mut self, voice: &Voice) -> Result<()> {
        match self.platform_voices.iter().find(|v| v.id() == voice.id) {
            Some(platform_voice) => {
                debug!("Selecting voice: {:?}", platform_voice);
                self.tts
                    .set_voice(platform_voice)
                    .map_err(|e| VoiceboxError::Speech(format!("Failed to set voice: {}", e)))
            }
            None => {
                warn!("Voice {} is not known to the backend", voice.id);
                Ok(())
            }
        }
    }

    fn set_rate(&mut self, rate: u8) -> Result<()> {
        debug!("Setting rate to {}", rate);

        if !self.tts.supported_features().rate {
            warn!("Rate control not supported on this platform");
            return Ok(());
        }

        let converted = Self::convert_rate(
            rate,
            self.tts.min_rate(),
            self.tts.normal_rate(),
            self.tts.max_rate(),
        );
        self.tts
            .set_rate(converted)
            .map_err(|e| VoiceboxError::Speech(format!("Failed to set rate: {}", e)))?;

        Ok(())
    }

    fn set_volume(&mut self, volume: u8) -> Result<()> {
        debug!("Setting volume to {}", volume);

        if !self.tts.supported_features().volume {
            warn!("Volume control not supported on this platform");
            return Ok(());
        }

        self.tts
            .set_volume(Self::convert_volume(volume))
            .map_err(|e| VoiceboxError::Speech(format!("Failed to set volume: {}", e)))?;

        Ok(())
    }

    fn speak(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        debug!("Speaking: {}", text);
        self.tts.speak(text, false).map_err(|e| {
            error!("Failed to speak: {}", e);
            VoiceboxError::Speech(format!("Speak failed: {}", e))
        })?;

        Ok(())
    }

    fn cancel(&mut self) -> Result<()> {
        debug!("Canceling speech");
        self.tts.stop().map_err(|e| {
            error!("Failed to cancel speech: {}", e);
            VoiceboxError::Speech(format!("Cancel failed: {}", e))
        })?;

        Ok(())
    }
}
