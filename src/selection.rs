//! Selection state for the language and voice pickers
//!
//! A `Selection` is a value: the change handlers never mutate it in place but
//! return the next state, leaving the caller free to keep the old one when a
//! change is rejected.

use crate::error::SelectionError;
use crate::voice::{Languages, Voice};
use log::debug;

/// Current language, its voices and the chosen voice
///
/// `voice` is always one of `voices`, and `voices` is always the group of
/// `language`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    languages: Languages,
    language: String,
    voices: Vec<Voice>,
    voice: Voice,
}

impl Selection {
    /// Build the initial selection from grouped languages
    ///
    /// Picks `preferred` when it is one of the groups, otherwise the first
    /// group. Returns `NoLanguages` if nothing was grouped.
    pub fn new(languages: Languages, preferred: &str) -> Result<Self, SelectionError> {
        let language = languages
            .default_locale(preferred)
            .ok_or(SelectionError::NoLanguages)?
            .to_string();
        Self::for_language(languages, language)
    }

    fn for_language(languages: Languages, language: String) -> Result<Self, SelectionError> {
        let voices = languages
            .get(&language)
            .map(|g| g.voices.clone())
            .unwrap_or_default();
        let voice = voices
            .first()
            .cloned()
            .ok_or_else(|| SelectionError::NoVoices(language.clone()))?;

        debug!("Selection: language {} voice {}", language, voice.id);
        Ok(Self {
            languages,
            language,
            voices,
            voice,
        })
    }

    pub fn languages(&self) -> &Languages {
        &self.languages
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    pub fn voice(&self) -> &Voice {
        &self.voice
    }

    /// Switch to another language, resetting the voice to its first entry
    pub fn with_language(&self, locale: &str) -> Result<Self, SelectionError> {
        if !self.languages.contains(locale) {
            return Err(SelectionError::InvalidLanguage(locale.to_string()));
        }
        Self::for_language(self.languages.clone(), locale.to_string())
    }

    /// Switch to another voice of the current language
    pub fn with_voice(&self, id: &str) -> Result<Self, SelectionError> {
        let voice = self
            .voices
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or_else(|| SelectionError::InvalidVoice(id.to_string()))?;

        Ok(Self {
            voice,
            ..self.clone()
        })
    }

    /// Locale `offset` steps away from the current one, wrapping around
    pub fn cycle_language(&self, offset: isize) -> &str {
        let locales: Vec<&str> = self.languages.locales().collect();
        let current = self.languages.position(&self.language).unwrap_or(0);
        locales[wrap(current, offset, locales.len())]
    }

    /// Voice id `offset` steps away from the current one, wrapping around
    pub fn cycle_voice(&self, offset: isize) -> &str {
        let current = self
            .voices
            .iter()
            .position(|v| v.id == self.voice.id)
            .unwrap_or(0);
        &self.voices[wrap(current, offset, self.voices.len())].id
    }
}

fn wrap(index: usize, offset: isize, len: usize) -> usize {
    let len = len as isize;
    (((index as isize + offset) % len + len) % len) as usize
}
