//! Voices and their grouping by locale
//!
//! The platform hands us a flat list of voices. We keep the ones belonging to
//! a language family (e.g. "en") and bucket them by exact locale, so each
//! accent ("en-US", "en-GB", ...) becomes one selectable language.

use log::debug;
use serde::Serialize;

/// A snapshot of one platform voice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Voice {
    /// Display name shown next to the choice
    pub name: String,

    /// Locale identifier, e.g. "en-US"
    pub locale: String,

    /// Backend-unique voice identifier
    pub id: String,
}

impl Voice {
    pub fn new(name: impl Into<String>, locale: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locale: locale.into(),
            id: id.into(),
        }
    }
}

/// All voices sharing one locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageGroup {
    pub locale: String,
    pub voices: Vec<Voice>,
}

/// Locale groups in platform enumeration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Languages {
    groups: Vec<LanguageGroup>,
}

impl Languages {
    /// Group `voices` whose locale contains `family`
    ///
    /// Groups appear in order of each locale's first occurrence, and voices
    /// keep their enumeration order inside a group.
    pub fn from_voices<'a, I>(voices: I, family: &str) -> Self
    where
        I: IntoIterator<Item = &'a Voice>,
    {
        let mut groups: Vec<LanguageGroup> = Vec::new();

        for voice in voices.into_iter().filter(|v| v.locale.contains(family)) {
            match groups.iter_mut().find(|g| g.locale == voice.locale) {
                Some(group) => group.voices.push(voice.clone()),
                None => groups.push(LanguageGroup {
                    locale: voice.locale.clone(),
                    voices: vec![voice.clone()],
                }),
            }
        }

        debug!("Grouped voices into {} '{}' locales", groups.len(), family);
        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn groups(&self) -> &[LanguageGroup] {
        &self.groups
    }

    /// Locale identifiers in order
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.locale.as_str())
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.position(locale).is_some()
    }

    pub fn position(&self, locale: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.locale == locale)
    }

    pub fn get(&self, locale: &str) -> Option<&LanguageGroup> {
        self.groups.iter().find(|g| g.locale == locale)
    }

    /// Preferred locale if grouped, otherwise the first one
    pub fn default_locale(&self, preferred: &str) -> Option<&str> {
        self.get(preferred)
            .or_else(|| self.groups.first())
            .map(|g| g.locale.as_str())
    }
}
