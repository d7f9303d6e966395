//! Rendering the language and voice pickers into a view

use super::view::{PanelId, View};
use crate::error::SelectionError;
use crate::voice::{Languages, Voice};
use log::debug;

/// Render one choice per language, checking `checked`
///
/// Aborts without touching the view if the language container is missing or
/// there are no languages.
pub fn render_languages<V: View + ?Sized>(
    view: &mut V,
    languages: &Languages,
    checked: &str,
) -> Result<(), SelectionError> {
    let panel = view
        .panel_mut(PanelId::Language)
        .ok_or(SelectionError::MissingContainer("Language"))?;

    if languages.is_empty() {
        return Err(SelectionError::NoLanguages);
    }

    panel.clear();
    for locale in languages.locales() {
        panel.push(locale, locale, locale == checked);
    }

    debug!("Rendered {} languages", languages.len());
    Ok(())
}

/// Replace the voice choices with `voices`, checking the first
///
/// The container is cleared even when `voices` turns out to be empty.
pub fn render_voices<V: View + ?Sized>(
    view: &mut V,
    language: &str,
    voices: &[Voice],
) -> Result<(), SelectionError> {
    let panel = view
        .panel_mut(PanelId::Voice)
        .ok_or(SelectionError::MissingContainer("Voice"))?;

    panel.clear();

    if voices.is_empty() {
        return Err(SelectionError::NoVoices(language.to_string()));
    }

    for (index, voice) in voices.iter().enumerate() {
        panel.push(voice.id.as_str(), voice.name.as_str(), index == 0);
    }

    debug!("Rendered {} voices for {}", voices.len(), language);
    Ok(())
}

/// Move the checked mark of `panel` to `value`
pub fn mark_checked<V: View + ?Sized>(view: &mut V, panel: PanelId, value: &str) {
    if let Some(panel) = view.panel_mut(panel) {
        panel.check(value);
    }
}
