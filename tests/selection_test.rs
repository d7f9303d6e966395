//! Language and voice selection tests
//!
//! Drives the picker controller with a fake backend and an in-memory view

mod common;

use common::{app_with, ava_and_ben, temp_config, FakeSynth};
use voicebox::state::App;
use voicebox::ui::{MemoryView, PanelId, View};
use voicebox::voice::Voice;

fn checked(view: &MemoryView, panel: PanelId) -> Option<String> {
    view.panel(panel)
        .and_then(|p| p.checked())
        .map(|c| c.value.clone())
}

fn values(view: &MemoryView, panel: PanelId) -> Vec<String> {
    view.panel(panel)
        .map(|p| p.choices().iter().map(|c| c.value.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn test_initial_selection_prefers_default_locale() {
    let (app, _calls, _dir) = app_with(ava_and_ben());
    let selection = app.selection().expect("selection");

    assert_eq!(selection.language(), "en-US");
    assert_eq!(selection.voice().id, "v1");
    let locales: Vec<_> = selection.languages().locales().collect();
    assert_eq!(locales, vec!["en-US", "en-GB"]);

    assert_eq!(values(&app.view, PanelId::Language), vec!["en-US", "en-GB"]);
    assert_eq!(checked(&app.view, PanelId::Language).as_deref(), Some("en-US"));
    assert_eq!(values(&app.view, PanelId::Voice), vec!["v1"]);
    assert_eq!(checked(&app.view, PanelId::Voice).as_deref(), Some("v1"));
}

#[test]
fn test_initial_selection_falls_back_to_first_language() {
    let voices = vec![
        Voice::new("Ben", "en-GB", "v2"),
        Voice::new("Kylie", "en-AU", "v5"),
    ];
    let (app, _calls, _dir) = app_with(voices);

    assert_eq!(app.selection().unwrap().language(), "en-GB");
    assert_eq!(checked(&app.view, PanelId::Language).as_deref(), Some("en-GB"));
}

#[test]
fn test_configured_default_locale() {
    let (mut config, _dir) = temp_config();
    config.set("speech", "default_locale", "en-GB");
    let (synth, _calls) = FakeSynth::new(ava_and_ben());
    let mut app = App::new(config, Box::new(synth), MemoryView::new()).unwrap();
    app.try_init(true);

    assert_eq!(app.selection().unwrap().language(), "en-GB");
    assert_eq!(app.selection().unwrap().voice().id, "v2");
}

#[test]
fn test_other_language_families_are_dropped() {
    let mut voices = ava_and_ben();
    voices.push(Voice::new("Amelie", "fr-FR", "v3"));
    let (app, _calls, _dir) = app_with(voices);

    assert!(!app.selection().unwrap().languages().contains("fr-FR"));
    assert_eq!(values(&app.view, PanelId::Language).len(), 2);
}

#[test]
fn test_language_change_resets_voice() {
    let voices = vec![
        Voice::new("Ava", "en-US", "v1"),
        Voice::new("Ben", "en-GB", "v2"),
        Voice::new("Cal", "en-GB", "v3"),
    ];
    let (mut app, _calls, _dir) = app_with(voices);

    assert!(app.on_language_change("en-GB"));
    assert!(app.on_voice_change("v3"));
    assert!(app.on_language_change("en-US"));
    assert!(app.on_language_change("en-GB"));

    let selection = app.selection().unwrap();
    assert_eq!(selection.language(), "en-GB");
    assert_eq!(selection.voice().id, "v2");
    let ids: Vec<_> = selection.voices().iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["v2", "v3"]);

    assert_eq!(values(&app.view, PanelId::Voice), vec!["v2", "v3"]);
    assert_eq!(checked(&app.view, PanelId::Voice).as_deref(), Some("v2"));
    assert_eq!(checked(&app.view, PanelId::Language).as_deref(), Some("en-GB"));
}

#[test]
fn test_select_en_gb_scenario() {
    let (mut app, _calls, _dir) = app_with(ava_and_ben());

    assert!(app.on_language_change("en-GB"));

    let selection = app.selection().unwrap();
    assert_eq!(selection.voices(), &[Voice::new("Ben", "en-GB", "v2")]);
    assert_eq!(selection.voice().id, "v2");
}

#[test]
fn test_unknown_language_rejected() {
    let (mut app, _calls, _dir) = app_with(ava_and_ben());
    let before = app.selection().cloned();

    assert!(!app.on_language_change("fr-FR"));
    assert_eq!(app.selection().cloned(), before);
    assert_eq!(values(&app.view, PanelId::Voice), vec!["v1"]);
}

#[test]
fn test_unknown_voice_rejected() {
    let (mut app, _calls, _dir) = app_with(ava_and_ben());

    // v2 exists, but belongs to en-GB rather than the current en-US
    assert!(!app.on_voice_change("v2"));
    assert!(!app.on_voice_change("nope"));
    assert_eq!(app.selection().unwrap().voice().id, "v1");
    assert_eq!(checked(&app.view, PanelId::Voice).as_deref(), Some("v1"));
}

#[test]
fn test_voice_change_moves_check_mark() {
    let voices = vec![
        Voice::new("Ava", "en-US", "v1"),
        Voice::new("Tom", "en-US", "v4"),
    ];
    let (mut app, _calls, _dir) = app_with(voices);

    assert!(app.on_voice_change("v4"));
    assert_eq!(app.selection().unwrap().voice().name, "Tom");
    assert_eq!(checked(&app.view, PanelId::Voice).as_deref(), Some("v4"));
}

#[test]
fn test_empty_voice_list_initializes_without_selection() {
    let (app, _calls, _dir) = app_with(Vec::new());

    assert!(app.is_initialized());
    assert!(app.selection().is_none());
    assert!(app.view.panel(PanelId::Language).unwrap().is_empty());
    assert!(app.view.panel(PanelId::Voice).unwrap().is_empty());
}

#[test]
fn test_waits_for_voices_until_giving_up() {
    let (config, _dir) = temp_config();
    let (synth, _calls) = FakeSynth::new(Vec::new());
    let mut app = App::new(config, Box::new(synth), MemoryView::new()).unwrap();

    assert!(!app.try_init(false));
    assert!(!app.is_initialized());
    assert!(app.try_init(true));
    assert!(app.is_initialized());
}

#[test]
fn test_missing_containers_do_not_block_selection() {
    let (config, _dir) = temp_config();
    let (synth, _calls) = FakeSynth::new(ava_and_ben());
    let view = MemoryView::with_panels(&[]);
    let mut app = App::new(config, Box::new(synth), view).unwrap();
    app.try_init(true);

    assert_eq!(app.selection().unwrap().language(), "en-US");
    assert!(app.on_language_change("en-GB"));
    assert_eq!(app.selection().unwrap().voice().id, "v2");
}

#[test]
fn test_failed_enumeration_is_not_fatal() {
    let (config, _dir) = temp_config();
    let (synth, _calls) = FakeSynth::broken();
    let mut app = App::new(config, Box::new(synth), MemoryView::new()).unwrap();

    // Treated as "not ready" while waiting, then as an empty list
    assert!(!app.try_init(false));
    assert!(!app.is_initialized());
    assert!(app.try_init(true));
    assert!(app.is_initialized());
    assert!(app.selection().is_none());
    assert!(app.view.panel(PanelId::Language).unwrap().is_empty());
}
