//! Application state management
//!
//! `App` is the voice picker controller. It owns the configuration, the
//! speech backend, the view and the current `Selection`, and turns input
//! commands into selection changes and playback.

pub mod config;

use crate::error::SelectionError;
use crate::input::{Command, KeyAction};
use crate::selection::Selection;
use crate::speech::{self, Synth, Utterance};
use crate::ui::{self, PanelId, View};
use crate::voice::{Languages, Voice};
use crate::Result;
use config::Config;
use log::{debug, error, info};

/// Main application state for the picker
pub struct App<V: View> {
    /// Configuration loaded from ~/.voicebox.cfg
    pub config: Config,

    /// Speech synthesizer used for enumeration and playback
    pub synth: Box<dyn Synth>,

    /// Host the pickers are rendered into
    pub view: V,

    /// Current language and voice, None until initialized with voices
    selection: Option<Selection>,

    /// Reused for every playback
    utterance: Utterance,

    initialized: bool,
}

impl<V: View> App<V> {
    /// Create the controller and apply speech settings from `config`
    pub fn new(config: Config, mut synth: Box<dyn Synth>, view: V) -> Result<Self> {
        if let Some(rate) = config.rate() {
            synth.set_rate(rate)?;
            info!("Speech rate set to {}", rate);
        }
        if let Some(volume) = config.volume() {
            synth.set_volume(volume)?;
            info!("Speech volume set to {}", volume);
        }

        Ok(Self {
            config,
            synth,
            view,
            selection: None,
            utterance: Utterance::new(),
            initialized: false,
        })
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Initialize once the backend's voices are ready
    ///
    /// Returns true when initialization happened. An empty voice list only
    /// initializes once `give_up` is set, i.e. the wait has timed out. A
    /// failed enumeration is logged and counts as an empty list.
    pub fn try_init(&mut self, give_up: bool) -> bool {
        if self.initialized {
            return true;
        }

        let voices = match self.synth.voices() {
            Ok(voices) => voices,
            Err(e) => {
                error!("Failed to enumerate voices: {}", e);
                Vec::new()
            }
        };
        if voices.is_empty() && !give_up {
            debug!("Voices not ready yet");
            return false;
        }

        self.init(&voices);
        true
    }

    /// Group `voices`, pick the default language and render both pickers
    pub fn init(&mut self, voices: &[Voice]) {
        let family = self.config.language_family();
        let preferred = self.config.default_locale();

        let languages = Languages::from_voices(voices, &family);
        info!(
            "{} voices, {} '{}' languages",
            voices.len(),
            languages.len(),
            family
        );

        let checked = languages
            .default_locale(&preferred)
            .unwrap_or_default()
            .to_string();
        if let Err(e) = ui::render_languages(&mut self.view, &languages, &checked) {
            error!("{}", e);
        }

        self.selection = match Selection::new(languages, &preferred) {
            Ok(selection) => Some(selection),
            Err(e) => {
                debug!("No initial selection: {}", e);
                None
            }
        };
        self.render_voices();
        self.initialized = true;
    }

    fn render_voices(&mut self) {
        let (language, voices) = match &self.selection {
            Some(selection) => (selection.language(), selection.voices()),
            None => ("", &[][..]),
        };
        if let Err(e) = ui::render_voices(&mut self.view, language, voices) {
            error!("{}", e);
        }
    }

    /// The user picked the language `value`
    ///
    /// Unknown values are logged and ignored. Returns whether it was accepted.
    pub fn on_language_change(&mut self, value: &str) -> bool {
        let next = match &self.selection {
            Some(selection) => selection.with_language(value),
            None => Err(SelectionError::InvalidLanguage(value.to_string())),
        };

        match next {
            Ok(next) => {
                debug!("Language changed to {}", value);
                self.selection = Some(next);
                ui::mark_checked(&mut self.view, PanelId::Language, value);
                self.render_voices();
                true
            }
            Err(e) => {
                error!("{}", e);
                false
            }
        }
    }

    /// The user picked the voice with id `value`
    ///
    /// Only voices of the current language are accepted.
    pub fn on_voice_change(&mut self, value: &str) -> bool {
        let next = match &self.selection {
            Some(selection) => selection.with_voice(value),
            None => Err(SelectionError::InvalidVoice(value.to_string())),
        };

        match next {
            Ok(next) => {
                debug!("Voice changed to {}", value);
                self.selection = Some(next);
                ui::mark_checked(&mut self.view, PanelId::Voice, value);
                true
            }
            Err(e) => {
                error!("{}", e);
                false
            }
        }
    }

    /// Speak the input text with the selected voice
    pub fn play(&mut self) -> Result<bool> {
        let text = self.view.input_text().to_string();
        let voice = self.selection.as_ref().map(|s| s.voice());
        speech::play(self.synth.as_mut(), &mut self.utterance, voice, &text)
    }

    /// Cancel any speech without starting new speech
    pub fn silence(&mut self) -> Result<()> {
        self.synth.cancel()
    }

    /// Stop speech before exiting; a failure is only logged
    pub fn shutdown(&mut self) {
        if let Err(e) = self.synth.cancel() {
            error!("Failed to cancel speech on exit: {}", e);
        }
    }

    /// Apply one input command
    ///
    /// Returns false when the user asked to quit.
    pub fn handle(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Insert(text) => self.view.input_mut().push_str(&text),
            Command::Action(action) => match action {
                KeyAction::Quit => return Ok(false),
                KeyAction::Play => {
                    self.play()?;
                }
                KeyAction::Silence => self.silence()?,
                KeyAction::Backspace => {
                    self.view.input_mut().pop();
                }
                KeyAction::PrevLanguage | KeyAction::NextLanguage => {
                    let offset = if action == KeyAction::NextLanguage { 1 } else { -1 };
                    let value = self
                        .selection
                        .as_ref()
                        .map(|s| s.cycle_language(offset).to_string());
                    if let Some(value) = value {
                        self.on_language_change(&value);
                    }
                }
                KeyAction::PrevVoice | KeyAction::NextVoice => {
                    let offset = if action == KeyAction::NextVoice { 1 } else { -1 };
                    let value = self
                        .selection
                        .as_ref()
                        .map(|s| s.cycle_voice(offset).to_string());
                    if let Some(value) = value {
                        self.on_voice_change(&value);
                    }
                }
            },
        }
        Ok(true)
    }
}
