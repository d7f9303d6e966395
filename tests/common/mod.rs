//! Shared test fixtures: a recording speech backend and a ready-made app

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use tempfile::TempDir;
use voicebox::speech::Synth;
use voicebox::state::config::Config;
use voicebox::state::App;
use voicebox::ui::MemoryView;
use voicebox::voice::Voice;
use voicebox::{Result, VoiceboxError};

/// A call made on the fake backend
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetVoice(String),
    SetRate(u8),
    SetVolume(u8),
    Speak(String),
    Cancel,
}

/// Backend that serves fixed voices and records every call
pub struct FakeSynth {
    pub voices: Vec<Voice>,
    pub calls: Rc<RefCell<Vec<Call>>>,
    /// Make enumeration and cancel fail, like a dead speech service
    pub broken: bool,
}

impl FakeSynth {
    pub fn new(voices: Vec<Voice>) -> (Self, Rc<RefCell<Vec<Call>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let synth = Self {
            voices,
            calls: Rc::clone(&calls),
            broken: false,
        };
        (synth, calls)
    }

    pub fn broken() -> (Self, Rc<RefCell<Vec<Call>>>) {
        let (mut synth, calls) = Self::new(ava_and_ben());
        synth.broken = true;
        (synth, calls)
    }
}

impl Synth for FakeSynth {
    fn voices(&mut self) -> Result<Vec<Voice>> {
        if self.broken {
            return Err(VoiceboxError::Speech("speech service gone".to_string()));
        }
        Ok(self.voices.clone())
    }

    fn set_voice(&mut self, voice: &Voice) -> Result<()> {
        self.calls.borrow_mut().push(Call::SetVoice(voice.id.clone()));
        Ok(())
    }

    fn set_rate(&mut self, rate: u8) -> Result<()> {
        self.calls.borrow_mut().push(Call::SetRate(rate));
        Ok(())
    }

    fn set_volume(&mut self, volume: u8) -> Result<()> {
        self.calls.borrow_mut().push(Call::SetVolume(volume));
        Ok(())
    }

    fn speak(&mut self, text: &str) -> Result<()> {
        self.calls.borrow_mut().push(Call::Speak(text.to_string()));
        Ok(())
    }

    fn cancel(&mut self) -> Result<()> {
        if self.broken {
            return Err(VoiceboxError::Speech("speech service gone".to_string()));
        }
        self.calls.borrow_mut().push(Call::Cancel);
        Ok(())
    }
}

/// The two-voice set used by most scenarios
pub fn ava_and_ben() -> Vec<Voice> {
    vec![
        Voice::new("Ava", "en-US", "v1"),
        Voice::new("Ben", "en-GB", "v2"),
    ]
}

/// Config written with defaults into a fresh temp dir
pub fn temp_config() -> (Config, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    let config = Config::load_from(dir.path().join("voicebox.cfg")).expect("config");
    (config, dir)
}

/// An app over `voices`, already initialized
pub fn app_with(voices: Vec<Voice>) -> (App<MemoryView>, Rc<RefCell<Vec<Call>>>, TempDir) {
    let (config, dir) = temp_config();
    let (synth, calls) = FakeSynth::new(voices);
    let mut app = App::new(config, Box::new(synth), MemoryView::new()).expect("app");
    assert!(app.try_init(true));
    (app, calls, dir)
}
