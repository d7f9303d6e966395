//! Speech synthesis system

pub mod synth;
pub mod utterance;
pub mod backends;

pub use synth::{Synth, create_synth};
pub use utterance::{play, Utterance};
