//! Turns raw terminal input into picker commands

use super::{KeyAction, KeySequence};
use log::{debug, trace};
use std::collections::HashMap;

const ESC: u8 = 0x1b;

/// What a chunk of input asks the picker to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A bound key
    Action(KeyAction),
    /// Printable text for the input line
    Insert(String),
}

/// Key handler for the picker
///
/// One read from stdin may hold several keys (fast typing, a paste ending in
/// Enter), so the input is walked byte by byte. Bound sequences become
/// actions, runs of printable UTF-8 become text, and anything else is dropped.
pub struct DefaultKeyHandler {
    keymap: HashMap<KeySequence, KeyAction>,

    /// Length of the longest bound sequence
    longest: usize,
}

impl DefaultKeyHandler {
    pub fn new(keymap: HashMap<KeySequence, KeyAction>) -> Self {
        debug!("Creating key handler with {} bindings", keymap.len());
        let longest = keymap.keys().map(Vec::len).max().unwrap_or(0);
        Self { keymap, longest }
    }

    /// Split `input` into commands, in the order they were typed
    pub fn process_key(&self, input: &[u8]) -> Vec<Command> {
        let mut commands = Vec::new();
        let mut text = String::new();
        let mut i = 0;

        while i < input.len() {
            let rest = &input[i..];

            if let Some((len, action)) = self.match_binding(rest) {
                trace!("Key {:?} -> {:?}", &rest[..len], action);
                flush_text(&mut text, &mut commands);
                commands.push(Command::Action(action));
                i += len;
                continue;
            }

            if rest[0] == ESC {
                let len = escape_len(rest);
                trace!("Ignoring unbound escape sequence {:?}", &rest[..len]);
                i += len;
                continue;
            }

            let len = utf8_len(rest[0]).min(rest.len());
            match std::str::from_utf8(&rest[..len]) {
                Ok(s) if !s.chars().any(char::is_control) => text.push_str(s),
                _ => trace!("Ignoring unbound input {:?}", &rest[..len]),
            }
            i += len;
        }

        flush_text(&mut text, &mut commands);
        commands
    }

    /// Longest binding at the start of `rest`
    ///
    /// A lone escape only counts when nothing follows it, otherwise it is the
    /// start of a longer sequence.
    fn match_binding(&self, rest: &[u8]) -> Option<(usize, KeyAction)> {
        let shortest = if rest[0] == ESC && rest.len() > 1 { 2 } else { 1 };
        let longest = self.longest.min(rest.len());

        (shortest..=longest)
            .rev()
            .find_map(|len| self.keymap.get(&rest[..len]).map(|&action| (len, action)))
    }
}

fn flush_text(text: &mut String, commands: &mut Vec<Command>) {
    if !text.is_empty() {
        commands.push(Command::Insert(std::mem::take(text)));
    }
}

/// Length of the escape sequence at the start of `rest`
fn escape_len(rest: &[u8]) -> usize {
    match rest.get(1) {
        // CSI: parameters up to a final byte in 0x40..=0x7e
        Some(b'[') => rest[2..]
            .iter()
            .position(|b| (0x40..=0x7e).contains(b))
            .map_or(rest.len(), |p| p + 3),
        // SS3: one more byte
        Some(b'O') => rest.len().min(3),
        // Alt+key
        Some(_) => 2,
        None => 1,
    }
}

/// Byte length of the UTF-8 sequence starting with `first`
fn utf8_len(first: u8) -> usize {
    match first {
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => 1,
    }
}
