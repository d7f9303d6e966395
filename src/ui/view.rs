//! The host the pickers render into
//!
//! A view exposes named panels holding exclusive choices (one checked at a
//! time) and the text the user has typed. `MemoryView` is the plain in-memory
//! host; the terminal front end wraps one and draws it.

use std::collections::HashMap;
use std::fmt;

/// Identifier of a choice container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Language,
    Voice,
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelId::Language => write!(f, "Language"),
            PanelId::Voice => write!(f, "Voice"),
        }
    }
}

/// One exclusive-choice control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Value handed to the change handler
    pub value: String,
    /// Text shown to the user
    pub label: String,
    pub checked: bool,
}

/// A container of choices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Panel {
    choices: Vec<Choice>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.choices.clear();
    }

    pub fn push(&mut self, value: impl Into<String>, label: impl Into<String>, checked: bool) {
        self.choices.push(Choice {
            value: value.into(),
            label: label.into(),
            checked,
        });
    }

    /// Check the choice carrying `value` and uncheck the rest
    ///
    /// Returns false (and changes nothing) if no choice has that value.
    pub fn check(&mut self, value: &str) -> bool {
        if !self.choices.iter().any(|c| c.value == value) {
            return false;
        }
        for choice in &mut self.choices {
            choice.checked = choice.value == value;
        }
        true
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn checked(&self) -> Option<&Choice> {
        self.choices.iter().find(|c| c.checked)
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

/// Host for rendered pickers
pub trait View {
    /// Look up a container by id
    fn panel(&self, id: PanelId) -> Option<&Panel>;

    /// Look up a container by id for rendering
    fn panel_mut(&mut self, id: PanelId) -> Option<&mut Panel>;

    /// Current contents of the text input
    fn input_text(&self) -> &str;

    /// Text input for editing
    fn input_mut(&mut self) -> &mut String;
}

/// In-memory view
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    panels: HashMap<PanelId, Panel>,
    /// Text input contents
    pub input: String,
}

impl MemoryView {
    /// A view with both the language and voice panels
    pub fn new() -> Self {
        Self::with_panels(&[PanelId::Language, PanelId::Voice])
    }

    /// A view holding only the given panels
    pub fn with_panels(ids: &[PanelId]) -> Self {
        Self {
            panels: ids.iter().map(|&id| (id, Panel::new())).collect(),
            input: String::new(),
        }
    }
}

impl View for MemoryView {
    fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(&id)
    }

    fn panel_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.get_mut(&id)
    }

    fn input_text(&self) -> &str {
        &self.input
    }

    fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }
}
