//! Picker user interface
//!
//! `view` defines the host the pickers render into, `render` fills it from
//! the selection, and `terminal` draws it for the interactive front end.

pub mod render;
pub mod terminal;
pub mod view;

pub use render::{mark_checked, render_languages, render_voices};
pub use terminal::TerminalView;
pub use view::{Choice, MemoryView, Panel, PanelId, View};
