//! Terminal front end for the pickers
//!
//! Wraps a `MemoryView` and redraws it as a few lines of text. The terminal
//! is in raw mode, so lines go through `write_raw_line`.

use super::view::{MemoryView, Panel, PanelId, View};
use crate::terminal::write_raw_line;
use crate::Result;
use std::io::Write;
use unicode_width::UnicodeWidthChar;

const HELP: &str = "Left/Right language  Up/Down voice  Enter play  Ctrl-X silence  Esc quit";

/// View drawn to a terminal writer
pub struct TerminalView<W: Write> {
    view: MemoryView,
    out: W,
    cols: u16,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, cols: u16) -> Self {
        Self {
            view: MemoryView::new(),
            out,
            cols,
        }
    }

    pub fn resize(&mut self, cols: u16) {
        self.cols = cols;
    }

    /// Clear the screen and draw every panel, the input line and the help
    pub fn draw(&mut self, status: &str) -> Result<()> {
        let cols = self.cols as usize;
        let mut lines = Vec::with_capacity(6);

        for id in [PanelId::Language, PanelId::Voice] {
            if let Some(panel) = self.view.panel(id) {
                lines.push(format_panel(id, panel));
            }
        }
        lines.push(format!("Text:     {}_", self.view.input));
        lines.push(String::new());
        lines.push(HELP.to_string());
        if !status.is_empty() {
            lines.push(status.to_string());
        }

        write!(self.out, "\x1b[2J\x1b[H")?;
        for line in lines {
            write_raw_line(&mut self.out, &fit(&line, cols))?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> View for TerminalView<W> {
    fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.view.panel(id)
    }

    fn panel_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.view.panel_mut(id)
    }

    fn input_text(&self) -> &str {
        self.view.input_text()
    }

    fn input_mut(&mut self) -> &mut String {
        self.view.input_mut()
    }
}

/// "Voice:    (*) Ava  ( ) Tom"
fn format_panel(id: PanelId, panel: &Panel) -> String {
    let mut line = format!("{:<10}", format!("{}:", id));
    let choices: Vec<String> = panel
        .choices()
        .iter()
        .map(|c| format!("({}) {}", if c.checked { '*' } else { ' ' }, c.label))
        .collect();
    line.push_str(&choices.join("  "));
    line
}

/// Truncate `line` to at most `cols` display columns
fn fit(line: &str, cols: usize) -> String {
    let mut width = 0;
    let mut out = String::with_capacity(line.len());
    for ch in line.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > cols {
            break;
        }
        width += w;
        out.push(ch);
    }
    out
}
