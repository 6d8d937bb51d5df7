//! Console report layout shared by all commands
//!
//! Plain text for banners and summaries, bright colors for outcomes:
//! green for success, red for failure, yellow for warnings and cleanup.

use std::io::{self, Write};

use crate::theme::{write_bright, Color};

/// Default separator width in characters.
pub const SEPARATOR_WIDTH: usize = 70;

/// Default width of the label column in summary fields.
pub const LABEL_WIDTH: usize = 19;

/// A row of `=` of the given width.
pub fn separator(width: usize) -> String {
    "=".repeat(width)
}

/// Writes report lines to a stream (stdout in the binary).
pub struct Reporter<W: Write> {
    out: W,
    width: usize,
    label_width: usize,
}

impl Reporter<io::Stdout> {
    pub fn stdout(width: usize) -> Self {
        Self::new(io::stdout(), width)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self {
            out,
            width,
            label_width: LABEL_WIDTH,
        }
    }

    /// Column at which `field` values start.
    pub fn set_label_width(&mut self, label_width: usize) {
        self.label_width = label_width;
    }

    pub fn separator(&self) -> String {
        separator(self.width)
    }

    /// Plain text line.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(format!("{}\n", text).as_bytes())?;
        self.out.flush()
    }

    /// Separator preceded by a blank line, closing a section.
    pub fn rule(&mut self) -> io::Result<()> {
        let text = format!("\n{}", self.separator());
        self.line(&text)
    }

    /// Separator, blank line, closing a section and leaving room for the next.
    pub fn section_break(&mut self) -> io::Result<()> {
        let text = format!("\n{}\n", self.separator());
        self.line(&text)
    }

    /// Title framed by separators.
    pub fn banner(&mut self, title: &str) -> io::Result<()> {
        let opening = format!("{}\n", self.separator());
        self.line(&opening)?;
        self.line(title)?;
        self.section_break()
    }

    /// `Label:` padded to a fixed column, then the value.
    pub fn field(&mut self, label: &str, value: impl std::fmt::Display) -> io::Result<()> {
        let label = format!("{}:", label);
        let text = format!("{:<width$}{}", label, value, width = self.label_width);
        self.line(&text)
    }

    pub fn success(&mut self, text: &str) -> io::Result<()> {
        self.bright(Color::Green, text)
    }

    pub fn failure(&mut self, text: &str) -> io::Result<()> {
        self.bright(Color::Red, text)
    }

    pub fn warning(&mut self, text: &str) -> io::Result<()> {
        self.bright(Color::Yellow, text)
    }

    /// Green separator, message, green separator.
    pub fn success_block(&mut self, text: &str) -> io::Result<()> {
        self.block(Color::Green, text)
    }

    /// Red separator, message, red separator.
    pub fn failure_block(&mut self, text: &str) -> io::Result<()> {
        self.block(Color::Red, text)
    }

    fn block(&mut self, color: Color, text: &str) -> io::Result<()> {
        let opening = format!("\n{}\n", self.separator());
        let closing = format!("\n{}", self.separator());
        self.bright(color, &opening)?;
        self.bright(color, text)?;
        self.bright(color, &closing)
    }

    fn bright(&mut self, color: Color, text: &str) -> io::Result<()> {
        write_bright(&mut self.out, color, text)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
