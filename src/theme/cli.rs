//! ANSI text formatting and bright status printers
//!
//! `colored_text` builds `ESC[<codes>m<text>ESC[0m`. The codes are, in order,
//! `1` when bold, the foreground code and the background code, joined by `;`.
//! Default colors still emit `39`/`49`, so unstyled text becomes
//! `ESC[39;49m<text>ESC[0m`. The text is never escaped or inspected.

use std::fmt;
use std::io::{self, Write};

use super::Color;

/// Control sequence introducer (ESC `[`)
pub const ANSI_INTRODUCER: &str = "\x1b[";

/// Terminator of an SGR sequence
pub const ANSI_TERMINATOR: &str = "m";

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// A single styling operation: text plus colors and weight.
///
/// Defaults match `colored_text` with only the text given: both colors
/// `Default`, not bold.
///
/// ```
/// use mlt::theme::{Color, StyleRequest};
///
/// let styled = StyleRequest::new("OK").fg(Color::Red).bold(true).render();
/// assert_eq!(styled, "\x1b[1;31;49mOK\x1b[0m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRequest<'a> {
    text: &'a str,
    fg: Color,
    bg: Color,
    bold: bool,
}

impl<'a> StyleRequest<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            fg: Color::Default,
            bg: Color::Default,
            bold: false,
        }
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// SGR codes in output order. Only the bold code is ever dropped.
    pub fn codes(&self) -> Vec<String> {
        let bold = if self.bold {
            "1".to_string()
        } else {
            String::new()
        };
        [bold, self.fg.fg_code(), self.bg.bg_code()]
            .into_iter()
            .filter(|code| !code.is_empty())
            .collect()
    }

    /// The opening escape sequence, e.g. `ESC[1;31;49m`.
    pub fn prologue(&self) -> String {
        format!(
            "{}{}{}",
            ANSI_INTRODUCER,
            self.codes().join(";"),
            ANSI_TERMINATOR
        )
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prologue(), self.text, ANSI_RESET)
    }
}

/// Format text with ANSI codes for foreground, background and bold.
pub fn colored_text(text: &str, fg: Color, bg: Color, bold: bool) -> String {
    StyleRequest::new(text).fg(fg).bg(bg).bold(bold).render()
}

/// Write `text` in bold `color` followed by a newline.
///
/// The line is assembled first and handed to the writer in one `write_all`,
/// so lines from different threads sharing a locked stream do not interleave.
pub fn write_bright<W: Write>(out: &mut W, color: Color, text: &str) -> io::Result<()> {
    let line = format!("{}\n", colored_text(text, color, Color::Default, true));
    out.write_all(line.as_bytes())
}

fn print_bright(color: Color, text: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_bright(&mut handle, color, text)?;
    handle.flush()
}

/// Print the text in bright red.
pub fn print_bright_red(text: &str) -> io::Result<()> {
    print_bright(Color::Red, text)
}

/// Print the text in bright green.
pub fn print_bright_green(text: &str) -> io::Result<()> {
    print_bright(Color::Green, text)
}

/// Print the text in bright yellow.
pub fn print_bright_yellow(text: &str) -> io::Result<()> {
    print_bright(Color::Yellow, text)
}
