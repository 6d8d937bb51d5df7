//! Terminal text styling
//!
//! The 8-color ANSI palette plus the default color, and the formatter that
//! wraps text in SGR escape sequences. `cli` holds the formatter and the
//! bright print helpers used for build/test status lines.

pub mod cli;

pub use cli::{
    colored_text, print_bright_green, print_bright_red, print_bright_yellow, write_bright,
    StyleRequest, ANSI_INTRODUCER, ANSI_RESET, ANSI_TERMINATOR,
};

/// Standard ANSI 8-color set plus the terminal default.
///
/// The discriminant is the digit used in the SGR code: foreground is
/// `3<index>`, background is `4<index>`. `Default` maps to `39`/`49`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    #[default]
    Default = 9,
}

impl Color {
    /// Every color, in declaration order.
    pub const ALL: [Color; 9] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Default,
    ];

    /// The eight base colors (everything except `Default`).
    pub const BASE: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Numeric index of the color (0-7, or 9 for `Default`).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// SGR foreground code: `39` for `Default`, otherwise `3` + index.
    pub fn fg_code(self) -> String {
        match self {
            Color::Default => "39".to_string(),
            color => format!("3{}", color.index()),
        }
    }

    /// SGR background code: `49` for `Default`, otherwise `4` + index.
    pub fn bg_code(self) -> String {
        match self {
            Color::Default => "49".to_string(),
            color => format!("4{}", color.index()),
        }
    }
}
