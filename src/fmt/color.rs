//! Standard 8-color ANSI escapes. Every terminal and log viewer that renders
//! color at all understands these, unlike 256-color or true-color sequences.

use std::fmt;

/// Foreground colors used by the text renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    #[must_use]
    pub const fn fg_ansi(self) -> &'static str {
        match self {
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
        }
    }

    /// Severity → color table. Keyed by level *name* so integer-only levels
    /// (`Level 25`) simply have no entry.
    #[must_use]
    pub fn for_level_name(name: &str) -> Option<Self> {
        match name {
            "DEBUG" => Some(Self::Green),
            "INFO" => Some(Self::Blue),
            "WARNING" => Some(Self::Yellow),
            "ERROR" | "FATAL" | "CRITICAL" => Some(Self::Red),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fg_ansi())
    }
}

/// Wraps `text` in the color code and a reset.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    let fg = color.fg_ansi();
    let reset = Color::RESET;
    format!("{fg}{text}{reset}")
}
