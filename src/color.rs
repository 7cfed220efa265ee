//! Named display colors and their ANSI styles.
//!
//! The set is fixed: the eight standard foreground colors plus their
//! `LIGHT_*` (bright) variants. Names are matched case-insensitively.

use std::fmt;

use owo_colors::Style;

/// A named foreground color.
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
    LightBlack,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    LightWhite,
}

impl Color {
    /// Color used whenever a name cannot be resolved.
    pub const FALLBACK: Self = Self::Blue;

    /// Parse a color name, case-insensitive. `LIGHT-RED` and `light_red` are
    /// both accepted.
    ///
    /// Returns `None` for unrecognized names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_uppercase().replace('-', "_").as_str() {
            "BLACK" => Some(Self::Black),
            "RED" => Some(Self::Red),
            "GREEN" => Some(Self::Green),
            "YELLOW" => Some(Self::Yellow),
            "BLUE" => Some(Self::Blue),
            "MAGENTA" => Some(Self::Magenta),
            "CYAN" => Some(Self::Cyan),
            "WHITE" => Some(Self::White),
            "LIGHT_BLACK" => Some(Self::LightBlack),
            "LIGHT_RED" => Some(Self::LightRed),
            "LIGHT_GREEN" => Some(Self::LightGreen),
            "LIGHT_YELLOW" => Some(Self::LightYellow),
            "LIGHT_BLUE" => Some(Self::LightBlue),
            "LIGHT_MAGENTA" => Some(Self::LightMagenta),
            "LIGHT_CYAN" => Some(Self::LightCyan),
            "LIGHT_WHITE" => Some(Self::LightWhite),
            _ => None,
        }
    }

    /// Resolve a color name, warning and falling back to [`Color::FALLBACK`]
    /// when the name is empty or unknown.
    pub fn resolve(name: &str) -> Self {
        if name.trim().is_empty() {
            log::warn!("no color provided (using default color)");
            return Self::FALLBACK;
        }
        Self::from_name(name).unwrap_or_else(|| {
            // Raw escape sequences are not names; keep them out of the diagnostic.
            let shown = if name.starts_with('\u{1b}') {
                "{escape sequence}"
            } else {
                name
            };
            log::warn!("color not found: {shown} (using default color)");
            Self::FALLBACK
        })
    }

    /// Canonical upper-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "BLACK",
            Self::Red => "RED",
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
            Self::Blue => "BLUE",
            Self::Magenta => "MAGENTA",
            Self::Cyan => "CYAN",
            Self::White => "WHITE",
            Self::LightBlack => "LIGHT_BLACK",
            Self::LightRed => "LIGHT_RED",
            Self::LightGreen => "LIGHT_GREEN",
            Self::LightYellow => "LIGHT_YELLOW",
            Self::LightBlue => "LIGHT_BLUE",
            Self::LightMagenta => "LIGHT_MAGENTA",
            Self::LightCyan => "LIGHT_CYAN",
            Self::LightWhite => "LIGHT_WHITE",
        }
    }

    /// The [`Style`] that renders this color as a plain foreground.
    pub const fn style(self) -> Style {
        match self {
            Self::Black => Style::new().black(),
            Self::Red => Style::new().red(),
            Self::Green => Style::new().green(),
            Self::Yellow => Style::new().yellow(),
            Self::Blue => Style::new().blue(),
            Self::Magenta => Style::new().magenta(),
            Self::Cyan => Style::new().cyan(),
            Self::White => Style::new().white(),
            Self::LightBlack => Style::new().bright_black(),
            Self::LightRed => Style::new().bright_red(),
            Self::LightGreen => Style::new().bright_green(),
            Self::LightYellow => Style::new().bright_yellow(),
            Self::LightBlue => Style::new().bright_blue(),
            Self::LightMagenta => Style::new().bright_magenta(),
            Self::LightCyan => Style::new().bright_cyan(),
            Self::LightWhite => Style::new().bright_white(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
