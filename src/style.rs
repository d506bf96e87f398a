//! Style values and the painter that turns them into terminal escapes
//!
//! A [`Style`] is a plain value built per field from its semantic color and the
//! owning todo's priority flag. Nothing here is shared or mutated between calls.

use owo_colors::OwoColorize;

/// Semantic color identities used by the printer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    BrightWhite,
    Red,
    BrightRed,
    Yellow,
    BrightYellow,
    Green,
    BrightGreen,
    BrightBlue,
}

/// Accent color for group headers and note ids
pub const ACCENT: Color = Color::BrightBlue;

/// A color plus the priority emphasis (bold + italic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    pub color: Color,
    pub emphasis: bool,
}

impl Style {
    /// Style without emphasis
    pub const fn plain(color: Color) -> Self {
        Self {
            color,
            emphasis: false,
        }
    }

    /// Style for a field of a todo; priority todos get bold + italic
    pub const fn for_priority(color: Color, is_priority: bool) -> Self {
        Self {
            color,
            emphasis: is_priority,
        }
    }

    pub fn is_bold_italic(&self) -> bool {
        self.emphasis
    }

    fn to_owo(self) -> owo_colors::Style {
        let base = owo_colors::Style::new();
        let colored = match self.color {
            Color::White => base.white(),
            Color::BrightWhite => base.bright_white(),
            Color::Red => base.red(),
            Color::BrightRed => base.bright_red(),
            Color::Yellow => base.yellow(),
            Color::BrightYellow => base.bright_yellow(),
            Color::Green => base.green(),
            Color::BrightGreen => base.bright_green(),
            Color::BrightBlue => base.bright_blue(),
        };
        if self.emphasis {
            colored.bold().italic()
        } else {
            colored
        }
    }
}

/// Applies styles to text, or passes text through when color is off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Painter that never emits escape sequences
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled {
            text.style(style.to_owo()).to_string()
        } else {
            text.to_string()
        }
    }
}
