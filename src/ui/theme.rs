use ratatui::style::{Color, Modifier, Style};
use serde::Serialize;

// ── Named ANSI colors ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorId {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl ColorId {
    pub const ALL: [ColorId; 8] = [
        ColorId::Black,
        ColorId::Red,
        ColorId::Green,
        ColorId::Yellow,
        ColorId::Blue,
        ColorId::Magenta,
        ColorId::Cyan,
        ColorId::White,
    ];

    /// Case-insensitive lookup; None for anything outside the 8 names.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name().eq_ignore_ascii_case(name))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Black   => "black",
            Self::Red     => "red",
            Self::Green   => "green",
            Self::Yellow  => "yellow",
            Self::Blue    => "blue",
            Self::Magenta => "magenta",
            Self::Cyan    => "cyan",
            Self::White   => "white",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Black   => Color::Black,
            Self::Red     => Color::Red,
            Self::Green   => Color::Green,
            Self::Yellow  => Color::Yellow,
            Self::Blue    => Color::Blue,
            Self::Magenta => Color::Magenta,
            Self::Cyan    => Color::Cyan,
            Self::White   => Color::White,
        }
    }
}

// ── Theme struct ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub text:  Style,
    pub title: Style,
}

impl Theme {
    /// Chosen color on black when color is enabled, white on black otherwise.
    pub fn new(color: Option<ColorId>) -> Self {
        let fg = color.map(|c| c.color()).unwrap_or(Color::White);
        let text = Style::default().fg(fg).bg(Color::Black);
        Self {
            text,
            title: text.add_modifier(Modifier::BOLD),
        }
    }
}
