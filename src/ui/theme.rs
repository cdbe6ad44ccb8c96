//! Theme and styling configuration.

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};

use crate::model::IconRef;
use crate::store::ProgressTone;

/// Color theme for the application.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary accent (indigo).
    pub primary: Color,
    /// Secondary accent (purple).
    pub secondary: Color,
    /// Muted text.
    pub muted: Color,
    /// Completed items and healthy progress.
    pub success: Color,
    /// Badges and lagging progress.
    pub warning: Color,
    /// Search match highlight background.
    pub highlight_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(0x63, 0x66, 0xF1),
            secondary: Color::Rgb(0x8B, 0x5C, 0xF6),
            muted: Color::Rgb(0x6B, 0x72, 0x80),
            success: Color::Rgb(0x10, 0xB9, 0x81),
            warning: Color::Rgb(0xF5, 0x9E, 0x0B),
            highlight_bg: Color::Yellow,
        }
    }
}

impl Theme {
    /// Style for secondary text.
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for accented, emphasized text.
    pub fn accent_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for search matches.
    pub fn match_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style for a region, depending on focus.
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    /// Color for a progress tone.
    pub fn progress_color(&self, tone: ProgressTone) -> Color {
        match tone {
            ProgressTone::OnTrack => self.success,
            ProgressTone::NeedsAttention => self.warning,
        }
    }
}

/// Get the active theme.
pub fn theme() -> &'static Theme {
    static THEME: OnceLock<Theme> = OnceLock::new();
    THEME.get_or_init(Theme::default)
}

/// Map an icon reference to a terminal glyph.
pub fn icon_glyph(icon: &IconRef) -> &'static str {
    match icon.as_str() {
        "account_circle" => "◉",
        "build" => "⚒",
        "menu" => "☰",
        "date_range" => "▦",
        "mail_outline" => "✉",
        "info" => "ⓘ",
        "shopping_cart" => "◈",
        "star" => "★",
        "lock" => "⚿",
        "clear" => "✕",
        "search" => "⌕",
        "favorite" => "♥",
        "check_circle" => "✔",
        _ => "•",
    }
}
