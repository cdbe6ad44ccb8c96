//! One-time welcome overlay.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::theme;

/// Overlay heading.
pub const WELCOME_TITLE: &str = "Welcome to Interests!";

/// Render the welcome overlay centered over `area`.
pub fn render_welcome_overlay(frame: &mut Frame, area: Rect) {
    let theme = theme();
    let dialog = centered_rect(area, 40u16.min(area.width), 9u16.min(area.height));

    frame.render_widget(Clear, dialog);

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled("★", Style::default().fg(theme.secondary))),
        Line::from(Span::styled(WELCOME_TITLE, theme.accent_style())),
        Line::from(Span::styled("Explore your passion", theme.muted_style())),
        Line::raw(""),
        Line::from(Span::styled(
            "Ready to explore?",
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.primary)),
        );
    frame.render_widget(paragraph, dialog);
}

/// Center a rectangle of the given size within an area.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let rect = centered_rect(Rect::new(0, 0, 100, 50), 40, 10);
        assert_eq!(rect, Rect::new(30, 20, 40, 10));
    }

    #[test]
    fn test_centered_rect_larger_than_area() {
        let rect = centered_rect(Rect::new(2, 2, 20, 5), 40, 10);
        assert_eq!(rect, Rect::new(2, 2, 20, 5));
    }
}
