//! Stats summary row: completed, total, progress and to-do counts.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::store::DerivedViewModel;
use crate::ui::theme::theme;

/// Render the stats row.
pub fn render_stats_row(frame: &mut Frame, area: Rect, view_model: &DerivedViewModel<'_>) {
    let theme = theme();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(area);

    render_stat(
        frame,
        columns[0],
        view_model.completed_count,
        "Completed",
        Style::default().fg(theme.success),
    );
    render_stat(
        frame,
        columns[1],
        view_model.total_count,
        "Total",
        Style::default().fg(theme.primary),
    );
    render_progress(frame, columns[2], view_model);
    render_stat(
        frame,
        columns[3],
        view_model.pending_count,
        "To Do",
        Style::default().fg(theme.warning),
    );
}

fn render_stat(frame: &mut Frame, area: Rect, value: usize, label: &str, style: Style) {
    let theme = theme();
    let text = vec![
        Line::from(Span::styled(
            value.to_string(),
            style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(label.to_string(), theme.muted_style())),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(false)),
        );
    frame.render_widget(paragraph, area);
}

fn render_progress(frame: &mut Frame, area: Rect, view_model: &DerivedViewModel<'_>) {
    let theme = theme();
    let color = theme.progress_color(view_model.progress_tone());
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(false))
                .title_bottom(Line::from("Progress").alignment(Alignment::Center)),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(view_model.progress_fraction.clamp(0.0, 1.0))
        .label(format!("{}%", view_model.progress_percent()));
    frame.render_widget(gauge, area);
}
