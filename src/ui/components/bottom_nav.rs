//! Bottom navigation bar and the add button.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::contains;
use crate::ui::theme::theme;

/// Label of the add button.
pub const ADD_BUTTON_LABEL: &str = " + Add ";

const TAB_GAP: &str = "  ";

/// Bottom navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavTab {
    ForYou,
    Shared,
    /// The screen this crate renders.
    #[default]
    Interested,
}

impl NavTab {
    /// All tabs in display order.
    pub const ALL: [NavTab; 3] = [NavTab::ForYou, NavTab::Shared, NavTab::Interested];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            NavTab::ForYou => "For You",
            NavTab::Shared => "Shared",
            NavTab::Interested => "Interested",
        }
    }

    /// Pending notification count shown as a badge.
    pub fn badge_count(&self) -> u32 {
        match self {
            NavTab::Shared => 2,
            NavTab::ForYou | NavTab::Interested => 0,
        }
    }

    /// Tab for a 1-based number key.
    pub fn from_number(n: u32) -> Option<Self> {
        let index = usize::try_from(n.checked_sub(1)?).ok()?;
        Self::ALL.get(index).copied()
    }
}

/// Badge text for a count, or `None` when there is nothing to show.
pub fn badge_text(count: u32) -> Option<String> {
    match count {
        0 => None,
        1..=9 => Some(count.to_string()),
        _ => Some("9+".to_string()),
    }
}

/// What a click on the navigation bar landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavHit {
    Tab(NavTab),
    Add,
}

/// Split the bar into the tabs box and the add button box.
fn nav_chunks(area: Rect) -> (Rect, Rect) {
    let button_width = ADD_BUTTON_LABEL.chars().count() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(button_width)])
        .split(area);
    (chunks[0], chunks[1])
}

fn tab_spans(number: usize, tab: NavTab, selected: NavTab) -> Vec<Span<'static>> {
    let theme = theme();
    let style = if tab == selected {
        theme.accent_style().add_modifier(Modifier::UNDERLINED)
    } else {
        theme.muted_style()
    };
    let mut spans = vec![Span::styled(format!(" {} {} ", number, tab.label()), style)];
    if let Some(badge) = badge_text(tab.badge_count()) {
        spans.push(Span::styled(
            format!("({})", badge),
            Style::default().fg(theme.warning).add_modifier(Modifier::BOLD),
        ));
    }
    spans
}

fn bordered(style: Style) -> Block<'static> {
    Block::default().borders(Borders::ALL).border_style(style)
}

/// Map a click to a tab or the add button.
pub fn nav_hit(area: Rect, column: u16, row: u16) -> Option<NavHit> {
    let (tabs_area, button_area) = nav_chunks(area);
    if contains(button_area, column, row) {
        return Some(NavHit::Add);
    }

    let inner = bordered(Style::default()).inner(tabs_area);
    if row != inner.y || !contains(inner, column, row) {
        return None;
    }

    let widths: Vec<(NavTab, usize)> = NavTab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let width = tab_spans(i + 1, *tab, NavTab::default())
                .iter()
                .map(Span::width)
                .sum();
            (*tab, width)
        })
        .collect();
    let line_width: usize = widths.iter().map(|(_, w)| w + TAB_GAP.len()).sum();

    // Centered the same way Paragraph centers a line
    let offset = usize::from(inner.width / 2).saturating_sub(line_width / 2);
    let column = usize::from(column);
    let mut x = usize::from(inner.x) + offset;
    for (tab, width) in widths {
        if (x..x + width).contains(&column) {
            return Some(NavHit::Tab(tab));
        }
        x += width + TAB_GAP.len();
    }
    None
}

/// Render the navigation tabs with the add button on the right.
pub fn render_bottom_nav(frame: &mut Frame, area: Rect, selected: NavTab) {
    let theme = theme();
    let (tabs_area, button_area) = nav_chunks(area);

    let mut spans = Vec::new();
    for (i, tab) in NavTab::ALL.iter().enumerate() {
        spans.extend(tab_spans(i + 1, *tab, selected));
        spans.push(Span::raw(TAB_GAP));
    }

    let tabs = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(bordered(theme.border_style(false)));
    frame.render_widget(tabs, tabs_area);

    let button = Paragraph::new(Span::styled(
        ADD_BUTTON_LABEL,
        Style::default()
            .fg(ratatui::style::Color::White)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(bordered(Style::default().fg(theme.primary)));
    frame.render_widget(button, button_area);
}
