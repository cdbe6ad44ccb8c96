//! Interest card list with selection and empty state.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::contains;
use crate::model::InterestItem;
use crate::store::DerivedViewModel;
use crate::ui::components::search_bar::highlight_text;
use crate::ui::theme::{icon_glyph, theme};

/// Heading of the empty state.
pub const EMPTY_TITLE: &str = "No interests found";

/// Hint below the empty state heading.
pub const EMPTY_HINT: &str = "Try a different search term";

/// Marker drawn in front of the selected card.
const HIGHLIGHT_SYMBOL: &str = "▌";

/// Rows per card.
const CARD_HEIGHT: u16 = 2;

/// What a click on the list landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardHit {
    /// The body of the card at this index.
    Card(usize),
    /// The add-status badge at the end of the card's title line.
    Status(usize),
}

/// Selection state for the interest list.
#[derive(Debug, Default)]
pub struct InterestList {
    state: ListState,
    /// Where the cards were last drawn.
    cards_area: Rect,
}

impl InterestList {
    /// Create a new list with nothing selected.
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
            cards_area: Rect::default(),
        }
    }

    /// Index of the selected row within the filtered items.
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Keep the selection valid for a list of `len` rows.
    ///
    /// Selects the first row when there was no selection.
    pub fn clamp(&mut self, len: usize) {
        let selected = match (len, self.state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.state.select(selected);
    }

    /// Move the selection down one row.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = self.state.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.state.select(Some(next));
    }

    /// Move the selection up one row.
    pub fn select_previous(&mut self) {
        let previous = self.state.selected().map_or(0, |i| i.saturating_sub(1));
        self.state.select(Some(previous));
    }

    /// Select a row by index.
    pub fn select(&mut self, index: usize) {
        self.state.select(Some(index));
    }

    /// Select the first row.
    pub fn select_first(&mut self, len: usize) {
        self.state.select((len > 0).then_some(0));
    }

    /// Select the last row.
    pub fn select_last(&mut self, len: usize) {
        self.state.select(len.checked_sub(1));
    }

    /// Render the list, or the empty state when nothing matches.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        view_model: &DerivedViewModel<'_>,
        query: &str,
        show_new_badges: bool,
        focused: bool,
    ) {
        let theme = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(focused))
            .title(Span::styled(" Interests ", theme.accent_style()));

        if view_model.is_empty() {
            self.cards_area = Rect::default();
            render_empty_state(frame, area, block);
            return;
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let refresh_hint = Paragraph::new(Span::styled("↻ Pull to refresh", theme.muted_style()))
            .alignment(Alignment::Center);
        frame.render_widget(refresh_hint, chunks[0]);

        let items: Vec<ListItem> = view_model
            .filtered_items
            .iter()
            .map(|item| interest_card(item, query, show_new_badges))
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        self.cards_area = chunks[1];
        frame.render_stateful_widget(list, chunks[1], &mut self.state);
    }

    /// Map a click to a card, using the layout of the last render.
    pub fn hit(
        &self,
        column: u16,
        row: u16,
        items: &[&InterestItem],
        show_new_badges: bool,
    ) -> Option<CardHit> {
        let area = self.cards_area;
        if !contains(area, column, row) {
            return None;
        }
        let relative = row - area.y;
        let index = self.state.offset() + usize::from(relative / CARD_HEIGHT);
        let item = items.get(index)?;

        if relative % CARD_HEIGHT == 0 {
            let indent = if self.state.selected().is_some() {
                HIGHLIGHT_SYMBOL.chars().count()
            } else {
                0
            };
            let status_column =
                usize::from(area.x) + indent + card_title(item, "", show_new_badges).width() - 1;
            if usize::from(column) == status_column {
                return Some(CardHit::Status(index));
            }
        }
        Some(CardHit::Card(index))
    }
}

/// Title line of a card, ending in the add-status badge.
fn card_title(item: &InterestItem, query: &str, show_new_badge: bool) -> Line<'static> {
    let theme = theme();

    let mut title = highlight_text(
        &item.title,
        query,
        Style::default().add_modifier(Modifier::BOLD),
        theme.match_style(),
    );
    title.spans.insert(
        0,
        Span::styled(
            format!("{} ", icon_glyph(&item.icon)),
            Style::default().fg(theme.primary),
        ),
    );
    if show_new_badge && item.is_new {
        title.spans.push(Span::raw(" "));
        title.spans.push(Span::styled(
            " NEW ",
            Style::default()
                .fg(ratatui::style::Color::Black)
                .bg(theme.warning)
                .add_modifier(Modifier::BOLD),
        ));
    }
    title.spans.push(Span::raw("  "));
    if item.completed {
        title
            .spans
            .push(Span::styled("✓", Style::default().fg(theme.success)));
    } else {
        title.spans.push(Span::styled("+", theme.muted_style()));
    }
    title
}

/// Build the two-line card for one interest.
fn interest_card(item: &InterestItem, query: &str, show_new_badge: bool) -> ListItem<'static> {
    let theme = theme();
    let title = card_title(item, query, show_new_badge);

    let mut category = highlight_text(&item.category, query, theme.muted_style(), theme.match_style());
    category.spans.insert(0, Span::raw("  "));

    ListItem::new(vec![title, category])
}

fn render_empty_state(frame: &mut Frame, area: Rect, block: Block<'_>) {
    let theme = theme();
    let inner_height = area.height.saturating_sub(2);
    let top_padding = inner_height.saturating_sub(3) / 2;

    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::raw("")).collect();
    lines.push(Line::from(Span::styled("⌕", theme.muted_style())));
    lines.push(Line::from(Span::styled(
        EMPTY_TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(EMPTY_HINT, theme.muted_style())));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
