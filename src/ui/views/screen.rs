//! The interests screen.
//!
//! Composes the header, search bar, category chips, stats row, interest
//! list, bottom navigation and welcome overlay, and translates key presses
//! and clicks into [`Intent`]s for the controller. Only view-local state (focus, cursor,
//! list selection) lives here; everything else is read from the store.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::Intent;
use crate::config::FeatureFlags;
use crate::events::KeyContext;
use crate::store::InterestStore;
use crate::ui::components::{
    adjacent_chip, chip_at, contains, nav_hit, render_bottom_nav, render_category_chips,
    render_context_help, render_stats_row, render_welcome_overlay, CardHit, InterestList, NavHit,
    NavTab, SearchBar,
};
use crate::ui::theme::theme;

/// Which region receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Typing edits the search query.
    Search,
    /// Keys navigate the list.
    #[default]
    List,
}

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Header,
    Search,
    Categories,
    Stats,
    List,
    BottomNav,
    HelpBar,
}

/// The interests screen view.
#[derive(Debug)]
pub struct ScreenView {
    features: FeatureFlags,
    focus: Focus,
    search_bar: SearchBar,
    list: InterestList,
    /// Region areas from the last render, for click mapping.
    areas: Vec<(Region, Rect)>,
}

impl ScreenView {
    /// Create the view with the given optional regions.
    pub fn new(features: FeatureFlags) -> Self {
        Self {
            features,
            focus: Focus::List,
            search_bar: SearchBar::new(),
            list: InterestList::new(),
            areas: Vec::new(),
        }
    }

    /// The focused region.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Index of the selected row within the filtered items.
    pub fn selected(&self) -> Option<usize> {
        self.list.selected()
    }

    /// The key context for the help bar.
    pub fn key_context(&self, store: &InterestStore) -> KeyContext {
        if store.state().show_welcome() {
            KeyContext::Welcome
        } else {
            match self.focus {
                Focus::Search => KeyContext::Search,
                Focus::List => KeyContext::List,
            }
        }
    }

    /// Re-align view-local state after the store changed.
    pub fn sync(&mut self, store: &InterestStore) {
        let query = store.state().search_query();
        if self.search_bar.cursor() > query.chars().count() {
            self.search_bar.move_to_end(query);
        }
        self.list.clamp(store.derive_view_model().filtered_items.len());
    }

    /// Handle a key press.
    ///
    /// Returns an intent when the key asks for a state change or hits one of
    /// the screen's extension points.
    pub fn handle_input(&mut self, key: KeyEvent, store: &InterestStore) -> Option<Intent> {
        match self.focus {
            Focus::Search => self.handle_search_input(key, store),
            Focus::List => self.handle_list_input(key, store),
        }
    }

    /// Handle pasted text.
    pub fn handle_paste(&mut self, text: &str, store: &InterestStore) -> Option<Intent> {
        if !self.features.search {
            return None;
        }
        self.focus = Focus::Search;
        let query = store.state().search_query();
        Some(Intent::SearchChanged(self.search_bar.insert_str(query, text)))
    }

    /// Handle a left click at a terminal cell.
    ///
    /// Uses the layout of the last render; clicks before the first render
    /// are ignored.
    pub fn handle_click(&mut self, column: u16, row: u16, store: &InterestStore) -> Option<Intent> {
        let (region, area) = self
            .areas
            .iter()
            .copied()
            .find(|(_, area)| contains(*area, column, row))?;

        match region {
            Region::Search => {
                self.focus = Focus::Search;
                self.search_bar.move_to_end(store.state().search_query());
                None
            }
            Region::Categories => chip_at(
                area,
                store.category_chips(),
                |chip| store.is_chip_selected(chip),
                column,
                row,
            )
            .map(|chip| Intent::CategoryPicked(Some(chip.to_string()))),
            Region::List => {
                let view_model = store.derive_view_model();
                let hit = self.list.hit(
                    column,
                    row,
                    &view_model.filtered_items,
                    self.features.new_badges,
                )?;
                self.focus = Focus::List;
                match hit {
                    CardHit::Card(index) => {
                        self.list.select(index);
                        Some(Intent::ItemTapped(index))
                    }
                    CardHit::Status(index) => {
                        self.list.select(index);
                        Some(Intent::StatusTapped(index))
                    }
                }
            }
            Region::BottomNav => match nav_hit(area, column, row)? {
                NavHit::Tab(tab) => Some(Intent::NavTapped(tab)),
                NavHit::Add => Some(Intent::AddTapped),
            },
            Region::Header | Region::Stats | Region::HelpBar => None,
        }
    }

    fn handle_search_input(&mut self, key: KeyEvent, store: &InterestStore) -> Option<Intent> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Down | KeyCode::Tab => {
                self.focus = Focus::List;
                None
            }
            _ => self
                .search_bar
                .handle_input(key, store.state().search_query())
                .map(Intent::SearchChanged),
        }
    }

    fn handle_list_input(&mut self, key: KeyEvent, store: &InterestStore) -> Option<Intent> {
        let len = store.derive_view_model().filtered_items.len();

        match (key.code, key.modifiers) {
            (KeyCode::Char('j') | KeyCode::Down, _) => {
                self.list.select_next(len);
                None
            }
            (KeyCode::Char('k') | KeyCode::Up, _) => {
                self.list.select_previous();
                None
            }
            (KeyCode::Char('g') | KeyCode::Home, _) => {
                self.list.select_first(len);
                None
            }
            (KeyCode::Char('G') | KeyCode::End, _) => {
                self.list.select_last(len);
                None
            }
            (KeyCode::Char('/') | KeyCode::Tab, _) if self.features.search => {
                self.focus = Focus::Search;
                self.search_bar.move_to_end(store.state().search_query());
                None
            }
            (KeyCode::Char('h') | KeyCode::Char('[') | KeyCode::Left, _)
                if self.features.categories =>
            {
                self.pick_adjacent_chip(store, false)
            }
            (KeyCode::Char('l') | KeyCode::Char(']') | KeyCode::Right, _)
                if self.features.categories =>
            {
                self.pick_adjacent_chip(store, true)
            }
            (KeyCode::Enter, _) => self.list.selected().map(Intent::ItemTapped),
            (KeyCode::Char(' '), _) => self.list.selected().map(Intent::StatusTapped),
            (KeyCode::Char('a') | KeyCode::Char('+'), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                Some(Intent::AddTapped)
            }
            (KeyCode::Char(c @ '1'..='9'), _) => c
                .to_digit(10)
                .and_then(NavTab::from_number)
                .map(Intent::NavTapped),
            (KeyCode::Esc, _) if store.has_active_filter() => {
                if store.state().search_query().is_empty() {
                    Some(Intent::CategoryPicked(None))
                } else {
                    Some(Intent::ClearSearch)
                }
            }
            _ => None,
        }
    }

    fn pick_adjacent_chip(&self, store: &InterestStore, forward: bool) -> Option<Intent> {
        adjacent_chip(
            store.category_chips(),
            store.state().selected_category(),
            forward,
        )
        .map(|chip| Intent::CategoryPicked(Some(chip.to_string())))
    }

    /// Region layout for the enabled features.
    fn regions(&self) -> Vec<(Region, Constraint)> {
        let mut regions = vec![(Region::Header, Constraint::Length(2))];
        if self.features.search {
            regions.push((Region::Search, Constraint::Length(3)));
        }
        if self.features.categories {
            regions.push((Region::Categories, Constraint::Length(1)));
        }
        if self.features.stats {
            regions.push((Region::Stats, Constraint::Length(4)));
        }
        regions.push((Region::List, Constraint::Min(3)));
        regions.push((Region::BottomNav, Constraint::Length(3)));
        regions.push((Region::HelpBar, Constraint::Length(1)));
        regions
    }

    /// Render the whole screen from the store.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, store: &InterestStore) {
        let view_model = store.derive_view_model();
        let state = store.state();
        let regions = self.regions();
        let areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(regions.iter().map(|(_, c)| *c))
            .split(area);
        self.areas = regions
            .iter()
            .map(|(region, _)| *region)
            .zip(areas.iter().copied())
            .collect();

        for ((region, _), area) in regions.iter().zip(areas.iter().copied()) {
            match region {
                Region::Header => render_header(frame, area, view_model.new_count, &self.features),
                Region::Search => self.search_bar.render(
                    frame,
                    area,
                    state.search_query(),
                    view_model.filtered_items.len(),
                    self.focus == Focus::Search && !state.show_welcome(),
                ),
                Region::Categories => render_category_chips(
                    frame,
                    area,
                    store.category_chips(),
                    |chip| store.is_chip_selected(chip),
                ),
                Region::Stats => render_stats_row(frame, area, &view_model),
                Region::List => self.list.render(
                    frame,
                    area,
                    &view_model,
                    state.search_query(),
                    self.features.new_badges,
                    self.focus == Focus::List,
                ),
                Region::BottomNav => render_bottom_nav(frame, area, NavTab::default()),
                Region::HelpBar => render_context_help(frame, area, self.key_context(store)),
            }
        }

        if state.show_welcome() {
            render_welcome_overlay(frame, area);
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, new_count: usize, features: &FeatureFlags) {
    let theme = theme();
    let mut title = vec![Span::styled("★ My Interest", theme.accent_style())];
    if features.new_badges && new_count > 0 {
        title.push(Span::styled(
            format!("  {} new", new_count),
            ratatui::style::Style::default().fg(theme.warning),
        ));
    }
    let lines = vec![
        Line::from(title),
        Line::from(Span::styled(
            "Find what interests you most",
            theme.muted_style(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
