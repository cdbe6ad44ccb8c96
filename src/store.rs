//! Interest store and derived view model.
//!
//! The store owns the immutable master list and the mutable screen state
//! (search query, category filter, welcome overlay). Everything the screen
//! displays is derived on demand from these two through
//! [`InterestStore::derive_view_model`]; nothing derived is ever cached.

use serde::Serialize;
use tracing::trace;

use crate::model::InterestItem;

/// Chip label meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Progress at or above this fraction is considered on track.
pub const ON_TRACK_THRESHOLD: f64 = 0.7;

/// Mutable screen state, owned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenState {
    search_query: String,
    selected_category: Option<String>,
    show_welcome: bool,
}

impl ScreenState {
    /// Create the initial state.
    pub fn new(show_welcome: bool) -> Self {
        Self {
            search_query: String::new(),
            selected_category: None,
            show_welcome,
        }
    }

    /// The current search text, exactly as typed.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// The selected category, `None` meaning all categories.
    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// Whether the welcome overlay is visible.
    pub fn show_welcome(&self) -> bool {
        self.show_welcome
    }
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Coarse classification of overall progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressTone {
    /// Progress is at or above [`ON_TRACK_THRESHOLD`].
    OnTrack,
    /// Progress is below [`ON_TRACK_THRESHOLD`].
    NeedsAttention,
}

/// Read-only projection of the store consumed by rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedViewModel<'a> {
    /// Items matching the current search and category, in master-list order.
    pub filtered_items: Vec<&'a InterestItem>,
    /// Completed items in the whole master list.
    pub completed_count: usize,
    /// Size of the master list.
    pub total_count: usize,
    /// Items not yet completed in the whole master list.
    pub pending_count: usize,
    /// Items flagged as new in the whole master list.
    pub new_count: usize,
    /// `completed_count / total_count`, or 0 for an empty list.
    pub progress_fraction: f64,
}

impl DerivedViewModel<'_> {
    /// Progress as a whole percentage, rounded down.
    ///
    /// Computed from the counts so float error never drops a point.
    pub fn progress_percent(&self) -> u32 {
        if self.total_count == 0 {
            return 0;
        }
        u32::try_from(self.completed_count * 100 / self.total_count).unwrap_or(100)
    }

    /// Classify the overall progress.
    pub fn progress_tone(&self) -> ProgressTone {
        if self.progress_fraction >= ON_TRACK_THRESHOLD {
            ProgressTone::OnTrack
        } else {
            ProgressTone::NeedsAttention
        }
    }

    /// Whether nothing matches the current filters.
    pub fn is_empty(&self) -> bool {
        self.filtered_items.is_empty()
    }
}

/// Owns the master list of interests and the screen state.
#[derive(Debug, Clone)]
pub struct InterestStore {
    items: Vec<InterestItem>,
    state: ScreenState,
    category_chips: Vec<String>,
}

impl InterestStore {
    /// Create a store over the given items.
    ///
    /// Category chips are derived from the items.
    pub fn new(items: Vec<InterestItem>, show_welcome: bool) -> Self {
        let category_chips = derive_category_chips(&items);
        Self {
            items,
            state: ScreenState::new(show_welcome),
            category_chips,
        }
    }

    /// Replace the derived category chips with an explicit list.
    ///
    /// The "All" chip is always kept first.
    pub fn with_category_chips(mut self, chips: Vec<String>) -> Self {
        let mut category_chips = vec![ALL_CATEGORIES.to_string()];
        category_chips.extend(chips.into_iter().filter(|c| c != ALL_CATEGORIES));
        self.category_chips = category_chips;
        self
    }

    /// The master list.
    pub fn items(&self) -> &[InterestItem] {
        &self.items
    }

    /// The current screen state.
    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    /// The category chip labels, "All" first.
    pub fn category_chips(&self) -> &[String] {
        &self.category_chips
    }

    /// Whether the given chip is the selected one.
    pub fn is_chip_selected(&self, chip: &str) -> bool {
        match self.state.selected_category() {
            Some(selected) => selected == chip,
            None => chip == ALL_CATEGORIES,
        }
    }

    /// Whether a search query or category filter is in effect.
    pub fn has_active_filter(&self) -> bool {
        !self.state.search_query.trim().is_empty() || self.state.selected_category.is_some()
    }

    /// Replace the search query. No trimming or validation is applied.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
        trace!(query = %self.state.search_query, "Search query changed");
    }

    /// Replace the category filter.
    ///
    /// The "All" chip label is stored as `None`.
    pub fn set_selected_category<S: Into<String>>(&mut self, category: Option<S>) {
        self.state.selected_category = category
            .map(Into::into)
            .filter(|c| c != ALL_CATEGORIES);
        trace!(category = ?self.state.selected_category, "Category filter changed");
    }

    /// Hide the welcome overlay. Calling this again is a no-op.
    pub fn dismiss_welcome(&mut self) {
        self.state.show_welcome = false;
    }

    /// Compute the view model from the current state.
    pub fn derive_view_model(&self) -> DerivedViewModel<'_> {
        let query = self.state.search_query.as_str();
        let query = if query.trim().is_empty() {
            None
        } else {
            Some(query.to_lowercase())
        };
        let category = self.state.selected_category();

        let filtered_items = self
            .items
            .iter()
            .filter(|item| matches_search(item, query.as_deref()))
            .filter(|item| category.map_or(true, |c| item.category == c))
            .collect();

        let total_count = self.items.len();
        let completed_count = self.items.iter().filter(|i| i.completed).count();
        let new_count = self.items.iter().filter(|i| i.is_new).count();
        let progress_fraction = if total_count == 0 {
            0.0
        } else {
            completed_count as f64 / total_count as f64
        };

        DerivedViewModel {
            filtered_items,
            completed_count,
            total_count,
            pending_count: total_count - completed_count,
            new_count,
            progress_fraction,
        }
    }
}

/// Case-insensitive substring match on title or category.
///
/// `query` must already be lowercased; `None` matches everything.
fn matches_search(item: &InterestItem, query: Option<&str>) -> bool {
    match query {
        None => true,
        Some(q) => {
            item.title.to_lowercase().contains(q) || item.category.to_lowercase().contains(q)
        }
    }
}

/// "All" followed by the distinct non-empty categories in first-seen order.
fn derive_category_chips(items: &[InterestItem]) -> Vec<String> {
    let mut chips = vec![ALL_CATEGORIES.to_string()];
    for item in items {
        if !item.is_uncategorized() && !chips.contains(&item.category) {
            chips.push(item.category.clone());
        }
    }
    chips
}
