//! Reusable UI components, one per screen region.

mod bottom_nav;
mod category_chips;
mod help_bar;
mod interest_list;
mod search_bar;
mod stats_row;
mod welcome;

pub use bottom_nav::{badge_text, nav_hit, render_bottom_nav, NavHit, NavTab, ADD_BUTTON_LABEL};
pub use category_chips::{adjacent_chip, chip_at, render_category_chips};
pub use help_bar::render_context_help;
pub use interest_list::{CardHit, InterestList, EMPTY_HINT, EMPTY_TITLE};
pub use search_bar::{highlight_text, SearchBar, SEARCH_PLACEHOLDER};
pub use stats_row::render_stats_row;
pub use welcome::{render_welcome_overlay, WELCOME_TITLE};

use ratatui::layout::Rect;

/// Whether a terminal cell lies inside `area`.
pub(crate) fn contains(area: Rect, column: u16, row: u16) -> bool {
    (area.x..area.right()).contains(&column) && (area.y..area.bottom()).contains(&row)
}
