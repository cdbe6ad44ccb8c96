//! User interface components and views.
//!
//! This module contains all TUI rendering logic: the interests screen and
//! the reusable components it is composed of.

mod components;
pub mod theme;
mod views;

pub use components::{
    adjacent_chip, badge_text, highlight_text, InterestList, NavTab, SearchBar, ADD_BUTTON_LABEL,
    EMPTY_HINT, EMPTY_TITLE, SEARCH_PLACEHOLDER, WELCOME_TITLE,
};
pub use theme::theme;
pub use views::{Focus, ScreenView};
