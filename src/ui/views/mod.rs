//! Application views (screens).

mod screen;

pub use screen::{Focus, ScreenView};
