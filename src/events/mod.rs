//! Event handling for the application.
//!
//! This module turns terminal input into application events and defines the
//! context-sensitive key hints shown in the help bar.

mod handler;
mod keys;

use crossterm::event::KeyEvent;

pub use handler::EventHandler;
pub use keys::{get_context_hints, KeyContext};

/// Events processed by the application's update loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// The primary mouse button was pressed at a cell.
    Click { column: u16, row: u16 },
    /// Text was pasted into the terminal.
    Paste(String),
    /// The terminal was resized.
    Resize(u16, u16),
    /// No input arrived within the tick rate.
    Tick,
    /// The application was asked to quit.
    Quit,
}
