//! Key hints for each input context.

/// The part of the screen currently receiving key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// The welcome overlay is showing.
    Welcome,
    /// The search bar has focus.
    Search,
    /// The interest list has focus.
    List,
}

/// Get the help bar hints for a context.
///
/// Keys are wrapped in brackets so the help bar can style them.
pub fn get_context_hints(context: KeyContext) -> &'static str {
    match context {
        KeyContext::Welcome => "[any key] continue",
        KeyContext::Search => "[type] filter  [Ctrl+U] clear  [Enter/Esc] results  [Ctrl+C] quit",
        KeyContext::List => {
            "[j/k] move  [h/l] category  [/] search  [Esc] reset  [Enter] open  [Space] status  [a] add  [1-3] tabs  [q] quit"
        }
    }
}
