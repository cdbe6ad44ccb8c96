//! Search bar component for filtering interests.
//!
//! The query text itself lives in the store; this component only owns the
//! cursor and turns key presses into the edited query.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::theme;

/// Placeholder shown when the query is empty.
pub const SEARCH_PLACEHOLDER: &str = "Explore interests...";

/// Prefix drawn before the query.
const SEARCH_PREFIX: &str = "⌕ ";

/// Cursor state for the search bar.
#[derive(Debug, Clone, Default)]
pub struct SearchBar {
    /// Cursor position, in characters.
    cursor: usize,
}

impl SearchBar {
    /// Create a new search bar.
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    /// Cursor position, in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor to the end of `query`.
    pub fn move_to_end(&mut self, query: &str) {
        self.cursor = query.chars().count();
    }

    /// Handle a key press against the current query.
    ///
    /// Returns the new query if the key changed it.
    pub fn handle_input(&mut self, key: KeyEvent, query: &str) -> Option<String> {
        let len = query.chars().count();
        self.cursor = self.cursor.min(len);

        match (key.code, key.modifiers) {
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.cursor = 0;
                (!query.is_empty()).then(String::new)
            }
            (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
                if self.cursor == 0 {
                    return None;
                }
                let chars: Vec<char> = query.chars().collect();
                let mut start = self.cursor;
                while start > 0 && chars[start - 1].is_whitespace() {
                    start -= 1;
                }
                while start > 0 && !chars[start - 1].is_whitespace() {
                    start -= 1;
                }
                let edited = chars[..start].iter().chain(&chars[self.cursor..]).collect();
                self.cursor = start;
                Some(edited)
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                Some(self.insert_str(query, &c.to_string()))
            }
            (KeyCode::Backspace, _) => {
                if self.cursor == 0 {
                    return None;
                }
                self.cursor -= 1;
                Some(remove_char(query, self.cursor))
            }
            (KeyCode::Delete, _) => (self.cursor < len).then(|| remove_char(query, self.cursor)),
            (KeyCode::Left, _) => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            (KeyCode::Right, _) => {
                self.cursor = (self.cursor + 1).min(len);
                None
            }
            (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                self.cursor = 0;
                None
            }
            (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                self.cursor = len;
                None
            }
            _ => None,
        }
    }

    /// Insert pasted text at the cursor and return the new query.
    pub fn insert_str(&mut self, query: &str, text: &str) -> String {
        // Pasted newlines would break the single-line field
        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        let at = byte_index(query, self.cursor.min(query.chars().count()));
        let mut edited = String::with_capacity(query.len() + text.len());
        edited.push_str(&query[..at]);
        edited.push_str(&text);
        edited.push_str(&query[at..]);
        self.cursor = self.cursor.min(query.chars().count()) + text.chars().count();
        edited
    }

    /// Render the search bar.
    ///
    /// `match_count` is the number of filtered items, shown while a query is
    /// present.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        query: &str,
        match_count: usize,
        focused: bool,
    ) {
        let theme = theme();
        let prefix_width = SEARCH_PREFIX.chars().count();
        let text_width = usize::from(area.width.saturating_sub(2)).saturating_sub(prefix_width);
        let scroll = scroll_offset(self.cursor, text_width);

        let content = if query.is_empty() {
            Line::from(vec![
                Span::styled(SEARCH_PREFIX, theme.accent_style()),
                Span::styled(SEARCH_PLACEHOLDER, theme.muted_style()),
            ])
        } else {
            let visible: String = query.chars().skip(scroll).take(text_width).collect();
            Line::from(vec![
                Span::styled(SEARCH_PREFIX, theme.accent_style()),
                Span::raw(visible),
            ])
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(focused));
        if !query.is_empty() {
            let hint = format!(" {} found · [Ctrl+U] clear ", match_count);
            block = block.title_top(
                Line::from(Span::styled(hint, theme.muted_style())).alignment(Alignment::Right),
            );
        }

        let paragraph = Paragraph::new(content).style(Style::default()).block(block);
        frame.render_widget(paragraph, area);

        if focused && text_width > 0 {
            let column = 1 + prefix_width + self.cursor - scroll;
            let cursor_x = area.x.saturating_add(u16::try_from(column).unwrap_or(u16::MAX));
            if cursor_x < area.right().saturating_sub(1) {
                frame.set_cursor_position(Position::new(cursor_x, area.y.saturating_add(1)));
            }
        }
    }
}

/// Characters scrolled off the left so the cursor stays within `width`.
fn scroll_offset(cursor: usize, width: usize) -> usize {
    if width == 0 {
        0
    } else {
        cursor.saturating_sub(width - 1)
    }
}

/// Byte offset of the `char_index`-th character.
fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map_or(s.len(), |(i, _)| i)
}

/// Remove the character at `char_index`.
fn remove_char(s: &str, char_index: usize) -> String {
    s.chars()
        .enumerate()
        .filter(|(i, _)| *i != char_index)
        .map(|(_, c)| c)
        .collect()
}

/// Highlight case-insensitive occurrences of `query` within `text`.
///
/// Matched segments keep the original casing of `text`.
pub fn highlight_text(text: &str, query: &str, base: Style, highlight: Style) -> Line<'static> {
    let needle = query.to_lowercase();
    if needle.trim().is_empty() {
        return Line::from(Span::styled(text.to_string(), base));
    }

    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        if let Some(len) = match_len_at(&text[pos..], &needle) {
            if pos > plain_start {
                spans.push(Span::styled(text[plain_start..pos].to_string(), base));
            }
            spans.push(Span::styled(text[pos..pos + len].to_string(), highlight));
            pos += len;
            plain_start = pos;
        } else {
            pos += text[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if plain_start < text.len() {
        spans.push(Span::styled(text[plain_start..].to_string(), base));
    }

    Line::from(spans)
}

/// Byte length of the prefix of `haystack` whose lowercase form equals `needle`.
fn match_len_at(haystack: &str, needle: &str) -> Option<usize> {
    let mut lowered = String::new();
    for (i, c) in haystack.char_indices() {
        lowered.extend(c.to_lowercase());
        if lowered.len() >= needle.len() {
            return (lowered == needle).then_some(i + c.len_utf8());
        }
        if !needle.starts_with(lowered.as_str()) {
            return None;
        }
    }
    None
}
