//! Contextual help bar component.
//!
//! Displays key hints for whichever part of the screen has input focus.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::events::{get_context_hints, KeyContext};
use crate::ui::theme::theme;

/// Render the help bar for the given context.
pub fn render_context_help(frame: &mut Frame, area: Rect, context: KeyContext) {
    let line = Line::from(parse_hints_to_spans(get_context_hints(context)));
    frame.render_widget(Paragraph::new(line), area);
}

/// Split hint text into key spans (in brackets) and description spans.
fn parse_hints_to_spans(hints: &str) -> Vec<Span<'static>> {
    let theme = theme();
    let mut spans = Vec::new();
    let mut current = String::new();
    let mut in_bracket = false;

    for c in hints.chars() {
        match c {
            '[' => {
                if !current.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut current),
                        theme.muted_style(),
                    ));
                }
                in_bracket = true;
                current.push(c);
            }
            ']' if in_bracket => {
                current.push(c);
                spans.push(Span::styled(
                    std::mem::take(&mut current),
                    theme.accent_style(),
                ));
                in_bracket = false;
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        spans.push(Span::styled(current, theme.muted_style()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hints_to_spans_simple() {
        let spans = parse_hints_to_spans("[j/k] move");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "[j/k]");
        assert_eq!(spans[0].style, theme().accent_style());
    }

    #[test]
    fn test_parse_hints_to_spans_multiple_keys() {
        let spans = parse_hints_to_spans("[j/k] move  [Enter] open  [q] quit");
        assert_eq!(spans.len(), 6);
    }

    #[test]
    fn test_parse_hints_to_spans_empty() {
        assert!(parse_hints_to_spans("").is_empty());
    }

    #[test]
    fn test_parse_hints_to_spans_no_brackets() {
        assert_eq!(parse_hints_to_spans("just text").len(), 1);
    }
}
