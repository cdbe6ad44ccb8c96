//! Category filter chips.

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::contains;
use crate::ui::theme::theme;

/// Gap between chips, in cells.
const CHIP_GAP: usize = 1;

/// Pick the chip next to the selected one, wrapping around.
///
/// `selected` is `None` when no category is selected, which corresponds to
/// the first chip ("All").
pub fn adjacent_chip<'a>(chips: &'a [String], selected: Option<&str>, forward: bool) -> Option<&'a str> {
    if chips.is_empty() {
        return None;
    }
    let current = selected
        .and_then(|s| chips.iter().position(|c| c == s))
        .unwrap_or(0);
    let next = if forward {
        (current + 1) % chips.len()
    } else {
        (current + chips.len() - 1) % chips.len()
    };
    Some(chips[next].as_str())
}

/// Label for a chip, including the selection mark.
fn chip_label(chip: &str, selected: bool) -> String {
    if selected {
        format!(" ✓ {} ", chip)
    } else {
        format!(" {} ", chip)
    }
}

/// First chip to draw so that the selected chip fits in `width` cells.
fn scroll_start(widths: &[usize], selected: usize, width: usize) -> usize {
    let mut start = 0;
    while start < selected {
        let used: usize = widths[start..=selected].iter().map(|w| w + CHIP_GAP).sum();
        if used <= width {
            break;
        }
        start += 1;
    }
    start
}

/// Chip labels with their selection flags, in display order.
fn chip_labels<F: Fn(&str) -> bool>(chips: &[String], is_selected: &F) -> Vec<(String, bool)> {
    chips
        .iter()
        .map(|chip| {
            let selected = is_selected(chip);
            (chip_label(chip, selected), selected)
        })
        .collect()
}

/// Index of the first chip drawn in `width` cells.
fn visible_start(labels: &[(String, bool)], width: usize) -> usize {
    if labels.is_empty() {
        return 0;
    }
    let widths: Vec<usize> = labels.iter().map(|(l, _)| l.chars().count()).collect();
    let selected = labels.iter().position(|(_, s)| *s).unwrap_or(0);
    scroll_start(&widths, selected, width)
}

/// The chip drawn at a cell of the chip row, if any.
pub fn chip_at<'a>(
    area: Rect,
    chips: &'a [String],
    is_selected: impl Fn(&str) -> bool,
    column: u16,
    row: u16,
) -> Option<&'a str> {
    if row != area.y || !contains(area, column, row) {
        return None;
    }
    let labels = chip_labels(chips, &is_selected);
    let start = visible_start(&labels, area.width as usize);
    let column = usize::from(column);
    let mut x = usize::from(area.x) + usize::from(start > 0);
    for (index, (label, _)) in labels.iter().enumerate().skip(start) {
        let width = label.chars().count();
        if (x..x + width).contains(&column) {
            return chips.get(index).map(String::as_str);
        }
        x += width + CHIP_GAP;
    }
    None
}

/// Render the chip row.
pub fn render_category_chips(
    frame: &mut Frame,
    area: Rect,
    chips: &[String],
    is_selected: impl Fn(&str) -> bool,
) {
    let theme = theme();

    let labels = chip_labels(chips, &is_selected);
    let start = visible_start(&labels, area.width as usize);

    let mut spans = Vec::new();
    if start > 0 {
        spans.push(Span::styled("‹", theme.muted_style()));
    }
    for (label, selected) in labels.into_iter().skip(start) {
        let style = if selected {
            theme
                .accent_style()
                .add_modifier(Modifier::REVERSED)
        } else {
            theme.muted_style()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" ".repeat(CHIP_GAP)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
