//! Tab Selector Component
//!
//! A horizontal selector that marks the chosen item with `▶`.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};

/// Render `items` on one line with `selected` marked.
///
/// The marker is bright only while the selector has focus.
pub fn render_tab_selector(items: &[&str], selected: usize, focused: bool) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];

    for (idx, label) in items.iter().enumerate() {
        if idx == selected {
            let marker_style = if focused {
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            spans.push(Span::styled("▶ ", marker_style));
            spans.push(Span::styled(
                label.to_string(),
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(label.to_string(), Style::default().fg(COLOR_DIM)));
        }

        if idx + 1 < items.len() {
            spans.push(Span::raw("  "));
        }
    }

    Line::from(spans)
}
