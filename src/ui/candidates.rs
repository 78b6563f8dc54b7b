//! Candidate list.
//!
//! Each candidate is a header row (`笑话 #n` plus the select affordance),
//! its wrapped text and a blank separator. The row block under the cursor
//! gets a background while the list has focus; the selected candidate is
//! marked by id.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_CURSOR_BG, COLOR_DIM, COLOR_SUCCESS, COLOR_TEXT};
use crate::app::{App, Focus};
use crate::share_card::wrap_text;

pub const CANDIDATES_TITLE: &str = " 笑话候选 ";
pub const SELECT_LABEL: &str = "选择这个";
pub const SELECTED_LABEL: &str = "✓ 已选择";
pub const EMPTY_RESULTS: &str = "没有生成任何笑话，换个关键词试试吧";

pub fn candidate_header(index: usize) -> String {
    format!("笑话 #{}", index)
}

/// Build the list lines and the line range of the candidate under the
/// cursor.
fn build_lines(app: &App, text_width: u16) -> (Vec<Line<'static>>, (usize, usize)) {
    let focused = app.focus == Focus::Candidates;
    let mut lines = Vec::new();
    let mut cursor_range = (0, 0);

    for (pos, candidate) in app.session.candidates().iter().enumerate() {
        let start = lines.len();
        let under_cursor = focused && pos == app.candidate_cursor;
        let row_style = if under_cursor {
            Style::default().bg(COLOR_CURSOR_BG)
        } else {
            Style::default()
        };

        let selected = app.session.is_selected(candidate.id);
        let affordance = if selected {
            Span::styled(
                SELECTED_LABEL,
                Style::default().fg(COLOR_SUCCESS).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!("[{}]", SELECT_LABEL), Style::default().fg(COLOR_DIM))
        };
        let marker = if under_cursor { "▶ " } else { "  " };

        lines.push(
            Line::from(vec![
                Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
                Span::styled(
                    candidate_header(candidate.index),
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                affordance,
            ])
            .style(row_style),
        );

        let text_style = if selected {
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_TEXT)
        };
        for row in wrap_text(&candidate.text, text_width.saturating_sub(2)) {
            lines.push(Line::from(Span::styled(format!("  {}", row), text_style)).style(row_style));
        }

        if under_cursor {
            cursor_range = (start, lines.len());
        }
        lines.push(Line::default());
    }

    (lines, cursor_range)
}

/// First line to show so the cursor's block is visible.
fn scroll_for(cursor_range: (usize, usize), height: usize) -> usize {
    let (start, end) = cursor_range;
    end.saturating_sub(height).min(start)
}

pub fn render_candidates(frame: &mut Frame, area: Rect, app: &App) {
    let border = if app.focus == Focus::Candidates {
        COLOR_ACCENT
    } else {
        COLOR_BORDER
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(CANDIDATES_TITLE);
    let inner = block.inner(area);

    if app.session.candidates().is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(EMPTY_RESULTS, Style::default().fg(COLOR_DIM))).block(block),
            area,
        );
        return;
    }

    let (lines, cursor_range) = build_lines(app, inner.width);
    let scroll = scroll_for(cursor_range, usize::from(inner.height));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0)),
        area,
    );
}
