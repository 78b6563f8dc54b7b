//! Dialog Frame Component
//!
//! A centered dialog frame with rounded borders. Clears what is behind it
//! and sizes itself to the terminal.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::theme::{COLOR_BORDER, COLOR_DIALOG_BG, COLOR_HEADER};

#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    pub title: &'a str,
    /// Content height, borders excluded.
    pub content_height: u16,
    pub min_width: u16,
    pub max_width: u16,
    pub border_color: ratatui::style::Color,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 24,
            max_width: 50,
            border_color: COLOR_BORDER,
        }
    }

    pub fn border_color(mut self, color: ratatui::style::Color) -> Self {
        self.border_color = color;
        self
    }
}

/// Outer rectangle of the dialog, centered in `area`.
///
/// Width is 60% of the area within `min_width..=max_width`, never wider than
/// the area minus a 2 column margin on each side.
pub fn dialog_area(area: Rect, config: &DialogFrameConfig) -> Rect {
    let preferred = (u32::from(area.width) * 60 / 100) as u16;
    let width = preferred
        .clamp(config.min_width, config.max_width.max(config.min_width))
        .min(area.width.saturating_sub(4));
    let height = (config.content_height + 2).min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Draw the frame and return the inner content area.
pub fn render_dialog_frame(frame: &mut Frame, area: Rect, config: &DialogFrameConfig) -> Rect {
    let dialog = dialog_area(area, config);

    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(config.border_color))
        .style(Style::default().bg(COLOR_DIALOG_BG));
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    inner
}
