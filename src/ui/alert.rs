//! Modal alert overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::components::{dialog_area, render_dialog_frame, DialogFrameConfig};
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};
use crate::app::Alert;
use crate::share_card::wrap_text;

pub const ALERT_TITLE: &str = "提示";
pub const ALERT_CONFIRM: &str = "[Enter] 确定";

pub fn render_alert(frame: &mut Frame, area: Rect, alert: &Alert) {
    let border = if alert.is_error() { COLOR_ERROR } else { COLOR_ACCENT };

    // Measure with the widest frame, then wrap to the real inner width.
    let sizing = DialogFrameConfig::new(ALERT_TITLE, 1).border_color(border);
    let text_width = dialog_area(area, &sizing).width.saturating_sub(4);
    let rows = wrap_text(&alert.message, text_width);

    let config = DialogFrameConfig::new(ALERT_TITLE, rows.len() as u16 + 2).border_color(border);
    let inner = render_dialog_frame(frame, area, &config);

    let mut lines: Vec<Line> = rows
        .into_iter()
        .map(|row| {
            Line::from(Span::styled(
                row,
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(ALERT_CONFIRM, Style::default().fg(COLOR_DIM))));

    frame.render_widget(Paragraph::new(lines).centered(), inner);
}
