//! Share section: the card as it will be exported, plus action hints.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};
use crate::app::App;
use crate::share_card::{card_size, ShareCardWidget};

pub const SHARE_TITLE: &str = " 分享卡片 ";
pub const SHARE_HINT: &str = "Ctrl+S 保存图片 · Ctrl+Y 复制文字";

/// Preferred outer width of the share section.
pub fn share_section_width() -> u16 {
    crate::share_card::widget::CARD_WIDTH + 4
}

/// Draw the share section and report that the card is on screen.
pub fn render_share_section(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(SHARE_TITLE);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [card_area, hint_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    let card = app.session.share_card();
    let size = card_size(card);
    let width = size.width.min(card_area.width);
    let height = size.height.min(card_area.height);
    let centered = Rect {
        x: card_area.x + (card_area.width - width) / 2,
        y: card_area.y,
        width,
        height,
    };
    frame.render_widget(ShareCardWidget::new(card), centered);

    let hint = if app.pending_export {
        Line::from(Span::styled("正在保存图片…", Style::default().fg(COLOR_ACCENT)))
    } else {
        Line::from(Span::styled(SHARE_HINT, Style::default().fg(COLOR_DIM)))
    };
    frame.render_widget(Paragraph::new(hint).centered(), hint_area);

    app.share_card_drawn = true;
}
