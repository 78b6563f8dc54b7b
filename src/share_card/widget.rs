//! Share card widget and its text layout.

use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use super::ShareCard;

/// Card width in terminal cells, borders included.
pub const CARD_WIDTH: u16 = 38;
/// Horizontal padding inside the border, per side.
const PADDING_X: u16 = 2;
/// Rows that are not joke text: border x2, title, blank, blank, footer.
const CHROME_ROWS: u16 = 6;
/// Row of the first joke text line: border, title, blank.
pub const TEXT_FIRST_ROW: u16 = 3;

pub const CARD_TITLE: &str = "今日冷笑话";
pub const CARD_BRAND: &str = "冷笑话生成器";

pub const CARD_BG: Color = Color::Rgb(255, 248, 231);
pub const CARD_TEXT: Color = Color::Rgb(51, 51, 51);
pub const CARD_ACCENT: Color = Color::Rgb(255, 107, 107);
pub const CARD_DIM: Color = Color::Rgb(150, 150, 150);

/// Width available for joke text.
pub fn text_width() -> u16 {
    CARD_WIDTH - 2 - PADDING_X * 2
}

/// Wrap `text` to `width` display columns.
///
/// Breaks at character boundaries (CJK text has no spaces to break on).
/// Explicit newlines start a new line; blank input lines are kept.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(2));
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut used = 0;
        for ch in paragraph.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                used = 0;
            }
            current.push(ch);
            used += w;
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Preferred size of the card for `card`.
pub fn card_size(card: &ShareCard) -> Size {
    let rows = wrap_text(card.display_text(), text_width()).len() as u16;
    Size::new(CARD_WIDTH, rows.saturating_add(CHROME_ROWS))
}

/// Renders a [`ShareCard`].
///
/// Fills whatever area it is given; callers size the area with
/// [`card_size`].
pub struct ShareCardWidget<'a> {
    card: &'a ShareCard,
}

impl<'a> ShareCardWidget<'a> {
    pub fn new(card: &'a ShareCard) -> Self {
        Self { card }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let text_style = Style::default().fg(CARD_TEXT).add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(Span::styled(
                CARD_TITLE,
                Style::default().fg(CARD_ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];

        lines.extend(
            wrap_text(self.card.display_text(), text_width())
                .into_iter()
                .map(|l| Line::from(Span::styled(l, text_style))),
        );
        lines.push(Line::default());

        let footer_gap = usize::from(text_width())
            .saturating_sub(display_width(&self.card.timestamp) + display_width(CARD_BRAND));
        lines.push(Line::from(vec![
            Span::styled(self.card.timestamp.clone(), Style::default().fg(CARD_DIM)),
            Span::raw(" ".repeat(footer_gap)),
            Span::styled(CARD_BRAND, Style::default().fg(CARD_ACCENT)),
        ]));
        lines
    }
}

fn display_width(s: &str) -> usize {
    s.chars().map(|c| c.width().unwrap_or(0)).sum()
}

impl Widget for ShareCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CARD_ACCENT))
            .style(Style::default().bg(CARD_BG));

        let inner = block.inner(area);
        block.render(area, buf);

        let padded = Rect {
            x: inner.x.saturating_add(PADDING_X),
            y: inner.y,
            width: inner.width.saturating_sub(PADDING_X * 2),
            height: inner.height,
        };
        Paragraph::new(self.lines()).render(padded, buf);
    }
}
