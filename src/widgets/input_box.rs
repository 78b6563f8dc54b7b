use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_TEXT};

/// Single-line text input.
///
/// The cursor is a char index, not a byte index, so CJK input edits
/// correctly. Horizontal scrolling is computed in display columns at render
/// time.
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    content: String,
    /// Char index of the cursor, `0..=char_count`.
    cursor: usize,
}

impl InputBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        let mut input = Self::new();
        input.set_content(content.into());
        input
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Insert a pasted string at the cursor. Newlines become commas so a
    /// pasted list turns into keywords.
    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            match c {
                '\r' => {}
                '\n' => self.insert_char(','),
                c => self.insert_char(c),
            }
        }
    }

    /// Delete key.
    pub fn delete_char(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Replace the content; the cursor moves to the end.
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// First char index to show so the cursor fits in `width` columns.
    fn scroll_offset(&self, width: usize) -> usize {
        let chars: Vec<char> = self.content.chars().collect();
        let mut start = 0;
        // Columns from `start` up to and including the cursor block.
        let span = |start: usize| -> usize {
            chars[start..self.cursor]
                .iter()
                .map(|c| c.width().unwrap_or(0))
                .sum::<usize>()
                + 1
        };
        while start < self.cursor && span(start) > width {
            start += 1;
        }
        start
    }
}

/// Renders an [`InputBox`] in a rounded block.
pub struct InputBoxWidget<'a> {
    input: &'a InputBox,
    title: &'a str,
    placeholder: Option<&'a str>,
    focused: bool,
}

impl<'a> InputBoxWidget<'a> {
    pub fn new(input: &'a InputBox, title: &'a str, focused: bool) -> Self {
        Self {
            input,
            title,
            placeholder: None,
            focused,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

impl Widget for InputBoxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused { COLOR_ACCENT } else { COLOR_BORDER };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ", self.title));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.input.is_empty() && !self.focused {
            if let Some(placeholder) = self.placeholder {
                Paragraph::new(Span::styled(placeholder, Style::default().fg(COLOR_DIM)))
                    .render(inner, buf);
            }
            return;
        }

        let offset = self.input.scroll_offset(usize::from(inner.width));
        let text_style = Style::default().fg(COLOR_TEXT);
        let cursor_style = Style::default().add_modifier(Modifier::REVERSED);

        let mut spans = Vec::new();
        for (i, c) in self.input.content.chars().enumerate().skip(offset) {
            let style = if self.focused && i == self.input.cursor {
                cursor_style
            } else {
                text_style
            };
            spans.push(Span::styled(c.to_string(), style));
        }
        if self.focused && self.input.cursor == self.input.char_count() {
            spans.push(Span::styled(" ", cursor_style));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_cjk_and_move() {
        let mut input = InputBox::new();
        for c in "猫周一".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.content(), "猫周一");
        assert_eq!(input.cursor_position(), 3);

        input.move_cursor_left();
        input.insert_char(',');
        assert_eq!(input.content(), "猫周,一");

        input.move_cursor_home();
        input.delete_char();
        assert_eq!(input.content(), "周,一");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = InputBox::with_content("a");
        input.move_cursor_home();
        input.backspace();
        assert_eq!(input.content(), "a");

        input.move_cursor_end();
        input.backspace();
        assert!(input.is_empty());
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = InputBox::with_content("ab");
        input.move_cursor_right();
        assert_eq!(input.cursor_position(), 2);
        input.move_cursor_home();
        input.move_cursor_left();
        assert_eq!(input.cursor_position(), 0);
    }

    #[test]
    fn test_paste_newlines_become_commas() {
        let mut input = InputBox::new();
        input.insert_str("猫\r\n周一\n");
        assert_eq!(input.content(), "猫,周一,");
    }

    #[test]
    fn test_scroll_keeps_cursor_visible() {
        let input = InputBox::with_content("一二三四五");
        // 5 wide chars = 10 columns + cursor block; width 6 shows the tail.
        let offset = input.scroll_offset(6);
        assert_eq!(offset, 3);
        assert_eq!(InputBox::with_content("ab").scroll_offset(10), 0);
    }
}
