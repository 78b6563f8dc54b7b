//! Key, paste and async message handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, AppMessage, Focus};

impl App {
    /// Handle an incoming async message.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::JokesGenerated { request_id, result } => {
                match self.session.finish_generate(request_id, result) {
                    None => {
                        tracing::debug!(request_id, "ignoring stale generate result");
                    }
                    Some(Ok(count)) => {
                        tracing::info!(request_id, count, "jokes generated");
                        self.candidate_cursor = 0;
                        if count > 0 {
                            self.focus = Focus::Candidates;
                        }
                        self.status = Some(format!("生成了 {} 个笑话，选择一个生成分享卡片", count));
                    }
                    Some(Err(err)) => self.fail(err),
                }
            }
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        // The alert is modal.
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss_alert();
            }
            return;
        }

        if ctrl {
            match key.code {
                KeyCode::Char('g') => {
                    self.generate();
                }
                KeyCode::Char('s') => self.export_image(),
                KeyCode::Char('y') => self.copy_text(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            _ => match self.focus {
                Focus::Keywords => self.handle_keywords_key(key),
                Focus::Style => self.handle_style_key(key),
                Focus::Candidates => self.handle_candidates_key(key),
            },
        }
    }

    fn handle_keywords_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.generate();
            }
            KeyCode::Char(c) => self.keywords.insert_char(c),
            KeyCode::Backspace => self.keywords.backspace(),
            KeyCode::Delete => self.keywords.delete_char(),
            KeyCode::Left => self.keywords.move_cursor_left(),
            KeyCode::Right => self.keywords.move_cursor_right(),
            KeyCode::Home => self.keywords.move_cursor_home(),
            KeyCode::End => self.keywords.move_cursor_end(),
            _ => {}
        }
    }

    fn handle_style_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Up => self.prev_style(),
            KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => self.next_style(),
            KeyCode::Enter => {
                self.generate();
            }
            _ => {}
        }
    }

    fn handle_candidates_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_candidate_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_candidate_cursor(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.select_at_cursor(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(index) = c.to_digit(10) {
                    self.select_by_index(index as usize);
                }
            }
            _ => {}
        }
    }

    /// Bracketed paste goes to the keyword input when it has focus.
    pub fn handle_paste(&mut self, text: &str) {
        if self.alert.is_none() && self.focus == Focus::Keywords {
            self.keywords.insert_str(text);
            self.mark_dirty();
        }
    }
}
