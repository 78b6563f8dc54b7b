//! Application state for the TUI.
//!
//! [`App`] owns the [`JokeSession`] plus everything the screen needs on top
//! of it: the keyword input, the style selector, focus, the candidate cursor
//! and the alert box. Actions live in `actions`, input and async message
//! handling in `handlers`.

mod actions;
mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::{Alert, AlertKind, Focus};

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::clipboard::TextCopier;
use crate::completion::CompletionClient;
use crate::config::AppConfig;
use crate::prompt::{JokeStyle, STYLE_PRESETS};
use crate::session::JokeSession;
use crate::share_card::CardExporter;
use crate::traits::HttpClient;
use crate::widgets::InputBox;

pub struct App {
    pub session: JokeSession,
    pub keywords: InputBox,
    /// Index into [`STYLE_PRESETS`].
    pub style_index: usize,
    pub focus: Focus,
    /// Highlighted row in the candidate list (not the selection).
    pub candidate_cursor: usize,
    pub alert: Option<Alert>,
    /// One-line status under the sections.
    pub status: Option<String>,
    pub should_quit: bool,
    /// Dirty flag; the main loop only draws when set.
    pub needs_redraw: bool,
    /// Drives the loading spinner.
    pub tick_count: u64,
    /// Auto-export armed by a selection, fired once the card has been drawn.
    pub pending_export: bool,
    /// Set by the renderer when the share card was part of the last frame.
    pub share_card_drawn: bool,
    pub last_export: Option<PathBuf>,
    client: CompletionClient,
    exporter: CardExporter,
    copier: TextCopier,
    /// Taken by the main loop for `select!`.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    pub fn new(config: &AppConfig, http: Arc<dyn HttpClient>, copier: TextCopier) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            session: JokeSession::default(),
            keywords: InputBox::new(),
            style_index: 0,
            focus: Focus::default(),
            candidate_cursor: 0,
            alert: None,
            status: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            pending_export: false,
            share_card_drawn: false,
            last_export: None,
            client: CompletionClient::from_config(http, config),
            exporter: CardExporter::from_config(config),
            copier,
            message_rx: Some(message_rx),
            message_tx,
        }
    }

    /// Replace the exporter, e.g. to point it at a temp dir or font.
    pub fn with_exporter(mut self, exporter: CardExporter) -> Self {
        self.exporter = exporter;
        self
    }

    pub fn style(&self) -> JokeStyle {
        JokeStyle::new(STYLE_PRESETS[self.style_index % STYLE_PRESETS.len()])
    }

    pub fn next_style(&mut self) {
        self.style_index = (self.style_index + 1) % STYLE_PRESETS.len();
    }

    pub fn prev_style(&mut self) {
        self.style_index = (self.style_index + STYLE_PRESETS.len() - 1) % STYLE_PRESETS.len();
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_loading() {
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn show_alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
        self.mark_dirty();
    }

    pub fn dismiss_alert(&mut self) {
        if self.alert.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Move focus forward, skipping the candidate list while it is hidden.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Keywords => Focus::Style,
            Focus::Style if self.candidates_focusable() => Focus::Candidates,
            Focus::Style | Focus::Candidates => Focus::Keywords,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Keywords if self.candidates_focusable() => Focus::Candidates,
            Focus::Keywords => Focus::Style,
            Focus::Style => Focus::Keywords,
            Focus::Candidates => Focus::Style,
        };
    }

    fn candidates_focusable(&self) -> bool {
        self.session.results_visible() && !self.session.candidates().is_empty()
    }

    pub fn move_candidate_cursor(&mut self, delta: isize) {
        let len = self.session.candidates().len();
        if len == 0 {
            self.candidate_cursor = 0;
            return;
        }
        let next = self.candidate_cursor as isize + delta;
        self.candidate_cursor = next.clamp(0, len as isize - 1) as usize;
    }
}
