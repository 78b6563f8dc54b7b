//! User actions: generate, select, export, copy.
//!
//! Every action ends either in a state change or in exactly one alert.
//! Failures are logged with their error code before the alert is shown.

use chrono::Local;

use super::{Alert, App, AppMessage, Focus};
use crate::clipboard::{CopyPath, MSG_COPIED};
use crate::error::{JokeError, JokeResult};
use crate::session::CandidateId;

impl App {
    /// Validate the input and start a background completion request.
    ///
    /// Must be called inside a tokio runtime. Returns the request id when a
    /// request was started.
    pub fn generate(&mut self) -> Option<u64> {
        let style = self.style();
        let request = match self.session.begin_generate(self.keywords.content(), &style) {
            Ok(request) => request,
            Err(JokeError::RequestInFlight) => {
                tracing::debug!("generate ignored, request already in flight");
                self.status = Some(JokeError::RequestInFlight.user_message());
                self.mark_dirty();
                return None;
            }
            Err(err) => {
                self.fail(err);
                return None;
            }
        };

        tracing::info!(
            request_id = request.request_id,
            keywords = ?request.keywords,
            style = %request.style,
            "generating jokes"
        );

        self.pending_export = false;
        self.candidate_cursor = 0;
        if self.focus == Focus::Candidates {
            self.focus = Focus::Keywords;
        }
        self.status = None;
        self.mark_dirty();

        let request_id = request.request_id;
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.generate_jokes(&request.prompt).await;
            // The receiver is gone only when the app is shutting down.
            let _ = tx.send(AppMessage::JokesGenerated { request_id, result });
        });

        Some(request_id)
    }

    /// Select a candidate, refresh the share card and arm the auto-export.
    pub fn select_candidate(&mut self, id: CandidateId) {
        match self.session.select(id, Local::now()) {
            Ok(card) => {
                tracing::info!(candidate = id.raw(), timestamp = %card.timestamp, "joke selected");
                self.pending_export = true;
                self.share_card_drawn = false;
                self.mark_dirty();
            }
            Err(err) => self.fail(err),
        }
    }

    /// Select whatever the candidate cursor is on.
    pub fn select_at_cursor(&mut self) {
        let id = self
            .session
            .candidates()
            .get(self.candidate_cursor)
            .map(|c| c.id);
        if let Some(id) = id {
            self.select_candidate(id);
        }
    }

    /// Select by 1-based display index.
    pub fn select_by_index(&mut self, index: usize) {
        let id = self
            .session
            .candidates()
            .iter()
            .find(|c| c.index == index)
            .map(|c| c.id);
        if let Some(id) = id {
            self.candidate_cursor = index - 1;
            self.select_candidate(id);
        }
    }

    /// Save the share card as PNG.
    pub fn export_image(&mut self) {
        if let Err(err) = self.try_export_image() {
            self.fail(err);
        }
    }

    fn try_export_image(&mut self) -> JokeResult<()> {
        self.session.require_selection()?;
        let millis = Local::now().timestamp_millis();
        let path = self.exporter.export(self.session.share_card(), millis)?;

        self.status = Some(format!("图片已保存：{}", path.display()));
        self.last_export = Some(path);
        self.mark_dirty();
        Ok(())
    }

    /// Copy the selected joke's text.
    pub fn copy_text(&mut self) {
        match self.try_copy_text() {
            Ok(path) => {
                tracing::info!(path = ?path, "joke copied");
                self.show_alert(Alert::info(MSG_COPIED));
            }
            Err(err) => self.fail(err),
        }
    }

    fn try_copy_text(&mut self) -> JokeResult<CopyPath> {
        let text = self.session.require_selection()?.text.clone();
        Ok(self.copier.copy(&text)?)
    }

    /// Called by the main loop after every completed frame.
    ///
    /// Fires the export armed by [`select_candidate`](Self::select_candidate)
    /// once a frame containing the share card has been drawn.
    pub fn on_frame_rendered(&mut self) {
        if self.pending_export && self.share_card_drawn {
            self.pending_export = false;
            self.share_card_drawn = false;
            self.export_image();
        }
    }

    /// Log `err` and show its alert.
    pub(super) fn fail(&mut self, err: JokeError) {
        match err.category() {
            crate::error::ErrorCategory::User => {
                tracing::debug!(code = err.error_code(), "{}", err);
            }
            category => {
                tracing::error!(code = err.error_code(), category = %category, "{}", err);
            }
        }
        self.show_alert(Alert::error(err.user_message()));
    }
}
