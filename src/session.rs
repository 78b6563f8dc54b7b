//! Session state for one run of the app.
//!
//! Holds the candidate list, the selection, the request state and the share
//! card. All mutation goes through methods here so the invariants hold:
//!
//! - a selection always names a candidate in the current list
//! - the share card text equals the selected candidate's text
//! - at most one generate request is in flight

use chrono::{DateTime, Local};

use crate::error::{CompletionError, JokeError, JokeResult};
use crate::prompt::{build_prompt, split_keywords, JokeStyle};
use crate::share_card::ShareCard;

/// Stable identifier assigned to a candidate when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandidateId(u64);

impl CandidateId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: CandidateId,
    /// 1-based display index.
    pub index: usize,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight {
        request_id: u64,
    },
}

/// Ticket returned by [`JokeSession::begin_generate`].
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub request_id: u64,
    pub keywords: Vec<String>,
    pub style: JokeStyle,
    pub prompt: String,
}

#[derive(Debug)]
pub struct JokeSession {
    candidates: Vec<Candidate>,
    selected: Option<CandidateId>,
    request_state: RequestState,
    share_card: ShareCard,
    results_visible: bool,
    share_visible: bool,
    next_candidate_id: u64,
    next_request_id: u64,
}

impl Default for JokeSession {
    fn default() -> Self {
        Self::new(Local::now())
    }
}

impl JokeSession {
    /// Empty session; the share card timestamp starts at `now`.
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            candidates: Vec::new(),
            selected: None,
            request_state: RequestState::Idle,
            share_card: ShareCard::new(String::new(), now),
            results_visible: false,
            share_visible: false,
            next_candidate_id: 1,
            next_request_id: 1,
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn request_state(&self) -> RequestState {
        self.request_state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.request_state, RequestState::InFlight { .. })
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn share_visible(&self) -> bool {
        self.share_visible
    }

    pub fn share_card(&self) -> &ShareCard {
        &self.share_card
    }

    pub fn selected_id(&self) -> Option<CandidateId> {
        self.selected
    }

    pub fn selected_candidate(&self) -> Option<&Candidate> {
        self.selected.and_then(|id| self.candidate(id))
    }

    pub fn candidate(&self, id: CandidateId) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    /// Whether the candidate should carry the "selected" highlight.
    ///
    /// Compares ids, so two candidates with identical text are never both
    /// highlighted.
    pub fn is_selected(&self, id: CandidateId) -> bool {
        self.selected == Some(id)
    }

    /// Validate input and move to `InFlight`.
    ///
    /// On success the results and share sections are hidden until the
    /// request finishes.
    pub fn begin_generate(&mut self, raw_keywords: &str, style: &JokeStyle) -> JokeResult<GenerateRequest> {
        let keywords = split_keywords(raw_keywords);
        if keywords.is_empty() {
            return Err(JokeError::EmptyKeywords);
        }
        if self.is_loading() {
            return Err(JokeError::RequestInFlight);
        }

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.request_state = RequestState::InFlight { request_id };
        self.results_visible = false;
        self.share_visible = false;

        let prompt = build_prompt(&keywords, style);
        Ok(GenerateRequest {
            request_id,
            keywords,
            style: style.clone(),
            prompt,
        })
    }

    /// Apply the outcome of a request.
    ///
    /// Returns `None` when `request_id` is not the request in flight (the
    /// result is stale and ignored). Otherwise the state is back to `Idle`
    /// whatever the outcome, and the number of rendered candidates or the
    /// error is returned.
    pub fn finish_generate(
        &mut self,
        request_id: u64,
        result: Result<Vec<String>, CompletionError>,
    ) -> Option<JokeResult<usize>> {
        if self.request_state != (RequestState::InFlight { request_id }) {
            return None;
        }
        self.request_state = RequestState::Idle;

        Some(match result {
            Ok(jokes) => Ok(self.set_candidates(jokes)),
            Err(err) => Err(err.into()),
        })
    }

    /// Replace the candidate list wholesale and show the results section.
    ///
    /// The previous selection referred to candidates that no longer exist,
    /// so it is dropped.
    pub fn set_candidates(&mut self, jokes: Vec<String>) -> usize {
        self.candidates = jokes
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let id = CandidateId(self.next_candidate_id);
                self.next_candidate_id += 1;
                Candidate {
                    id,
                    index: i + 1,
                    text,
                }
            })
            .collect();
        self.selected = None;
        self.results_visible = true;
        self.candidates.len()
    }

    /// Select a candidate, update the share card and reveal it.
    pub fn select(&mut self, id: CandidateId, now: DateTime<Local>) -> JokeResult<&ShareCard> {
        let text = self
            .candidate(id)
            .map(|c| c.text.clone())
            .ok_or(JokeError::UnknownCandidate(id.raw()))?;

        self.selected = Some(id);
        self.share_card = ShareCard::new(text, now);
        self.share_visible = true;
        Ok(&self.share_card)
    }

    /// The selected candidate, or `NoSelection` for export/copy callers.
    pub fn require_selection(&self) -> JokeResult<&Candidate> {
        self.selected_candidate().ok_or(JokeError::NoSelection)
    }
}
