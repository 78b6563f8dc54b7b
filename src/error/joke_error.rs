//! Unified error type for joke session actions.

use super::category::ErrorCategory;
use super::completion::CompletionError;
use super::export::ExportError;
use crate::traits::ClipboardError;

/// Alert text shown when generation fails for any reason.
pub const MSG_GENERATE_FAILED: &str = "生成失败，请稍后重试！";
/// Alert text shown when the image export fails.
pub const MSG_EXPORT_FAILED: &str = "下载失败，请稍后重试！";
/// Alert text shown when export or copy is attempted with nothing selected.
pub const MSG_NO_SELECTION: &str = "请先选择一个笑话！";
/// Alert text shown when generate is triggered with no keywords.
pub const MSG_EMPTY_KEYWORDS: &str = "请输入关键词！";

/// Every failure a user action can end in.
///
/// Each one is terminal for the action that produced it and surfaces as a
/// single alert built from [`JokeError::user_message`].
#[derive(Debug, thiserror::Error)]
pub enum JokeError {
    #[error("keywords are empty")]
    EmptyKeywords,

    #[error("a generate request is already in flight")]
    RequestInFlight,

    #[error("no joke selected")]
    NoSelection,

    #[error("candidate {0} does not exist")]
    UnknownCandidate(u64),

    #[error("completion failed: {0}")]
    Completion(#[from] CompletionError),

    #[error("export failed: {0}")]
    Export(#[from] ExportError),

    #[error("copy failed: {0}")]
    Clipboard(#[from] ClipboardError),
}

impl JokeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            JokeError::EmptyKeywords
            | JokeError::RequestInFlight
            | JokeError::NoSelection
            | JokeError::UnknownCandidate(_) => ErrorCategory::User,
            JokeError::Completion(err) if err.is_network() => ErrorCategory::Network,
            JokeError::Completion(_) => ErrorCategory::Server,
            JokeError::Export(_) | JokeError::Clipboard(_) => ErrorCategory::System,
        }
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            JokeError::EmptyKeywords => "INPUT_EMPTY_KEYWORDS",
            JokeError::RequestInFlight => "INPUT_REQUEST_IN_FLIGHT",
            JokeError::NoSelection => "INPUT_NO_SELECTION",
            JokeError::UnknownCandidate(_) => "INPUT_UNKNOWN_CANDIDATE",
            JokeError::Completion(err) => err.error_code(),
            JokeError::Export(err) => err.error_code(),
            JokeError::Clipboard(ClipboardError::Unavailable(_)) => "CLIPBOARD_UNAVAILABLE",
            JokeError::Clipboard(ClipboardError::Write(_)) => "CLIPBOARD_WRITE",
        }
    }

    /// Alert text for the user. Details go to the log, not the alert.
    pub fn user_message(&self) -> String {
        match self {
            JokeError::EmptyKeywords => MSG_EMPTY_KEYWORDS.to_string(),
            JokeError::RequestInFlight => "正在生成中，请稍候…".to_string(),
            JokeError::NoSelection => MSG_NO_SELECTION.to_string(),
            JokeError::UnknownCandidate(_) => "所选笑话已失效，请重新选择！".to_string(),
            JokeError::Completion(_) => MSG_GENERATE_FAILED.to_string(),
            JokeError::Export(_) => MSG_EXPORT_FAILED.to_string(),
            JokeError::Clipboard(_) => "复制失败，请手动复制！".to_string(),
        }
    }
}
