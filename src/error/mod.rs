//! Error types for jokecard.
//!
//! - [`CompletionError`]: the completion API call, including response-shape
//!   problems
//! - [`ExportError`]: share-card capture and PNG writing
//! - [`JokeError`]: the unified type every user action returns, with a
//!   category, a log code and the alert text
//!
//! | Category | Examples |
//! |----------|----------|
//! | Network | connection refused, timeout |
//! | Server | HTTP 500, malformed JSON, missing `choices` |
//! | User | empty keywords, nothing selected, request in flight |
//! | System | no font, missing glyphs, disk write failure, clipboard failure |

mod category;
mod completion;
mod export;
mod joke_error;

pub use category::ErrorCategory;
pub use completion::CompletionError;
pub use export::ExportError;
pub use joke_error::{
    JokeError, MSG_EMPTY_KEYWORDS, MSG_EXPORT_FAILED, MSG_GENERATE_FAILED, MSG_NO_SELECTION,
};

/// Result alias for joke session actions.
pub type JokeResult<T> = Result<T, JokeError>;
