//! Clipboard trait abstraction.

/// Errors from a clipboard backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClipboardError {
    /// The backend could not be opened (no display server, no tty, ...).
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    /// The backend was opened but rejected the write.
    #[error("Clipboard write failed: {0}")]
    Write(String),
}

/// Something that can take a piece of text and put it on a clipboard.
pub trait ClipboardProvider {
    /// Short backend name for logging.
    fn name(&self) -> &'static str;

    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
