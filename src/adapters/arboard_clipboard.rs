//! System clipboard backed by `arboard`.
//!
//! Uses the OS clipboard (NSPasteboard on macOS, X11/Wayland on Linux,
//! the Win32 clipboard on Windows).

use crate::traits::{ClipboardError, ClipboardProvider};

/// Primary clipboard backend.
///
/// The `arboard::Clipboard` handle is opened lazily on each write so that a
/// missing display server only fails the copy, not startup.
#[derive(Debug, Default)]
pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardProvider for ArboardClipboard {
    fn name(&self) -> &'static str {
        "arboard"
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}
