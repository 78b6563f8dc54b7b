//! Terminal clipboard via the OSC 52 escape sequence.
//!
//! Works over SSH and inside multiplexers that forward OSC 52, which makes it
//! the fallback when no system clipboard can be opened.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::io::{self, Write};

use crate::traits::{ClipboardError, ClipboardProvider};

/// Fallback clipboard that writes `ESC ] 52 ; c ; <base64> BEL` to a writer.
#[derive(Debug)]
pub struct Osc52Clipboard<W: Write> {
    writer: W,
}

impl Osc52Clipboard<io::Stdout> {
    /// Write the sequence to the controlling terminal's stdout.
    pub fn stdout() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the clipboard and return the writer (tests read it back).
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Build the OSC 52 "set clipboard" sequence for `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", BASE64.encode(text.as_bytes()))
}

impl<W: Write> ClipboardProvider for Osc52Clipboard<W> {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writer
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}
