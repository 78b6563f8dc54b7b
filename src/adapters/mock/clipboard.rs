//! In-memory clipboard for testing.

use std::sync::{Arc, Mutex};

use crate::traits::{ClipboardError, ClipboardProvider};

/// Clipboard double that stores writes in memory, or fails on demand.
///
/// Clones share the same storage so a test can keep a handle while the app
/// owns the boxed provider.
#[derive(Debug, Clone, Default)]
pub struct MockClipboard {
    contents: Arc<Mutex<Vec<String>>>,
    failure: Option<ClipboardError>,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails with `error`.
    pub fn failing(error: ClipboardError) -> Self {
        Self {
            contents: Arc::default(),
            failure: Some(error),
        }
    }

    /// Everything successfully written, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.contents.lock().unwrap().clone()
    }

    /// Last successfully written text.
    pub fn last(&self) -> Option<String> {
        self.contents.lock().unwrap().last().cloned()
    }
}

impl ClipboardProvider for MockClipboard {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.contents.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
