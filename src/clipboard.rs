//! Copy the selected joke as text.
//!
//! Tries the primary clipboard first and falls back to the secondary one on
//! any error. The caller only learns which path succeeded, or the fallback's
//! error when both fail.

use crate::traits::{ClipboardError, ClipboardProvider};

/// Alert text after a successful copy, whichever path was taken.
pub const MSG_COPIED: &str = "笑话已复制到剪贴板！";

/// Which backend ended up holding the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    Primary,
    Fallback,
}

/// Primary + fallback clipboard pair.
pub struct TextCopier {
    primary: Box<dyn ClipboardProvider + Send>,
    fallback: Box<dyn ClipboardProvider + Send>,
}

impl TextCopier {
    pub fn new(
        primary: Box<dyn ClipboardProvider + Send>,
        fallback: Box<dyn ClipboardProvider + Send>,
    ) -> Self {
        Self { primary, fallback }
    }

    /// System clipboard with OSC 52 as the fallback.
    pub fn system() -> Self {
        Self::new(
            Box::new(crate::adapters::ArboardClipboard::new()),
            Box::new(crate::adapters::Osc52Clipboard::stdout()),
        )
    }

    pub fn copy(&mut self, text: &str) -> Result<CopyPath, ClipboardError> {
        match self.primary.set_text(text) {
            Ok(()) => Ok(CopyPath::Primary),
            Err(err) => {
                tracing::warn!(
                    backend = self.primary.name(),
                    error = %err,
                    "clipboard write failed, using {}",
                    self.fallback.name()
                );
                self.fallback.set_text(text).map(|()| CopyPath::Fallback)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockClipboard;

    #[test]
    fn test_primary_path() {
        let primary = MockClipboard::new();
        let fallback = MockClipboard::new();
        let mut copier = TextCopier::new(Box::new(primary.clone()), Box::new(fallback.clone()));

        assert_eq!(copier.copy("笑话").unwrap(), CopyPath::Primary);
        assert_eq!(primary.last().as_deref(), Some("笑话"));
        assert!(fallback.writes().is_empty());
    }

    #[test]
    fn test_fallback_path() {
        let primary = MockClipboard::failing(ClipboardError::Unavailable("no display".into()));
        let fallback = MockClipboard::new();
        let mut copier = TextCopier::new(Box::new(primary), Box::new(fallback.clone()));

        assert_eq!(copier.copy("笑话").unwrap(), CopyPath::Fallback);
        assert_eq!(fallback.last().as_deref(), Some("笑话"));
    }

    #[test]
    fn test_both_fail_reports_fallback_error() {
        let primary = MockClipboard::failing(ClipboardError::Unavailable("a".into()));
        let fallback = MockClipboard::failing(ClipboardError::Write("b".into()));
        let mut copier = TextCopier::new(Box::new(primary), Box::new(fallback));

        assert_eq!(
            copier.copy("x").unwrap_err(),
            ClipboardError::Write("b".into())
        );
    }
}
