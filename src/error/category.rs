//! Error category classification.

use std::fmt;

/// High-level categorization of errors for logging and messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection refused, DNS, timeout.
    Network,
    /// The completion API answered, but with an error status or a body we
    /// cannot use.
    Server,
    /// The user must act first (empty input, nothing selected).
    User,
    /// Local resources: fonts, files, clipboard.
    System,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
