//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockClipboard`] - in-memory clipboard with optional failure

pub mod clipboard;
pub mod http;

pub use clipboard::MockClipboard;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
