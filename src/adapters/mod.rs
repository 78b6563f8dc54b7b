//! Concrete implementations of the traits in `crate::traits`.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`ArboardClipboard`] - OS clipboard via arboard
//! - [`Osc52Clipboard`] - terminal clipboard via OSC 52
//!
//! The [`mock`] submodule provides test doubles.

pub mod arboard_clipboard;
pub mod mock;
pub mod osc52_clipboard;
pub mod reqwest_http;

pub use arboard_clipboard::ArboardClipboard;
pub use mock::{MockClipboard, MockHttpClient, MockResponse};
pub use osc52_clipboard::Osc52Clipboard;
pub use reqwest_http::ReqwestHttpClient;
