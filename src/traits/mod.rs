//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - the completion API transport
//! - [`ClipboardProvider`] - primary and fallback clipboard backends

pub mod clipboard;
pub mod http;

pub use clipboard::{ClipboardError, ClipboardProvider};
pub use http::{Headers, HttpClient, HttpError, Response};
