//! jokecard - generate short jokes from keywords and share them as image cards.
//!
//! This library exposes the modules for the binary and for integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod clipboard;
pub mod completion;
pub mod config;
pub mod error;
pub mod logging;
pub mod parser;
pub mod prompt;
pub mod session;
pub mod share_card;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod widgets;
