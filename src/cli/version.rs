//! `--version` and `--help` output.

use crate::config::{
    ENV_API_KEY, ENV_API_KEY_FALLBACK, ENV_BASE_URL, ENV_FILE_LABEL, ENV_FONT, ENV_LOG_DIR,
    ENV_MODEL, ENV_OUTPUT_DIR, ENV_TIMEOUT_SECS,
};
use crate::logging::ENV_LOG_FILTER;

/// Read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn handle_version_command() {
    println!("jokecard {}", VERSION);
}

pub fn handle_help_command() {
    println!("{}", help_text());
}

pub fn help_text() -> String {
    format!(
        "jokecard {VERSION}
Generate short jokes from keywords and share them as image cards.

USAGE:
    jokecard [--version | --help]

KEYS:
    Tab          switch between keywords, style and jokes
    Enter        generate (keywords) / select (jokes)
    Ctrl+G       generate
    Ctrl+S       save the share card as PNG
    Ctrl+Y       copy the selected joke
    Esc, Ctrl+C  quit

ENVIRONMENT:
    {ENV_API_KEY:<22} API key (falls back to {ENV_API_KEY_FALLBACK})
    {ENV_BASE_URL:<22} chat-completion base URL
    {ENV_MODEL:<22} model name
    {ENV_OUTPUT_DIR:<22} where PNG cards are saved
    {ENV_FILE_LABEL:<22} file name prefix for saved cards
    {ENV_FONT:<22} TTF/OTF font used for saved cards
    {ENV_TIMEOUT_SECS:<22} request timeout in seconds
    {ENV_LOG_DIR:<22} log directory
    {ENV_LOG_FILTER:<22} log filter (e.g. debug)"
    )
}
