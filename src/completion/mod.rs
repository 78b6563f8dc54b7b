//! Completion API access: wire types and the client.

pub mod client;
pub mod types;

pub use client::{CompletionClient, DEFAULT_BASE_URL, DEFAULT_MODEL, MAX_TOKENS, TEMPERATURE};
pub use types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Role};
