//! Request/response access to the model server.

mod ollama;

use anyhow::Result;
use async_trait::async_trait;

pub use ollama::{DEFAULT_ENDPOINT, OLLAMA_HOST_ENV, OllamaClient};

/// A model backend that answers single-turn prompts.
///
/// Every call is independent: no conversation history is carried between
/// calls to [`ModelClient::chat`].
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Sends `message` as the only user turn to `model` and returns the reply text.
    async fn chat(&self, model: &str, message: &str) -> Result<String>;

    /// Returns a human-readable listing of the models the backend has installed.
    async fn list_models(&self) -> Result<String>;
}

/// Approximate token count: the number of whitespace-delimited words.
pub fn count_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}
