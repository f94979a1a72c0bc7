//! Model listing command handler.

use anyhow::Result;

use crate::chat::print_models;
use crate::client::{ModelClient, OllamaClient};

/// Prints the models the local Ollama installation has pulled.
pub async fn list_models(client: &OllamaClient) -> Result<()> {
    let listing = client.list_models().await?;
    print_models(&listing);
    Ok(())
}
