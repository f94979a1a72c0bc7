use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tokio::process::Command;
use tracing::debug;

use super::ModelClient;

/// Where a stock Ollama install listens.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Environment variable the `ollama` CLI (and server) read for the server address.
pub const OLLAMA_HOST_ENV: &str = "OLLAMA_HOST";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Client for Ollama's native chat API.
///
/// Model listing goes through the `ollama` command-line tool, so it reports
/// whatever the local installation has pulled.
pub struct OllamaClient {
    client: Client,
    endpoint: String,
}

impl OllamaClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.endpoint.trim_end_matches('/'))
    }

    /// `ollama list` pointed at the same server that receives chat requests.
    fn list_command(&self) -> Command {
        let mut command = Command::new("ollama");
        command.arg("list").env(OLLAMA_HOST_ENV, &self.endpoint);
        command
    }
}

#[async_trait]
impl ModelClient for OllamaClient {
    async fn chat(&self, model: &str, message: &str) -> Result<String> {
        let url = self.chat_url();

        let request = ChatRequest {
            model,
            messages: vec![Message {
                role: "user",
                content: Cow::Borrowed(message),
            }],
            stream: false,
        };

        debug!(%url, model, "sending chat request");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("Failed to connect to Ollama at {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("Ollama request failed with status {status}: {body}");
        }

        let body: ChatResponse = response
            .json()
            .await
            .context("Failed to parse Ollama chat response")?;

        debug!(model, bytes = body.message.content.len(), "chat response received");
        Ok(body.message.content)
    }

    async fn list_models(&self) -> Result<String> {
        let output = self
            .list_command()
            .output()
            .await
            .context("Failed to run 'ollama list'")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("'ollama list' exited with {}: {}", output.status, stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
