use anyhow::Result;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::chat::{ChatSession, SessionConfig};
use crate::client::OllamaClient;
use crate::config::ResolvedConfig;

pub async fn run_chat(config: ResolvedConfig) -> Result<()> {
    let client = OllamaClient::new(config.endpoint.clone());

    // The prompt reads Ctrl+C itself; this only fires while a request is running.
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed))?;

    let mut session =
        ChatSession::new(SessionConfig::from(config), client).with_interrupt_flag(interrupted);
    session.run().await
}
