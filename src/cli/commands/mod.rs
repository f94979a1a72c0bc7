//! Subcommand implementations.

/// Benchmark command handler.
pub mod bench;

/// Chat mode command handler.
pub mod chat;

/// Model listing command handler.
pub mod models;
