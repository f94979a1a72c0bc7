//! Configuration file loading and CLI/config resolution.

mod manager;

pub use manager::{
    BenchmarkConfig, BenchmarkSettings, ConfigFile, ConfigManager, GeneralConfig,
    ResolveOptions, ResolvedConfig, resolve_config,
};
