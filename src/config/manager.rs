use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::bench::{DEFAULT_CHART_PATH, DEFAULT_ITERATIONS, DEFAULT_PROMPT};
use crate::client::{DEFAULT_ENDPOINT, OLLAMA_HOST_ENV};
use crate::paths;
use crate::ui::GlyphStyle;

/// Model used when neither the CLI nor the config file names one.
pub const DEFAULT_MODEL: &str = "llama3.2:1b";

/// Default settings in the `[mygpt]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default model name.
    pub model: Option<String>,
    /// Default spinner glyph style.
    pub style: Option<GlyphStyle>,
    /// Ollama server URL.
    pub endpoint: Option<String>,
}

/// Settings in the `[benchmark]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Prompt sent on every iteration.
    pub prompt: Option<String>,
    /// Number of iterations per run.
    pub iterations: Option<usize>,
    /// Where the chart is written.
    pub output: Option<PathBuf>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/mygpt/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub mygpt: GeneralConfig,
    #[serde(default)]
    pub benchmark: BenchmarkConfig,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub model: Option<String>,
    pub style: Option<GlyphStyle>,
    pub endpoint: Option<String>,
    pub prompt: Option<String>,
    pub iterations: Option<usize>,
    pub output: Option<PathBuf>,
}

/// Benchmark parameters after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkSettings {
    pub prompt: String,
    pub iterations: usize,
    pub chart_path: PathBuf,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The model to start with.
    pub model: String,
    /// Spinner glyph style.
    pub style: GlyphStyle,
    /// Ollama server URL.
    pub endpoint: String,
    /// Benchmark parameters.
    pub benchmark: BenchmarkSettings,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI option, then config file, then (endpoint only) the
/// `OLLAMA_HOST` environment variable, then built-in defaults.
///
/// # Errors
///
/// Returns an error if the iteration count resolves to zero.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let general = &config_file.mygpt;
    let bench = &config_file.benchmark;

    let model = options
        .model
        .as_ref()
        .or(general.model.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let style = options.style.or(general.style).unwrap_or_default();

    let endpoint = options
        .endpoint
        .as_ref()
        .or(general.endpoint.as_ref())
        .cloned()
        .or_else(|| {
            std::env::var(OLLAMA_HOST_ENV)
                .ok()
                .filter(|host| !host.trim().is_empty())
        })
        .map_or_else(|| DEFAULT_ENDPOINT.to_string(), |raw| normalize_endpoint(&raw));

    let iterations = options
        .iterations
        .or(bench.iterations)
        .unwrap_or(DEFAULT_ITERATIONS);
    if iterations == 0 {
        bail!(
            "Invalid configuration: 'iterations' must be at least 1\n\n\
             Set it via:\n  \
             - CLI option: mygpt bench --iterations <n>\n  \
             - Config file: [benchmark] iterations in ~/.config/mygpt/config.toml"
        );
    }

    let prompt = options
        .prompt
        .as_ref()
        .or(bench.prompt.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_PROMPT.to_string());

    let chart_path = options
        .output
        .as_ref()
        .or(bench.output.as_ref())
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CHART_PATH));

    Ok(ResolvedConfig {
        model,
        style,
        endpoint,
        benchmark: BenchmarkSettings {
            prompt,
            iterations,
            chart_path,
        },
    })
}

/// Adds an `http://` scheme to bare `host:port` values such as `OLLAMA_HOST=0.0.0.0:11434`.
fn normalize_endpoint(raw: &str) -> String {
    let raw = raw.trim();
    if raw.contains("://") {
        raw.to_string()
    } else {
        format!("http://{raw}")
    }
}

/// Manages loading configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/mygpt/config.toml`
    /// or `~/.config/mygpt/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
