#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! These tests verify that CLI options take priority over config file settings.
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults
//! 3. Built-in defaults

use std::path::PathBuf;

use mygpt::config::{
    BenchmarkConfig, ConfigFile, GeneralConfig, ResolveOptions, resolve_config,
};
use mygpt::ui::GlyphStyle;

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        mygpt: GeneralConfig {
            model: Some("config_model".to_string()),
            style: Some(GlyphStyle::Star),
            endpoint: Some("http://config.local:11434".to_string()),
        },
        benchmark: BenchmarkConfig {
            prompt: Some("config prompt".to_string()),
            iterations: Some(9),
            output: Some(PathBuf::from("config.svg")),
        },
    }
}

#[test]
fn test_cli_model_overrides_config_model() {
    let options = ResolveOptions {
        model: Some("cli_model".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.model, "cli_model");
    assert_eq!(resolved.style, GlyphStyle::Star);
}

#[test]
fn test_cli_style_overrides_config_style() {
    let options = ResolveOptions {
        style: Some(GlyphStyle::Arrow),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.style, GlyphStyle::Arrow);
    assert_eq!(resolved.model, "config_model");
}

#[test]
fn test_config_benchmark_settings_used_without_cli() {
    let resolved =
        resolve_config(&ResolveOptions::default(), &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.benchmark.prompt, "config prompt");
    assert_eq!(resolved.benchmark.iterations, 9);
    assert_eq!(resolved.benchmark.chart_path, PathBuf::from("config.svg"));
}

#[test]
fn test_cli_benchmark_settings_override_config() {
    let options = ResolveOptions {
        prompt: Some("cli prompt".to_string()),
        iterations: Some(2),
        output: Some(PathBuf::from("cli.svg")),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.benchmark.prompt, "cli prompt");
    assert_eq!(resolved.benchmark.iterations, 2);
    assert_eq!(resolved.benchmark.chart_path, PathBuf::from("cli.svg"));
}

#[test]
fn test_cli_endpoint_overrides_config_endpoint() {
    let options = ResolveOptions {
        endpoint: Some("http://cli.local:11434".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.endpoint, "http://cli.local:11434");
}
