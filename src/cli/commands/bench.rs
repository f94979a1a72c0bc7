use crate::bench::BenchmarkEngine;
use crate::client::OllamaClient;
use crate::config::ResolvedConfig;

/// Runs one benchmark and returns whether at least one iteration succeeded.
pub async fn run_bench(config: &ResolvedConfig) -> bool {
    let client = OllamaClient::new(config.endpoint.clone());
    let settings = &config.benchmark;

    let summary = BenchmarkEngine::new(&client)
        .with_chart_path(Some(settings.chart_path.clone()))
        .run(
            &config.model,
            &settings.prompt,
            settings.iterations,
            config.style,
        )
        .await;

    !summary.results().is_empty()
}
