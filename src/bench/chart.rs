//! Bar charts of a benchmark run, rendered as SVG.

use anyhow::{Context, Result, ensure};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

use super::{BenchmarkError, BenchmarkSummary, IterationResult};
use crate::fs::atomic_write;

/// Chart location used when none is configured, relative to the working directory.
pub const DEFAULT_CHART_PATH: &str = "ollama_speed_test.svg";

const CHART_SIZE: (u32, u32) = (1500, 500);

struct Panel {
    title: &'static str,
    y_desc: &'static str,
    color: RGBColor,
    value: fn(&IterationResult) -> f64,
}

const PANELS: [Panel; 3] = [
    Panel {
        title: "Tokens per Second",
        y_desc: "Tokens/sec",
        color: BLUE,
        value: IterationResult::tokens_per_second,
    },
    Panel {
        title: "Iteration Time",
        y_desc: "Time (seconds)",
        color: GREEN,
        value: IterationResult::elapsed_secs,
    },
    Panel {
        title: "Tokens Generated",
        y_desc: "Number of Tokens",
        color: RED,
        value: token_count,
    },
];

fn token_count(result: &IterationResult) -> f64 {
    result.tokens() as f64
}

/// Renders tokens/sec, elapsed time and token count per iteration side by side.
pub fn render_svg(summary: &BenchmarkSummary) -> Result<String> {
    ensure!(
        !summary.results().is_empty(),
        BenchmarkError::NoSuccessfulIterations
    );

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        let root = root.titled(
            &format!("Ollama {} Speed Test", summary.model()),
            ("sans-serif", 24),
        )?;

        for (area, panel) in root.split_evenly((1, 3)).iter().zip(PANELS.iter()) {
            draw_panel(area, panel, summary.results())?;
        }
        root.present()?;
    }
    Ok(svg)
}

/// Renders the chart and replaces whatever was at `path`.
pub fn write_chart(summary: &BenchmarkSummary, path: &Path) -> Result<()> {
    let svg = render_svg(summary)?;
    atomic_write(path, &svg)
        .with_context(|| format!("Failed to write chart: {}", path.display()))
}

fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    panel: &Panel,
    results: &[IterationResult],
) -> Result<()> {
    let values: Vec<f64> = results.iter().map(panel.value).collect();
    let peak = values.iter().copied().fold(0.0_f64, f64::max);
    let y_max = if peak > 0.0 { peak * 1.1 } else { 1.0 };
    let last = results.len() as u32;

    let mut chart = ChartBuilder::on(area)
        .caption(panel.title, ("sans-serif", 16))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d((1u32..last + 1).into_segmented(), 0.0_f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(BLACK.mix(0.3))
        .x_desc("Iteration")
        .y_desc(panel.y_desc)
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(panel.color.mix(0.7).filled())
            .margin(10)
            .data(
                results
                    .iter()
                    .zip(values.iter())
                    .map(|(r, &v)| (r.iteration() as u32, v)),
            ),
    )?;

    Ok(())
}
