use crate::config::GraphConfig;
use crate::error::GraphResult;
use crate::extract::load_evaluations;
use crate::render::font::install_label_font;
use crate::render::GraphRenderer;
use crate::summary::EvalSummary;
use tracing::info;

/// Service: read the game, draw the graph, and summarize the evaluations.
pub fn generate_graph(config: &GraphConfig) -> GraphResult<EvalSummary> {
    let series = load_evaluations(&config.input)?;

    let labels = if config.no_labels {
        false
    } else {
        install_label_font(config.font.as_deref())?
    };

    GraphRenderer::new(labels).render_to_file(&series, &config.output)?;
    info!("✅ Graph saved to {}", config.output.display());

    let summary = EvalSummary::from_series(&series);
    if let Some(path) = &config.summary {
        summary.write_json(path)?;
    }
    Ok(summary)
}
