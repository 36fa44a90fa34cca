use crate::consts::EVALUATION_PATTERN;
use crate::error::{GraphError, GraphResult};
use crate::series::EvalSeries;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

static EVALUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EVALUATION_PATTERN).expect("evaluation pattern is valid"));

/// Scans notation text for `{evaluation: <signed decimal>}` annotations.
/// Anything that does not match the pattern exactly is skipped.
pub fn parse_evaluations(text: &str) -> EvalSeries {
    let values = EVALUATION_RE
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse::<f64>().ok())
        .collect();
    EvalSeries::new(values)
}

pub fn load_evaluations<P: AsRef<Path>>(path: P) -> GraphResult<EvalSeries> {
    let path = path.as_ref();
    info!("📂 Loading game: {}", path.display());

    let text = fs::read_to_string(path).map_err(|source| GraphError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("   Scanned {} bytes", text.len());

    let series = parse_evaluations(&text);
    if series.is_empty() {
        warn!("⚠️  No evaluation annotations found in '{}'", path.display());
    } else {
        info!("   -> Found {} evaluated plies", series.len());
    }
    Ok(series)
}
