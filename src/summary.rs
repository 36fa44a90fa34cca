use crate::error::GraphResult;
use crate::series::EvalSeries;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum::Display;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    White,
    Black,
    Even,
}

impl Side {
    pub fn favored_by(eval: f64) -> Self {
        if eval > 0.0 {
            Self::White
        } else if eval < 0.0 {
            Self::Black
        } else {
            Self::Even
        }
    }
}

/// A single ply picked out of the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlyEval {
    pub ply: usize,
    pub move_number: usize,
    pub eval: f64,
}

impl PlyEval {
    fn at(ply: usize, eval: f64) -> Self {
        Self {
            ply,
            move_number: 1 + ply / 2,
            eval,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalSummary {
    pub plies: usize,
    pub moves: usize,
    pub final_eval: Option<f64>,
    pub peak: Option<PlyEval>,
    pub trough: Option<PlyEval>,
    pub lead_changes: usize,
    pub leader: Side,
}

impl EvalSummary {
    pub fn from_series(series: &EvalSeries) -> Self {
        let values = series.values();

        // Ties keep the earliest ply.
        let mut peak: Option<PlyEval> = None;
        let mut trough: Option<PlyEval> = None;
        for (ply, &eval) in values.iter().enumerate() {
            if peak.is_none_or(|p| eval > p.eval) {
                peak = Some(PlyEval::at(ply, eval));
            }
            if trough.is_none_or(|t| eval < t.eval) {
                trough = Some(PlyEval::at(ply, eval));
            }
        }

        let lead_changes = series
            .negative_mask()
            .windows(2)
            .filter(|w| w[0] != w[1])
            .count();

        let final_eval = values.last().copied();

        Self {
            plies: values.len(),
            moves: values.len().div_ceil(2),
            final_eval,
            peak,
            trough,
            lead_changes,
            leader: final_eval.map(Side::favored_by).unwrap_or(Side::Even),
        }
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> GraphResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("📝 Summary written to {}", path.display());
        Ok(())
    }
}
