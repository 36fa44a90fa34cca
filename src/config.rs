use crate::consts::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct GraphConfig {
    /// Game notation file with `{evaluation: ...}` annotations
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Image to write (overwritten if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// TrueType font for the title and axis labels
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Draw the graph without any text
    #[arg(long, default_value_t = false)]
    pub no_labels: bool,

    /// Also write a JSON summary of the evaluations
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            font: None,
            no_labels: false,
            summary: None,
        }
    }
}
