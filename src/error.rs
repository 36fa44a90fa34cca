use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Could not read game file '{}': {source}", path.display())]
    Input {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Render Error: {0}")]
    Render(String),

    #[error("Font Error: {0}")]
    Font(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
