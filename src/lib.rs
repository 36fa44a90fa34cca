pub mod api;
pub mod config;
pub mod consts;
pub mod error;
pub mod extract;
pub mod render;
pub mod series;
pub mod summary;
// reports is a binary module (see main.rs).

pub use error::{GraphError, GraphResult};
pub use series::EvalSeries;
