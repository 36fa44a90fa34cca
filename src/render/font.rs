use crate::consts::{FONT_CANDIDATES, LABEL_FONT_FAMILY};
use crate::error::{GraphError, GraphResult};
use plotters::style::{register_font, FontStyle};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Registers a TrueType font under the label family so captions, axis
/// descriptions and tick text can be drawn.
///
/// An explicit path must load. Without one, the first readable candidate is
/// used; if none exists the chart is drawn without text and `Ok(false)` is
/// returned.
pub fn install_label_font(explicit: Option<&Path>) -> GraphResult<bool> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match find_system_font() {
            Some(p) => p,
            None => {
                warn!("⚠️  No TrueType font found. Drawing the graph without labels.");
                return Ok(false);
            }
        },
    };

    let bytes = fs::read(&path)
        .map_err(|e| GraphError::Font(format!("could not read '{}': {}", path.display(), e)))?;

    // plotters keeps a reference to the font data for the rest of the process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());

    register_font(LABEL_FONT_FAMILY, FontStyle::Normal, bytes).map_err(|_| {
        GraphError::Font(format!("'{}' is not a usable TrueType font", path.display()))
    })?;

    info!("🔤 Label font: {}", path.display());
    Ok(true)
}

fn find_system_font() -> Option<PathBuf> {
    FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}
