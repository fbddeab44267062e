//! CLI command implementations

pub mod curve;
pub mod histogram;
pub mod pattern;
pub mod probe;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use hdrscope_core::{RgbaRaster, ViewSettings};

use crate::ViewArgs;

/// Loads view settings from a YAML file, or defaults when none is given.
pub fn load_settings(path: Option<&Path>) -> Result<ViewSettings> {
    let Some(path) = path else {
        return Ok(ViewSettings::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let settings = parse_settings(&text)
        .with_context(|| format!("Invalid config: {}", path.display()))?;
    debug!(?settings, path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Parses a YAML settings document. Missing keys keep their defaults.
pub fn parse_settings(text: &str) -> Result<ViewSettings> {
    if text.trim().is_empty() {
        return Ok(ViewSettings::default());
    }
    let settings: ViewSettings = serde_yaml::from_str(text)?;
    // Reject unusable gamma up front rather than on the first HLG sample
    settings.resolved_gamma()?;
    Ok(settings)
}

/// Applies command-line overrides on top of loaded settings.
pub fn apply_overrides(mut settings: ViewSettings, view: &ViewArgs) -> Result<ViewSettings> {
    if let Some(peak) = view.peak {
        settings.peak = peak;
    }
    if let Some(mode) = view.mode {
        settings.mode = mode;
    }
    if let Some(gamma) = view.gamma {
        settings.system_gamma = gamma;
    }
    if let Some(scale) = view.hlg_scale {
        settings.hlg_scale = scale.into();
    }
    settings.resolved_gamma()?;
    Ok(settings)
}

/// Load a PNG from path
pub fn load_raster(path: &Path) -> Result<RgbaRaster> {
    hdrscope_io::png::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save a PNG to path
pub fn save_raster(path: &Path, raster: &RgbaRaster) -> Result<()> {
    hdrscope_io::png::write(path, raster)
        .with_context(|| format!("Failed to save: {}", path.display()))
}
