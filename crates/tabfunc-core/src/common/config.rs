//! Per-function settings: lookup tolerance and interpolation policy.
//!
//! Settings are plain `Copy` data so every table can carry its own; a JSON
//! file can provide them for the command-line front end.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_STEP_EPS: f64 = 1.0e-8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InterpolationOrder {
    /// Straight line through the two bracketing points.
    Linear,
    /// Local 4-point polynomial on interior intervals, linear on the first
    /// and last interval.
    #[default]
    Cubic,
}

impl InterpolationOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Cubic => "cubic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Extrapolation {
    /// Queries outside `[min_x, max_x]` fail.
    #[default]
    Forbid,
    /// Queries outside the table extend the boundary segment.
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FunctionSettings {
    pub step_eps: f64,
    pub order: InterpolationOrder,
    pub extrapolation: Extrapolation,
}

impl Default for FunctionSettings {
    fn default() -> Self {
        Self {
            step_eps: DEFAULT_STEP_EPS,
            order: InterpolationOrder::default(),
            extrapolation: Extrapolation::default(),
        }
    }
}

impl FunctionSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_step_eps(self.step_eps)
    }
}

pub(crate) fn validate_step_eps(value: f64) -> Result<(), SettingsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SettingsError::InvalidStepEps { value })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read function settings '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse function settings '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("step tolerance must be finite and >= 0, got {value}")]
    InvalidStepEps { value: f64 },
}

pub fn load_function_settings(
    settings_path: impl AsRef<Path>,
) -> Result<FunctionSettings, SettingsError> {
    let settings_path = settings_path.as_ref();
    let source = fs::read_to_string(settings_path).map_err(|source| SettingsError::Read {
        path: settings_path.to_path_buf(),
        source,
    })?;
    let settings: FunctionSettings =
        serde_json::from_str(&source).map_err(|source| SettingsError::Parse {
            path: settings_path.to_path_buf(),
            source,
        })?;
    settings.validate()?;
    Ok(settings)
}
