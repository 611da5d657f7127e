//! Tabulated one-dimensional function `y(x)` with a per-point error channel.
//!
//! Points are kept strictly ascending in `x`. Derived state (uniform-step
//! detection, y extrema, y monotonicity) is refreshed after every mutation so
//! that `&self` queries never rescan the table.

mod interpolate;
mod inverse;
mod io;
mod normalize;
mod step;
mod store;

pub use inverse::invert;

use crate::common::config::FunctionSettings;
use crate::domain::{Monotonicity, Point};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Default)]
pub struct TabulatedFunction {
    points: Vec<Point>,
    settings: FunctionSettings,
    const_step: bool,
    step: f64,
    y_range: Option<(f64, f64)>,
    monotonicity: Monotonicity,
}

impl TabulatedFunction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: FunctionSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> FunctionSettings {
        self.settings
    }

    /// Replaces the interpolation settings. The step tolerance inside
    /// `settings` is taken as-is and, like `set_step_eps`, only applies at the
    /// next verification.
    pub fn set_settings(&mut self, settings: FunctionSettings) {
        self.settings = settings;
    }

    pub fn monotonicity(&self) -> Monotonicity {
        self.monotonicity
    }

    /// Recomputes every cache that depends on the point set.
    fn refresh(&mut self) {
        self.y_range = self.points.iter().fold(None, |range, point| match range {
            None => Some((point.y, point.y)),
            Some((min, max)) => Some((min.min(point.y), max.max(point.y))),
        });
        self.monotonicity = Monotonicity::of(&self.points);
        self.detect_const_step();
    }
}

impl Display for TabulatedFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for point in &self.points {
            writeln!(f, "{}", io::format_point(point))?;
        }
        Ok(())
    }
}
