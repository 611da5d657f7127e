pub mod errors;

pub use errors::{FunctionError, FunctionErrorKind, FunctionResult};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One tabulated sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub err: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64, err: f64) -> Self {
        Self { x, y, err }
    }

    pub const fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub const fn xy_err(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.err)
    }
}

/// Parallel column export of a table.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct XyErrLists {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub err: Vec<f64>,
}

impl XyErrLists {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Monotonicity {
    Increasing,
    Decreasing,
    #[default]
    NotMonotonic,
}

impl Monotonicity {
    /// Strict monotonicity of the y column. Fewer than two points, or any
    /// non-finite y, is never monotonic.
    pub fn of(points: &[Point]) -> Self {
        if points.len() < 2 || points.iter().any(|point| !point.y.is_finite()) {
            return Self::NotMonotonic;
        }

        if points.windows(2).all(|pair| pair[0].y < pair[1].y) {
            Self::Increasing
        } else if points.windows(2).all(|pair| pair[0].y > pair[1].y) {
            Self::Decreasing
        } else {
            Self::NotMonotonic
        }
    }

    pub const fn is_strict(self) -> bool {
        !matches!(self, Self::NotMonotonic)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::NotMonotonic => "not monotonic",
        }
    }
}

impl Display for Monotonicity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}
