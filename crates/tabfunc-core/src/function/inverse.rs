use super::TabulatedFunction;
use crate::common::config::FunctionSettings;
use crate::domain::{FunctionError, FunctionResult, Monotonicity, Point};

/// Builds the numerical inverse `x(y)` of a strictly monotonic table by
/// swapping each sample's coordinates. The error channel travels with its
/// sample; settings are inherited from `source`.
pub fn invert(source: &TabulatedFunction) -> FunctionResult<TabulatedFunction> {
    invert_with_settings(source, source.settings)
}

impl TabulatedFunction {
    /// Replaces this function with the inverse of `other`, keeping this
    /// function's settings. Leaves `self` untouched on failure.
    pub fn set_inverse(&mut self, other: &TabulatedFunction) -> FunctionResult<()> {
        *self = invert_with_settings(other, self.settings)?;
        Ok(())
    }
}

fn invert_with_settings(
    source: &TabulatedFunction,
    settings: FunctionSettings,
) -> FunctionResult<TabulatedFunction> {
    if source.points.len() < 2 {
        return Err(FunctionError::degenerate(
            "invert",
            format!(
                "inversion needs at least two points, have {}",
                source.points.len()
            ),
        ));
    }

    let mut points: Vec<Point> = source
        .points
        .iter()
        .map(|point| Point::new(point.y, point.x, point.err))
        .collect();
    match source.monotonicity {
        Monotonicity::Increasing => {}
        Monotonicity::Decreasing => points.reverse(),
        Monotonicity::NotMonotonic => {
            return Err(FunctionError::degenerate(
                "invert",
                "y values are not strictly monotonic and finite",
            ));
        }
    }

    let mut inverse = TabulatedFunction::with_settings(settings);
    inverse.points = points;
    inverse.refresh();
    tracing::debug!(
        points = inverse.points.len(),
        direction = %source.monotonicity,
        "built inverse function"
    );
    Ok(inverse)
}
