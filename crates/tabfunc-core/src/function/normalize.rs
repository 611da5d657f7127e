use super::TabulatedFunction;
use crate::domain::{FunctionError, FunctionResult};
use crate::numerics::{gauss_legendre2, stable_sum};

impl TabulatedFunction {
    /// Definite integral of the interpolant over `[min_x, max_x]`.
    ///
    /// Each interval is integrated with the two-point Gauss-Legendre rule,
    /// which is exact for the linear and cubic segment polynomials.
    pub fn integral(&self) -> FunctionResult<f64> {
        self.integrate("integral")
    }

    /// Scales `y` (and `err` by the magnitude of the same factor) so the
    /// integral becomes one. Returns the integral before scaling.
    pub fn normalize(&mut self) -> FunctionResult<f64> {
        let integral = self.integrate("normalize")?;
        if integral == 0.0 || !integral.is_finite() {
            return Err(FunctionError::degenerate(
                "normalize",
                format!("integral is {integral}, cannot scale to 1"),
            ));
        }

        let err_scale = integral.abs();
        for point in &mut self.points {
            point.y /= integral;
            point.err /= err_scale;
        }
        self.refresh();
        tracing::debug!(integral, points = self.points.len(), "normalized function");
        Ok(integral)
    }

    fn integrate(&self, operation: &'static str) -> FunctionResult<f64> {
        if self.points.len() < 2 {
            return Err(FunctionError::degenerate(
                operation,
                format!(
                    "integration needs at least two points, have {}",
                    self.points.len()
                ),
            ));
        }

        let pieces: Vec<f64> = self
            .points
            .windows(2)
            .enumerate()
            .map(|(index, pair)| {
                gauss_legendre2(pair[0].x, pair[1].x, |x| self.interval_value(index, x))
            })
            .collect();
        Ok(stable_sum(&pieces))
    }
}
