//! Uniform-step detection and bracketing-interval lookup.
//!
//! With a uniform step the interval holding `x` is found by direct index
//! arithmetic; otherwise by binary search. Both paths return the same
//! interval: the largest `i` with `x_i <= x`, clamped to `[0, n - 2]`.

use super::TabulatedFunction;
use crate::common::config::validate_step_eps;
use crate::domain::{FunctionError, FunctionResult, Point};
use crate::numerics::relative_difference;

impl TabulatedFunction {
    pub fn is_step_const(&self) -> bool {
        self.const_step
    }

    /// The uniform spacing, when the const-step flag is set.
    pub fn step(&self) -> Option<f64> {
        self.const_step.then_some(self.step)
    }

    pub fn step_eps(&self) -> f64 {
        self.settings.step_eps
    }

    /// Sets the relative step tolerance. Takes effect at the next mutation or
    /// explicit `set_const_step(true)`.
    pub fn set_step_eps(&mut self, eps: f64) -> FunctionResult<()> {
        validate_step_eps(eps)
            .map_err(|error| FunctionError::value("set_step_eps", error.to_string()))?;
        self.settings.step_eps = eps;
        Ok(())
    }

    /// Enabling verifies every gap against the tolerance and reports whether
    /// the flag could be set. Disabling forces binary search until the next
    /// mutation.
    pub fn set_const_step(&mut self, enable: bool) -> bool {
        if enable {
            self.detect_const_step();
        } else {
            self.const_step = false;
        }
        self.const_step
    }

    pub(super) fn detect_const_step(&mut self) {
        let detected = uniform_step(&self.points, self.settings.step_eps);
        let was_const = self.const_step;
        self.const_step = detected.is_some();
        self.step = detected.unwrap_or(0.0);
        if was_const != self.const_step {
            tracing::debug!(
                const_step = self.const_step,
                step = self.step,
                points = self.points.len(),
                "const-step detection changed"
            );
        }
    }

    /// Index `i` of the interval `[x_i, x_{i+1}]` used for `x`. Requires at
    /// least two points; queries outside the table map to the boundary
    /// intervals.
    pub(super) fn bracket(&self, x: f64) -> usize {
        let points = &self.points;
        let last = points.len() - 2;
        if !self.const_step {
            return points
                .partition_point(|point| point.x <= x)
                .saturating_sub(1)
                .min(last);
        }

        let offset = ((x - points[0].x) / self.step).floor();
        let mut index = if offset <= 0.0 {
            0
        } else if offset >= last as f64 {
            last
        } else {
            offset as usize
        };
        while index > 0 && x < points[index].x {
            index -= 1;
        }
        while index < last && x >= points[index + 1].x {
            index += 1;
        }
        index
    }
}

fn uniform_step(points: &[Point], step_eps: f64) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }

    // Any two gaps agree within `step_eps`.
    let (min_gap, max_gap) = points.windows(2).map(|pair| pair[1].x - pair[0].x).fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min_gap, max_gap), gap| (min_gap.min(gap), max_gap.max(gap)),
    );
    if relative_difference(max_gap, min_gap, f64::MIN_POSITIVE) > step_eps {
        return None;
    }

    let first = points[0].x;
    let last = points[points.len() - 1].x;
    Some((last - first) / ((points.len() - 1) as f64))
}
