use super::TabulatedFunction;
use crate::common::config::{Extrapolation, InterpolationOrder};
use crate::domain::{FunctionError, FunctionResult, Monotonicity};
use crate::numerics::{lagrange_value, lagrange_value_and_slope, solve_bracketed, MAX_STENCIL};
use std::ops::Range;

impl TabulatedFunction {
    /// Interpolated `y` at `x`.
    pub fn get_y(&self, x: f64) -> FunctionResult<f64> {
        self.check_domain("get_y", x)?;
        if self.points.len() == 1 {
            return Ok(self.points[0].y);
        }
        Ok(self.interval_value(self.bracket(x), x))
    }

    /// `dy/dx` at `x`: the analytic slope of the polynomial `get_y` uses
    /// there. At an interior sample the interval starting at that sample is
    /// used.
    pub fn get_yp(&self, x: f64) -> FunctionResult<f64> {
        self.check_domain("get_yp", x)?;
        if self.points.len() == 1 {
            return Ok(0.0);
        }
        Ok(self.interval_value_and_slope(self.bracket(x), x).1)
    }

    /// The `x` at which the interpolant reaches `y`. Needs a strictly
    /// monotonic y column.
    pub fn get_x(&self, y: f64) -> FunctionResult<f64> {
        self.solve_x("get_x", y).map(|(x, _)| x)
    }

    /// Error channel at the `x` solving `y(x) = y`, interpolated linearly
    /// between the bracketing samples.
    pub fn get_y_err(&self, y: f64) -> FunctionResult<f64> {
        let (x, index) = self.solve_x("get_y_err", y)?;
        Ok(self.err_on_interval(index, x))
    }

    /// Error channel interpolated linearly at `x`.
    pub fn err_at(&self, x: f64) -> FunctionResult<f64> {
        self.check_domain("err_at", x)?;
        let index = if self.points.len() == 1 { 0 } else { self.bracket(x) };
        Ok(self.err_on_interval(index, x))
    }

    fn check_domain(&self, operation: &'static str, x: f64) -> FunctionResult<()> {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return Err(FunctionError::out_of_range(
                operation,
                x,
                "function has no points",
            ));
        };
        if !x.is_finite() {
            return Err(FunctionError::out_of_range(
                operation,
                x,
                "query must be finite",
            ));
        }

        let outside = x < first.x || x > last.x;
        let single_point = self.points.len() == 1;
        if outside && (self.settings.extrapolation == Extrapolation::Forbid || single_point) {
            return Err(FunctionError::out_of_range(
                operation,
                x,
                format!("outside [{}, {}]", first.x, last.x),
            ));
        }
        Ok(())
    }

    /// Rows feeding the polynomial of interval `index`: four around interior
    /// intervals for the cubic order, the two bracketing rows otherwise.
    fn stencil(&self, index: usize) -> Range<usize> {
        let interior = index >= 1 && index + 2 < self.points.len();
        if self.settings.order == InterpolationOrder::Cubic && interior {
            (index - 1)..(index + 3)
        } else {
            index..(index + 2)
        }
    }

    pub(super) fn interval_value(&self, index: usize, x: f64) -> f64 {
        let (xs, ys, len) = self.stencil_columns(index);
        lagrange_value(&xs[..len], &ys[..len], x)
    }

    pub(super) fn interval_value_and_slope(&self, index: usize, x: f64) -> (f64, f64) {
        let (xs, ys, len) = self.stencil_columns(index);
        lagrange_value_and_slope(&xs[..len], &ys[..len], x)
    }

    fn stencil_columns(&self, index: usize) -> ([f64; MAX_STENCIL], [f64; MAX_STENCIL], usize) {
        let nodes = &self.points[self.stencil(index)];
        let mut xs = [0.0; MAX_STENCIL];
        let mut ys = [0.0; MAX_STENCIL];
        for (slot, point) in nodes.iter().enumerate() {
            xs[slot] = point.x;
            ys[slot] = point.y;
        }
        (xs, ys, nodes.len())
    }

    fn err_on_interval(&self, index: usize, x: f64) -> f64 {
        let lower = self.points[index];
        let Some(upper) = self.points.get(index + 1).copied() else {
            return lower.err;
        };
        if x == lower.x {
            return lower.err;
        }
        if x == upper.x {
            return upper.err;
        }
        let fraction = (x - lower.x) / (upper.x - lower.x);
        lower.err + (upper.err - lower.err) * fraction
    }

    /// Returns the solving `x` and the interval index it lies in.
    fn solve_x(&self, operation: &'static str, y: f64) -> FunctionResult<(f64, usize)> {
        let Some((min_y, max_y)) = self.y_range else {
            return Err(FunctionError::out_of_range(
                operation,
                y,
                "function has no points",
            ));
        };
        if !y.is_finite() {
            return Err(FunctionError::out_of_range(
                operation,
                y,
                "query must be finite",
            ));
        }
        if y < min_y || y > max_y {
            return Err(FunctionError::not_found(
                operation,
                y,
                format!("y range is [{min_y}, {max_y}]"),
            ));
        }
        if self.points.len() == 1 {
            return Ok((self.points[0].x, 0));
        }

        let increasing = match self.monotonicity {
            Monotonicity::Increasing => true,
            Monotonicity::Decreasing => false,
            Monotonicity::NotMonotonic => {
                return Err(FunctionError::out_of_range(
                    operation,
                    y,
                    "y values are not strictly monotonic, the inverse is ambiguous",
                ));
            }
        };

        let last = self.points.len() - 2;
        let index = self
            .points
            .partition_point(|point| if increasing { point.y <= y } else { point.y >= y })
            .saturating_sub(1)
            .min(last);
        let (lower, upper) = (self.points[index], self.points[index + 1]);
        if y == lower.y {
            return Ok((lower.x, index));
        }
        if y == upper.y {
            return Ok((upper.x, index));
        }

        solve_bracketed(lower.x, upper.x, y, |x| self.interval_value_and_slope(index, x))
            .map(|solve| (solve.root, index))
            .ok_or_else(|| {
                FunctionError::not_found(
                    operation,
                    y,
                    format!("no root inside [{}, {}]", lower.x, upper.x),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::common::config::{Extrapolation, FunctionSettings, InterpolationOrder};
    use crate::domain::FunctionErrorKind;
    use crate::function::TabulatedFunction;

    fn table(
        xs: &[f64],
        f: impl Fn(f64) -> f64,
        settings: FunctionSettings,
    ) -> TabulatedFunction {
        let ys: Vec<f64> = xs.iter().map(|x| f(*x)).collect();
        TabulatedFunction::from_lists_with_settings(xs, &ys, None, settings).expect("lists")
    }

    fn linear_settings() -> FunctionSettings {
        FunctionSettings {
            order: InterpolationOrder::Linear,
            ..FunctionSettings::default()
        }
    }

    #[test]
    fn value_only_path_matches_value_and_slope_path() {
        let xs: Vec<f64> = (0..8)
            .map(|index| 0.3 * index as f64 + 0.01 * (index * index) as f64)
            .collect();
        for settings in [FunctionSettings::default(), linear_settings()] {
            let function = table(&xs, |x| x.sin() * x.exp(), settings);
            for index in 0..xs.len() - 1 {
                for t in [0.0, 0.2, 0.5, 0.9] {
                    let x = xs[index] + t * (xs[index + 1] - xs[index]);
                    let (value, _) = function.interval_value_and_slope(index, x);
                    assert_eq!(function.interval_value(index, x), value);
                }
            }
        }
    }

    #[test]
    fn three_point_line_interpolates_linearly() {
        let mut function = TabulatedFunction::new();
        function.add(0.0, 0.0, 0.0).expect("add");
        function.add(1.0, 2.0, 0.0).expect("add");
        function.add(2.0, 4.0, 0.0).expect("add");

        assert!((function.get_y(0.5).expect("y") - 1.0).abs() < 1.0e-15);
        assert_eq!(function.min_x().expect("min"), 0.0);
        assert_eq!(function.max_x().expect("max"), 2.0);
        assert_eq!(function.max_y().expect("max"), 4.0);
        assert!((function.get_yp(1.5).expect("yp") - 2.0).abs() < 1.0e-15);
    }

    #[test]
    fn empty_function_queries_are_out_of_range() {
        let function = TabulatedFunction::new();
        assert_eq!(function.size(), 0);
        for error in [
            function.get_y(0.0).expect_err("get_y"),
            function.get_yp(0.0).expect_err("get_yp"),
            function.get_x(0.0).expect_err("get_x"),
            function.get_y_err(0.0).expect_err("get_y_err"),
            function.err_at(0.0).expect_err("err_at"),
        ] {
            assert_eq!(error.kind(), FunctionErrorKind::OutOfRange);
        }
    }

    #[test]
    fn interpolation_passes_through_every_sample() {
        let xs = [0.0, 0.3, 0.7, 1.2, 1.5, 2.6, 3.0];
        for settings in [FunctionSettings::default(), linear_settings()] {
            let function = table(&xs, |x| (2.0 * x).sin() + x * x, settings);
            for point in function.points() {
                assert_eq!(function.get_y(point.x).expect("y"), point.y);
            }
        }
    }

    #[test]
    fn cubic_order_reproduces_cubics_on_interior_intervals() {
        let xs = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5];
        let cubic = |x: f64| x * x * x - 2.0 * x + 1.0;
        let function = table(&xs, cubic, FunctionSettings::default());

        for x in [0.6, 1.1, 1.7] {
            assert!((function.get_y(x).expect("y") - cubic(x)).abs() < 1.0e-12);
            let slope = 3.0 * x * x - 2.0;
            assert!((function.get_yp(x).expect("yp") - slope).abs() < 1.0e-11);
        }
    }

    #[test]
    fn boundary_intervals_degrade_to_linear() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let function = table(&xs, |x| x * x, FunctionSettings::default());

        assert!((function.get_y(0.5).expect("y") - 0.5).abs() < 1.0e-15);
        assert!((function.get_yp(0.5).expect("yp") - 1.0).abs() < 1.0e-15);
        assert!((function.get_y(3.5).expect("y") - 12.5).abs() < 1.0e-12);
        assert!((function.get_yp(3.5).expect("yp") - 7.0).abs() < 1.0e-12);
    }

    #[test]
    fn slope_matches_a_difference_quotient_of_get_y() {
        let xs: Vec<f64> = (0..20).map(|index| index as f64 * 0.25).collect();
        let function = table(&xs, |x| x.cos(), FunctionSettings::default());
        let h = 1.0e-6;
        for x in [0.6, 1.9, 3.3] {
            let quotient = (function.get_y(x + h).expect("y") - function.get_y(x - h).expect("y"))
                / (2.0 * h);
            assert!((function.get_yp(x).expect("yp") - quotient).abs() < 1.0e-6);
        }
    }

    #[test]
    fn const_step_and_search_lookups_evaluate_identically() {
        let xs: Vec<f64> = (0..40).map(|index| index as f64 * 0.05).collect();
        let mut function = table(&xs, |x| x.exp(), FunctionSettings::default());
        assert!(function.is_step_const());
        let queries: Vec<f64> = (0..195).map(|index| index as f64 * 0.01).collect();
        let fast: Vec<(f64, f64)> = queries
            .iter()
            .map(|x| (function.get_y(*x).expect("y"), function.get_yp(*x).expect("yp")))
            .collect();
        function.set_const_step(false);
        let searched: Vec<(f64, f64)> = queries
            .iter()
            .map(|x| (function.get_y(*x).expect("y"), function.get_yp(*x).expect("yp")))
            .collect();
        assert_eq!(fast, searched);
    }

    #[test]
    fn queries_outside_the_table_fail_unless_extrapolation_is_enabled() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let function = table(&xs, |x| 3.0 * x + 1.0, FunctionSettings::default());
        let error = function.get_y(3.5).expect_err("above range");
        assert_eq!(error.kind(), FunctionErrorKind::OutOfRange);
        assert_eq!(error.to_string(), "get_y(3.5) is out of range: outside [0, 3]");
        assert_eq!(
            function.get_yp(-0.1).expect_err("below").kind(),
            FunctionErrorKind::OutOfRange
        );
        assert_eq!(
            function.get_y(f64::NAN).expect_err("nan").kind(),
            FunctionErrorKind::OutOfRange
        );

        let extrapolating = table(
            &xs,
            |x| 3.0 * x + 1.0,
            FunctionSettings {
                extrapolation: Extrapolation::Linear,
                ..FunctionSettings::default()
            },
        );
        assert!((extrapolating.get_y(3.5).expect("y") - 11.5).abs() < 1.0e-12);
        assert!((extrapolating.get_y(-1.0).expect("y") + 2.0).abs() < 1.0e-12);
        assert!((extrapolating.get_yp(10.0).expect("yp") - 3.0).abs() < 1.0e-12);
    }

    #[test]
    fn single_point_answers_only_at_its_own_x() {
        let mut function = TabulatedFunction::new();
        function.add(2.0, 5.0, 0.5).expect("add");
        assert_eq!(function.get_y(2.0).expect("y"), 5.0);
        assert_eq!(function.get_yp(2.0).expect("yp"), 0.0);
        assert_eq!(function.get_x(5.0).expect("x"), 2.0);
        assert_eq!(function.get_y_err(5.0).expect("err"), 0.5);
        assert_eq!(
            function.get_y(2.5).expect_err("off point").kind(),
            FunctionErrorKind::OutOfRange
        );
        assert_eq!(
            function.get_x(4.0).expect_err("off value").kind(),
            FunctionErrorKind::NotFound
        );
    }

    #[test]
    fn get_x_inverts_increasing_and_decreasing_tables() {
        let xs: Vec<f64> = (0..12).map(|index| index as f64 * 0.2).collect();
        let increasing = table(&xs, |x| x * x * x + x, FunctionSettings::default());
        let decreasing = table(&xs, |x| (-x).exp(), FunctionSettings::default());

        for x in [0.1, 0.55, 1.3, 2.1] {
            let y = increasing.get_y(x).expect("y");
            assert!((increasing.get_x(y).expect("x") - x).abs() < 1.0e-12);
            let y = decreasing.get_y(x).expect("y");
            assert!((decreasing.get_x(y).expect("x") - x).abs() < 1.0e-12);
        }
        for point in decreasing.points() {
            assert_eq!(decreasing.get_x(point.y).expect("x"), point.x);
        }
    }

    #[test]
    fn get_x_reports_unreachable_and_ambiguous_targets() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let monotonic = table(&xs, |x| 2.0 * x, FunctionSettings::default());
        let error = monotonic.get_x(6.5).expect_err("above range");
        assert_eq!(error.kind(), FunctionErrorKind::NotFound);
        assert!(error.to_string().starts_with("get_x(6.5) has no solution"));

        let parabola = table(&xs, |x| (x - 1.5) * (x - 1.5), FunctionSettings::default());
        let error = parabola.get_x(0.5).expect_err("ambiguous");
        assert_eq!(error.kind(), FunctionErrorKind::OutOfRange);
        assert_eq!(
            parabola.get_y_err(0.5).expect_err("ambiguous").kind(),
            FunctionErrorKind::OutOfRange
        );
        assert_eq!(
            parabola.get_x(-1.0).expect_err("unreachable").kind(),
            FunctionErrorKind::NotFound
        );
    }

    #[test]
    fn error_channel_follows_the_solved_x() {
        let function = TabulatedFunction::from_lists(
            &[0.0, 1.0, 2.0],
            &[0.0, 10.0, 20.0],
            Some(&[0.1, 0.3, 0.7]),
        )
        .expect("lists");
        assert!((function.get_y_err(5.0).expect("err") - 0.2).abs() < 1.0e-15);
        assert!((function.get_y_err(15.0).expect("err") - 0.5).abs() < 1.0e-15);
        assert_eq!(function.get_y_err(20.0).expect("err"), 0.7);
        assert!((function.err_at(0.25).expect("err") - 0.15).abs() < 1.0e-15);
        assert_eq!(function.err_at(1.0).expect("err"), 0.3);
        assert_eq!(
            function.err_at(2.5).expect_err("outside").kind(),
            FunctionErrorKind::OutOfRange
        );
    }
}
