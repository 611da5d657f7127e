use super::TabulatedFunction;
use crate::common::config::FunctionSettings;
use crate::domain::{FunctionError, FunctionResult, Point, XyErrLists};
use crate::numerics::deterministic_argsort;
use std::cmp::Ordering;

impl TabulatedFunction {
    pub fn from_lists(x: &[f64], y: &[f64], err: Option<&[f64]>) -> FunctionResult<Self> {
        Self::from_lists_with_settings(x, y, err, FunctionSettings::default())
    }

    pub fn from_lists_with_settings(
        x: &[f64],
        y: &[f64],
        err: Option<&[f64]>,
        settings: FunctionSettings,
    ) -> FunctionResult<Self> {
        let mut function = Self::with_settings(settings);
        function.init_from_lists(x, y, err)?;
        Ok(function)
    }

    /// Inserts a point keeping `x` ascending. A point whose `x` compares
    /// equal to an existing one replaces it.
    pub fn add(&mut self, x: f64, y: f64, err: f64) -> FunctionResult<()> {
        if !x.is_finite() {
            return Err(FunctionError::value(
                "add",
                format!("x must be finite, got {x}"),
            ));
        }

        let point = Point::new(x, y, err);
        match self
            .points
            .binary_search_by(|probe| compare_x(probe.x, point.x))
        {
            Ok(index) => {
                tracing::debug!(x, index, "replacing point with duplicate x");
                self.points[index] = point;
            }
            Err(index) => self.points.insert(index, point),
        }
        self.refresh();
        Ok(())
    }

    pub fn add_xy(&mut self, x: f64, y: f64) -> FunctionResult<()> {
        self.add(x, y, 0.0)
    }

    pub fn remove_point(&mut self, index: usize) -> FunctionResult<Point> {
        self.check_index("remove_point", index)?;
        let removed = self.points.remove(index);
        self.refresh();
        Ok(removed)
    }

    pub fn update_point(&mut self, index: usize, y: f64, err: f64) -> FunctionResult<()> {
        self.check_index("update_point", index)?;
        let point = &mut self.points[index];
        point.y = y;
        point.err = err;
        self.refresh();
        Ok(())
    }

    /// Removes every point but keeps the allocation for reuse.
    pub fn clean(&mut self) {
        self.points.clear();
        self.refresh();
    }

    /// Removes every point and releases the backing storage.
    pub fn clean_memory(&mut self) {
        self.points = Vec::new();
        self.refresh();
    }

    pub fn capacity(&self) -> usize {
        self.points.capacity()
    }

    pub fn xy_err_lists(&self) -> XyErrLists {
        XyErrLists {
            x: self.points.iter().map(|point| point.x).collect(),
            y: self.points.iter().map(|point| point.y).collect(),
            err: self.points.iter().map(|point| point.err).collect(),
        }
    }

    /// Replaces all points with the given columns. Input order is free; rows
    /// are sorted by `x` and a later row wins over an earlier one with the
    /// same `x`. On error the function is left untouched.
    pub fn init_from_lists(
        &mut self,
        x: &[f64],
        y: &[f64],
        err: Option<&[f64]>,
    ) -> FunctionResult<()> {
        if x.len() != y.len() {
            return Err(FunctionError::value(
                "init_from_lists",
                format!("len(x)={} != len(y)={}", x.len(), y.len()),
            ));
        }
        if let Some(err_len) = err.map(<[f64]>::len).filter(|len| *len != x.len()) {
            return Err(FunctionError::value(
                "init_from_lists",
                format!("len(err)={} != len(x)={}", err_len, x.len()),
            ));
        }
        if let Some(index) = x.iter().position(|value| !value.is_finite()) {
            return Err(FunctionError::value(
                "init_from_lists",
                format!("x[{index}] must be finite, got {}", x[index]),
            ));
        }

        let mut points: Vec<Point> = Vec::with_capacity(x.len());
        for index in deterministic_argsort(x) {
            let point = Point::new(x[index], y[index], err.map_or(0.0, |err| err[index]));
            match points.last_mut() {
                Some(last) if last.x == point.x => *last = point,
                _ => points.push(point),
            }
        }
        if points.len() != x.len() {
            tracing::debug!(
                rows = x.len(),
                kept = points.len(),
                "bulk import collapsed duplicate x rows"
            );
        }

        self.clean_memory();
        self.points = points;
        self.refresh();
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point(&self, index: usize) -> FunctionResult<Point> {
        self.checked("point", index)
    }

    pub fn x(&self, index: usize) -> FunctionResult<f64> {
        self.checked("x", index).map(|point| point.x)
    }

    pub fn y(&self, index: usize) -> FunctionResult<f64> {
        self.checked("y", index).map(|point| point.y)
    }

    pub fn err(&self, index: usize) -> FunctionResult<f64> {
        self.checked("err", index).map(|point| point.err)
    }

    pub fn xy(&self, index: usize) -> FunctionResult<(f64, f64)> {
        self.checked("xy", index).map(|point| point.xy())
    }

    pub fn xy_err(&self, index: usize) -> FunctionResult<(f64, f64, f64)> {
        self.checked("xy_err", index).map(|point| point.xy_err())
    }

    pub fn min_x(&self) -> FunctionResult<f64> {
        self.points
            .first()
            .map(|point| point.x)
            .ok_or_else(|| empty_error("min_x"))
    }

    pub fn max_x(&self) -> FunctionResult<f64> {
        self.points
            .last()
            .map(|point| point.x)
            .ok_or_else(|| empty_error("max_x"))
    }

    pub fn min_y(&self) -> FunctionResult<f64> {
        self.y_range
            .map(|(min, _)| min)
            .ok_or_else(|| empty_error("min_y"))
    }

    pub fn max_y(&self) -> FunctionResult<f64> {
        self.y_range
            .map(|(_, max)| max)
            .ok_or_else(|| empty_error("max_y"))
    }

    fn check_index(&self, operation: &'static str, index: usize) -> FunctionResult<()> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(FunctionError::index(operation, index, self.points.len()))
        }
    }

    fn checked(&self, operation: &'static str, index: usize) -> FunctionResult<Point> {
        self.points
            .get(index)
            .copied()
            .ok_or_else(|| FunctionError::index(operation, index, self.points.len()))
    }
}

fn empty_error(operation: &'static str) -> FunctionError {
    FunctionError::out_of_range(operation, f64::NAN, "function has no points")
}

// Stored x values are always finite, so `partial_cmp` is total here and
// `-0.0 == 0.0` counts as a duplicate.
fn compare_x(lhs: f64, rhs: f64) -> Ordering {
    lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal)
}
