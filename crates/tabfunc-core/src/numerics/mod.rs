pub mod integration;
pub mod lagrange;
pub mod roots;

pub use integration::gauss_legendre2;
pub use lagrange::{lagrange_slope, lagrange_value, lagrange_value_and_slope, MAX_STENCIL};
pub use roots::{solve_bracketed, BracketedSolve};

fn kahan_add(sum: &mut f64, correction: &mut f64, value: f64) {
    let corrected = value - *correction;
    let next = *sum + corrected;
    *correction = (next - *sum) - corrected;
    *sum = next;
}

pub fn stable_sum(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut correction = 0.0;

    for &value in values {
        kahan_add(&mut sum, &mut correction, value);
    }

    sum
}

/// Indices that sort `values` ascending; ties keep input order. `-0.0` and
/// `0.0` tie.
pub fn deterministic_argsort(values: &[f64]) -> Vec<usize> {
    let key = |index: usize| {
        let value = values[index];
        if value == 0.0 { 0.0 } else { value }
    };
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_unstable_by(|lhs, rhs| {
        key(*lhs)
            .total_cmp(&key(*rhs))
            .then_with(|| lhs.cmp(rhs))
    });
    indices
}

#[cfg(test)]
pub(crate) fn linear_grid(start: f64, end: f64, count: usize) -> Option<Vec<f64>> {
    if count < 2 {
        return None;
    }

    let step = (end - start) / ((count - 1) as f64);
    let mut grid = Vec::with_capacity(count);
    for index in 0..count {
        grid.push(start + step * (index as f64));
    }

    if let Some(last) = grid.last_mut() {
        *last = end;
    }

    Some(grid)
}

pub fn relative_difference(lhs: f64, rhs: f64, relative_floor: f64) -> f64 {
    let scale = lhs.abs().max(rhs.abs()).max(relative_floor);
    (lhs - rhs).abs() / scale
}

#[cfg(test)]
mod tests {
    use super::{deterministic_argsort, linear_grid, relative_difference, stable_sum};

    #[test]
    fn stable_sum_reduces_order_loss_for_large_and_small_values() {
        let input = [1.0e16, 1.0, -1.0e16];
        assert_eq!(stable_sum(&input), 0.0);
    }

    #[test]
    fn deterministic_argsort_orders_by_value_then_index() {
        let values = [2.0, 1.0, 3.0, 1.0, 0.0, -0.0];
        let order = deterministic_argsort(&values);
        assert_eq!(order, vec![4, 5, 1, 3, 0, 2]);
    }

    #[test]
    fn linear_grid_is_inclusive_and_rejects_invalid_counts() {
        assert_eq!(linear_grid(0.0, 1.0, 1), None);
        let grid = linear_grid(0.0, 2.0, 5).expect("grid");
        assert_eq!(grid, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn relative_difference_uses_relative_floor() {
        let diff = relative_difference(0.0, 1.0e-10, 1.0e-6);
        assert!((diff - 1.0e-4).abs() < 1.0e-12);
        assert_eq!(relative_difference(2.0, 2.0, 1.0e-12), 0.0);
    }
}
