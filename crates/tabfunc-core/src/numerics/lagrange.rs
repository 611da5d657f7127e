//! Local Lagrange polynomials over a handful of nodes.
//!
//! Evaluated directly from the basis products: with at most four nodes this
//! is cheaper than building coefficients, and it reproduces node values
//! exactly because every basis factor at a node is either `1` or `0`.

/// Largest stencil the tabulated function evaluates.
pub const MAX_STENCIL: usize = 4;

pub fn lagrange_value(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    let mut value = 0.0;
    for (index, (&xi, &yi)) in xs.iter().zip(ys).enumerate() {
        let mut basis = 1.0;
        for (other, &xj) in xs.iter().enumerate() {
            if other != index {
                basis *= (x - xj) / (xi - xj);
            }
        }
        value += yi * basis;
    }
    value
}

/// Analytic first derivative of the polynomial `lagrange_value` evaluates.
pub fn lagrange_slope(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    let mut slope = 0.0;
    for (index, (&xi, &yi)) in xs.iter().zip(ys).enumerate() {
        let mut basis_slope = 0.0;
        for (skipped, &xk) in xs.iter().enumerate() {
            if skipped == index {
                continue;
            }
            let mut term = 1.0 / (xi - xk);
            for (other, &xj) in xs.iter().enumerate() {
                if other != index && other != skipped {
                    term *= (x - xj) / (xi - xj);
                }
            }
            basis_slope += term;
        }
        slope += yi * basis_slope;
    }
    slope
}

pub fn lagrange_value_and_slope(xs: &[f64], ys: &[f64], x: f64) -> (f64, f64) {
    (lagrange_value(xs, ys, x), lagrange_slope(xs, ys, x))
}
