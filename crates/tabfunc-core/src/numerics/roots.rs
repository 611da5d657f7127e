//! Safeguarded Newton iteration for `f(x) = target` inside a sign-changing
//! bracket. Newton steps that leave the bracket, or meet a zero slope, fall
//! back to bisection, so the bracket shrinks on every iteration.

const MAX_ITERATIONS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketedSolve {
    pub root: f64,
    pub iterations: usize,
}

/// `value_and_slope` returns `(f(x), f'(x))`. Returns `None` when
/// `f(lower) - target` and `f(upper) - target` have the same strict sign or
/// the bracket is not finite.
pub fn solve_bracketed<F>(
    lower: f64,
    upper: f64,
    target: f64,
    value_and_slope: F,
) -> Option<BracketedSolve>
where
    F: Fn(f64) -> (f64, f64),
{
    if !lower.is_finite() || !upper.is_finite() || !target.is_finite() {
        return None;
    }

    let (mut lo, mut hi) = if lower <= upper {
        (lower, upper)
    } else {
        (upper, lower)
    };
    let residual_lo = value_and_slope(lo).0 - target;
    let residual_hi = value_and_slope(hi).0 - target;
    if residual_lo == 0.0 {
        return Some(BracketedSolve {
            root: lo,
            iterations: 0,
        });
    }
    if residual_hi == 0.0 {
        return Some(BracketedSolve {
            root: hi,
            iterations: 0,
        });
    }
    if residual_lo.signum() == residual_hi.signum() {
        return None;
    }
    let lo_is_negative = residual_lo < 0.0;
    let tolerance = 4.0 * f64::EPSILON * lo.abs().max(hi.abs()).max(f64::MIN_POSITIVE);

    let mut x = 0.5 * (lo + hi);
    for iteration in 1..=MAX_ITERATIONS {
        let (value, slope) = value_and_slope(x);
        let residual = value - target;
        if residual == 0.0 || !residual.is_finite() {
            return residual.is_finite().then_some(BracketedSolve {
                root: x,
                iterations: iteration,
            });
        }

        if (residual < 0.0) == lo_is_negative {
            lo = x;
        } else {
            hi = x;
        }
        if hi - lo <= tolerance {
            return Some(BracketedSolve {
                root: 0.5 * (lo + hi),
                iterations: iteration,
            });
        }

        let newton = x - residual / slope;
        if slope != 0.0 && newton >= lo && newton <= hi {
            if (newton - x).abs() <= tolerance {
                return Some(BracketedSolve {
                    root: newton,
                    iterations: iteration,
                });
            }
            x = newton;
        } else {
            x = 0.5 * (lo + hi);
        }
    }

    Some(BracketedSolve {
        root: x,
        iterations: MAX_ITERATIONS,
    })
}
