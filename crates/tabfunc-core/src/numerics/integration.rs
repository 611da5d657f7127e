/// Abscissa of the two-point Gauss-Legendre rule on `[-1, 1]`, `1/sqrt(3)`.
const GAUSS2_ABSCISSA: f64 = 0.577_350_269_189_625_8;

/// Two-point Gauss-Legendre quadrature of `integrand` over `[lower, upper]`.
/// Exact for polynomials up to degree three.
pub fn gauss_legendre2<F>(lower: f64, upper: f64, integrand: F) -> f64
where
    F: Fn(f64) -> f64,
{
    let half_width = 0.5 * (upper - lower);
    let midpoint = 0.5 * (upper + lower);
    let offset = half_width * GAUSS2_ABSCISSA;
    half_width * (integrand(midpoint - offset) + integrand(midpoint + offset))
}

#[cfg(test)]
mod tests {
    use super::gauss_legendre2;

    #[test]
    fn integrates_cubics_exactly() {
        let integral = gauss_legendre2(-1.0, 2.0, |x| x * x * x - 2.0 * x * x + 1.0);
        // x^4/4 - 2x^3/3 + x over [-1, 2]
        let expected = (4.0 - 16.0 / 3.0 + 2.0) - (0.25 + 2.0 / 3.0 - 1.0);
        assert!((integral - expected).abs() < 1.0e-13);
    }

    #[test]
    fn reversed_bounds_flip_the_sign() {
        let forward = gauss_legendre2(0.0, 1.0, |x| 3.0 * x + 1.0);
        let backward = gauss_legendre2(1.0, 0.0, |x| 3.0 * x + 1.0);
        assert!((forward - 2.5).abs() < 1.0e-14);
        assert!((forward + backward).abs() < 1.0e-14);
    }
}
