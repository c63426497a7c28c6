use approx::relative_eq;

use super::PointN;

/// Returns `true` if `a` and `b` differ by at most `epsilon`, either
/// absolutely or relative to the larger magnitude.
#[must_use]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    relative_eq!(a, b, epsilon = epsilon, max_relative = epsilon)
}

/// Componentwise [`approx_eq`] over two points.
#[must_use]
pub fn points_approx_eq<const D: usize>(a: &PointN<D>, b: &PointN<D>, epsilon: f64) -> bool {
    relative_eq!(a, b, epsilon = epsilon, max_relative = epsilon)
}

/// Returns `true` if `x` is zero relative to `scale`.
#[must_use]
pub fn is_relative_zero(x: f64, scale: f64, epsilon: f64) -> bool {
    x.abs() <= scale.abs() * epsilon
}
