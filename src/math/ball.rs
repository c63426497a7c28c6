use super::{PointN, TOLERANCE};

/// A closed ball: every point within `radius` of `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball<const D: usize> {
    center: PointN<D>,
    radius: f64,
}

impl<const D: usize> Ball<D> {
    /// Creates a new ball.
    #[must_use]
    pub fn new(center: PointN<D>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns the center of the ball.
    #[must_use]
    pub fn center(&self) -> &PointN<D> {
        &self.center
    }

    /// Returns the radius of the ball.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns `true` if `point` lies inside the ball, allowing a relative
    /// slack of [`TOLERANCE`] on the radius.
    #[must_use]
    pub fn contains_point(&self, point: &PointN<D>) -> bool {
        let slack = TOLERANCE * self.radius.max(1.0);
        (point - self.center).norm() <= self.radius + slack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_point_on_sphere() {
        let ball = Ball::new(PointN::<3>::new(1.0, 1.0, 1.0), 2.0);
        assert!(ball.contains_point(&PointN::<3>::new(3.0, 1.0, 1.0)));
        assert!(!ball.contains_point(&PointN::<3>::new(3.1, 1.0, 1.0)));
    }

    #[test]
    fn zero_radius_ball() {
        let ball = Ball::new(PointN::<2>::new(5.0, 5.0), 0.0);
        assert!(ball.contains_point(&PointN::<2>::new(5.0, 5.0)));
        assert!(!ball.contains_point(&PointN::<2>::new(5.0, 5.1)));
    }
}
