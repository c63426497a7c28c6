use super::Polygon;
use crate::error::Result;
use crate::math::{PointN, RotationN, VectorN};

// Rigid motions move only the basis; the parametric corners never change.
impl<const D: usize> Polygon<D> {
    /// Translates every corner by `v`.
    pub fn shift(&mut self, v: &VectorN<D>) {
        self.basis.translate(v);
    }

    /// Translates the polygon so that corner `index` lands on `point`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::IndexOutOfRange` if there is no such corner.
    pub fn move_corner_to(&mut self, point: &PointN<D>, index: usize) -> Result<()> {
        self.check_index(index)?;
        let current = self.basis.convert(&self.corners.corners()[index]);
        self.shift(&(point - current));
        Ok(())
    }

    /// Translates the polygon so that its barycenter lands on `point`.
    ///
    /// Does nothing to an empty polygon.
    pub fn move_center_to(&mut self, point: &PointN<D>) {
        if self.is_empty() {
            return;
        }
        let offset = point - self.center();
        self.shift(&offset);
    }

    /// Rotates the polygon about a world-space `pivot`.
    pub fn rotate_point(&mut self, rotation: &RotationN<D>, pivot: &PointN<D>) {
        self.basis.rotate(rotation, pivot);
    }

    /// Rotates the polygon about corner `index`, which stays in place.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::IndexOutOfRange` if there is no such corner.
    pub fn rotate_corner(&mut self, rotation: &RotationN<D>, index: usize) -> Result<()> {
        self.check_index(index)?;
        let pivot = self.corners.corners()[index];
        self.basis.rotate_about_parametric(rotation, &pivot);
        Ok(())
    }

    /// Rotates the polygon about its barycenter.
    ///
    /// Does nothing to an empty polygon.
    pub fn rotate_center(&mut self, rotation: &RotationN<D>) {
        if self.is_empty() {
            return;
        }
        let pivot = self.corners.center();
        self.basis.rotate_about_parametric(rotation, &pivot);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;
    use nalgebra::Rotation3;

    use super::*;
    use crate::error::{OperationError, PolyspanError};
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64, z: f64) -> PointN<3> {
        PointN::<3>::new(x, y, z)
    }

    fn unit_square() -> Polygon<3> {
        Polygon::from_corners(
            [
                p(0.0, 0.0, 0.0),
                p(1.0, 0.0, 0.0),
                p(1.0, 1.0, 0.0),
                p(0.0, 1.0, 0.0),
            ],
            TOLERANCE,
        )
        .unwrap()
    }

    fn assert_corners(poly: &Polygon<3>, expected: &[PointN<3>]) {
        let actual: Vec<_> = poly.corners().collect();
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert_relative_eq!(a, e, epsilon = 1e-12);
        }
    }

    fn quarter_turn_about_z() -> RotationN<3> {
        Rotation3::from_axis_angle(&VectorN::<3>::z_axis(), FRAC_PI_2)
    }

    #[test]
    fn shift_moves_every_corner() {
        let mut poly = unit_square();
        let before = poly.parametric().clone();
        poly.shift(&VectorN::<3>::new(1.0, 2.0, 3.0));
        assert_corners(
            &poly,
            &[p(1.0, 2.0, 3.0), p(2.0, 2.0, 3.0), p(2.0, 3.0, 3.0), p(1.0, 3.0, 3.0)],
        );
        assert_eq!(poly.parametric(), &before);
    }

    #[test]
    fn shift_empty_stays_empty() {
        let mut poly = Polygon::<3>::new();
        poly.shift(&VectorN::<3>::x());
        assert!(poly.basis().is_empty());
    }

    #[test]
    fn corner_lands_on_target() {
        let mut poly = unit_square();
        poly.move_corner_to(&p(5.0, 5.0, 5.0), 2).unwrap();
        assert_relative_eq!(poly.corner(2).unwrap(), p(5.0, 5.0, 5.0), epsilon = 1e-12);
        assert_relative_eq!(poly.corner(0).unwrap(), p(4.0, 4.0, 5.0), epsilon = 1e-12);
    }

    #[test]
    fn move_missing_corner() {
        let mut poly = unit_square();
        assert!(matches!(
            poly.move_corner_to(&p(0.0, 0.0, 0.0), 4),
            Err(PolyspanError::Operation(OperationError::IndexOutOfRange { index: 4, len: 4 }))
        ));
    }

    #[test]
    fn center_lands_on_target() {
        let mut poly = unit_square();
        poly.move_center_to(&p(0.0, 0.0, 0.0));
        assert_relative_eq!(poly.center(), p(0.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(poly.corner(0).unwrap(), p(-0.5, -0.5, 0.0), epsilon = 1e-12);

        let mut empty = Polygon::<3>::new();
        empty.move_center_to(&p(1.0, 1.0, 1.0));
        assert!(empty.is_empty());
    }

    #[test]
    fn rotate_about_world_point() {
        let mut poly = unit_square();
        poly.rotate_point(&quarter_turn_about_z(), &p(0.0, 0.0, 0.0));
        assert_corners(
            &poly,
            &[p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(-1.0, 1.0, 0.0), p(-1.0, 0.0, 0.0)],
        );
    }

    #[test]
    fn rotate_about_own_corner() {
        let mut poly = unit_square();
        poly.rotate_corner(&quarter_turn_about_z(), 2).unwrap();
        assert_corners(
            &poly,
            &[p(2.0, 0.0, 0.0), p(2.0, 1.0, 0.0), p(1.0, 1.0, 0.0), p(1.0, 0.0, 0.0)],
        );
        assert!(poly.rotate_corner(&quarter_turn_about_z(), 7).is_err());
    }

    #[test]
    fn rotate_about_center_keeps_center() {
        let mut poly = unit_square();
        let tilt = Rotation3::from_axis_angle(&VectorN::<3>::x_axis(), FRAC_PI_2);
        poly.rotate_center(&tilt);
        assert_relative_eq!(poly.center(), p(0.5, 0.5, 0.0), epsilon = 1e-12);
        // The square now stands in the plane y = 0.5
        for corner in poly.corners() {
            assert_relative_eq!(corner.y, 0.5, epsilon = 1e-12);
        }
        assert_eq!(poly.rank(), 2);
    }

    #[test]
    fn rotated_segment_about_its_end() {
        let mut seg =
            Polygon::from_corners([p(1.0, 0.0, 0.0), p(3.0, 0.0, 0.0)], TOLERANCE).unwrap();
        seg.rotate_corner(&quarter_turn_about_z(), 0).unwrap();
        assert_corners(&seg, &[p(1.0, 0.0, 0.0), p(1.0, 2.0, 0.0)]);
    }
}
