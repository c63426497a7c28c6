use super::Polygon;
use crate::error::Result;
use crate::math::{Aabb, Ball, PointN};

impl<const D: usize> Polygon<D> {
    /// Componentwise extent of the world-space corners.
    ///
    /// # Panics
    ///
    /// Panics if the polygon is empty.
    #[must_use]
    pub fn bounding_box(&self) -> Aabb<D> {
        let mut corners = self.corners();
        let Some(first) = corners.next() else {
            panic!("bounding box of an empty polygon");
        };
        let (min, max) = corners.fold((first, first), |(lo, hi), p| (lo.inf(&p), hi.sup(&p)));
        Aabb { min, max }
    }

    /// Smallest ball containing every corner.
    ///
    /// Computed in parametric coordinates; the axes are orthonormal, so the
    /// radius carries over unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the polygon is empty.
    #[must_use]
    pub fn bounding_sphere(&self) -> Ball<D> {
        let ball = self.corners.bounding_sphere();
        Ball::new(self.basis.convert(ball.center()), ball.radius())
    }

    /// A cheaper, possibly larger, ball containing every corner.
    ///
    /// # Panics
    ///
    /// Panics if the polygon is empty.
    #[must_use]
    pub fn bounding_sphere_sloppy(&self) -> Ball<D> {
        let ball = self.corners.bounding_sphere_sloppy();
        Ball::new(self.basis.convert(ball.center()), ball.radius())
    }

    /// Barycenter of the corners in world space.
    ///
    /// # Panics
    ///
    /// Panics if the polygon is empty.
    #[must_use]
    pub fn center(&self) -> PointN<D> {
        self.basis.convert(&self.corners.center())
    }

    /// Returns `true` if the polygon, as a filled region, meets `aabb`.
    ///
    /// The span of the polygon (point, line or plane) is tested first. On a
    /// hit, any edge meeting the box is an intersection; failing that the box
    /// can only lie inside the polygon, which the witness point decides. With
    /// `proper`, touching only the boundary of either shape does not count.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::UnsupportedDimension` for a polygon spanning a
    /// plane outside 3 dimensions.
    pub fn intersects(&self, aabb: &Aabb<D>, proper: bool) -> Result<bool> {
        if self.is_empty() {
            return Ok(false);
        }
        let Some(witness) = self.basis.check_intersect(aabb, proper)? else {
            return Ok(false);
        };

        let corners: Vec<PointN<D>> = self.corners().collect();
        let n = corners.len();
        let edge_hit = (0..n).any(|i| {
            aabb.intersects_segment(&corners[(i + n - 1) % n], &corners[i], proper)
        });
        if edge_hit {
            return Ok(true);
        }

        Ok(self.corners.contains_point(&witness, proper))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::{GeometryError, PolyspanError};
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64, z: f64) -> PointN<3> {
        PointN::<3>::new(x, y, z)
    }

    fn polygon(corners: &[PointN<3>]) -> Polygon<3> {
        Polygon::from_corners(corners.iter().copied(), TOLERANCE).unwrap()
    }

    fn unit_square() -> Polygon<3> {
        polygon(&[
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ])
    }

    fn aabb(min: PointN<3>, max: PointN<3>) -> Aabb<3> {
        Aabb::new(min, max)
    }

    // ── bounding volumes ──

    #[test]
    fn square_bounding_box() {
        let b = unit_square().bounding_box();
        assert_relative_eq!(b.min, p(0.0, 0.0, 0.0));
        assert_relative_eq!(b.max, p(1.0, 1.0, 0.0));
    }

    #[test]
    fn tilted_triangle_bounding_box() {
        let tri = polygon(&[p(1.0, 0.0, 0.0), p(0.0, 2.0, 0.0), p(0.0, 0.0, 3.0)]);
        let b = tri.bounding_box();
        assert_relative_eq!(b.min, p(0.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(b.max, p(1.0, 2.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    #[should_panic(expected = "empty polygon")]
    fn empty_bounding_box_panics() {
        let _ = Polygon::<3>::new().bounding_box();
    }

    #[test]
    fn single_corner_sphere() {
        let poly = polygon(&[p(5.0, 5.0, 5.0)]);
        let ball = poly.bounding_sphere();
        assert_relative_eq!(ball.radius(), 0.0);
        assert_relative_eq!(*ball.center(), p(5.0, 5.0, 5.0));
    }

    #[test]
    fn square_sphere_in_world_space() {
        let ball = unit_square().bounding_sphere();
        assert_relative_eq!(*ball.center(), p(0.5, 0.5, 0.0), epsilon = 1e-12);
        assert_relative_eq!(ball.radius(), 0.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn sloppy_sphere_contains_corners() {
        let tri = polygon(&[p(1.0, 0.0, 0.0), p(0.0, 2.0, 0.0), p(0.0, 0.0, 3.0)]);
        let ball = tri.bounding_sphere_sloppy();
        for corner in tri.corners() {
            assert!(ball.contains_point(&corner));
        }
    }

    #[test]
    fn center_of_square() {
        assert_relative_eq!(unit_square().center(), p(0.5, 0.5, 0.0), epsilon = 1e-12);
    }

    // ── intersects ──

    #[test]
    fn segment_overlapping_box() {
        let seg = polygon(&[p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0)]);
        assert_eq!(seg.rank(), 1);
        let [axis0, axis1] = seg.basis().axes();
        assert_relative_eq!(axis0.unwrap(), crate::math::VectorN::<3>::x());
        assert!(axis1.is_none());
        let b = aabb(p(1.0, -1.0, -1.0), p(3.0, 1.0, 1.0));
        assert!(seg.intersects(&b, false).unwrap());
        assert!(seg.intersects(&b, true).unwrap());
    }

    #[test]
    fn segment_touching_box_at_endpoint() {
        let seg = polygon(&[p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0)]);
        let b = aabb(p(-1.0, -1.0, -1.0), p(0.0, 1.0, 1.0));
        assert!(seg.intersects(&b, false).unwrap());
        assert!(!seg.intersects(&b, true).unwrap());
    }

    #[test]
    fn segment_line_hits_box_beyond_end() {
        let seg = polygon(&[p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0)]);
        let b = aabb(p(5.0, -1.0, -1.0), p(6.0, 1.0, 1.0));
        assert!(!seg.intersects(&b, false).unwrap());
    }

    #[test]
    fn point_polygon() {
        let dot = polygon(&[p(1.0, 1.0, 1.0)]);
        assert!(dot.intersects(&aabb(p(0.0, 0.0, 0.0), p(2.0, 2.0, 2.0)), true).unwrap());
        assert!(!dot.intersects(&aabb(p(2.0, 0.0, 0.0), p(3.0, 2.0, 2.0)), false).unwrap());
    }

    #[test]
    fn empty_polygon_meets_nothing() {
        let b = aabb(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0));
        assert!(!Polygon::<3>::new().intersects(&b, false).unwrap());
    }

    #[test]
    fn box_crossing_an_edge() {
        let b = aabb(p(0.5, -0.5, -0.5), p(1.5, 0.5, 0.5));
        assert!(unit_square().intersects(&b, true).unwrap());
    }

    #[test]
    fn box_inside_square() {
        let b = aabb(p(0.25, 0.25, -1.0), p(0.75, 0.75, 1.0));
        assert!(unit_square().intersects(&b, true).unwrap());
    }

    #[test]
    fn box_in_plane_but_outside_square() {
        let b = aabb(p(5.0, 5.0, -1.0), p(6.0, 6.0, 1.0));
        assert!(!unit_square().intersects(&b, false).unwrap());
    }

    #[test]
    fn box_above_square() {
        let b = aabb(p(0.0, 0.0, 1.0), p(1.0, 1.0, 2.0));
        assert!(!unit_square().intersects(&b, false).unwrap());
    }

    #[test]
    fn box_resting_on_square() {
        let b = aabb(p(0.25, 0.25, 0.0), p(0.75, 0.75, 1.0));
        assert!(unit_square().intersects(&b, false).unwrap());
        assert!(!unit_square().intersects(&b, true).unwrap());
    }

    #[test]
    fn plane_polygon_outside_three_dimensions() {
        let poly = Polygon::from_corners(
            [
                PointN::<4>::new(0.0, 0.0, 0.0, 0.0),
                PointN::<4>::new(1.0, 0.0, 0.0, 0.0),
                PointN::<4>::new(0.0, 1.0, 0.0, 0.0),
            ],
            TOLERANCE,
        )
        .unwrap();
        let b = Aabb::new(PointN::<4>::origin(), PointN::<4>::new(1.0, 1.0, 1.0, 1.0));
        assert!(matches!(
            poly.intersects(&b, false),
            Err(PolyspanError::Geometry(GeometryError::UnsupportedDimension { dim: 4 }))
        ));
    }

    #[test]
    fn segment_in_four_dimensions() {
        let seg = Polygon::from_corners(
            [
                PointN::<4>::new(0.0, 0.0, 0.0, 0.0),
                PointN::<4>::new(2.0, 2.0, 2.0, 2.0),
            ],
            TOLERANCE,
        )
        .unwrap();
        let b = Aabb::new(
            PointN::<4>::new(1.0, 1.0, 1.0, 1.0),
            PointN::<4>::new(3.0, 3.0, 3.0, 3.0),
        );
        assert!(seg.intersects(&b, true).unwrap());
    }
}
