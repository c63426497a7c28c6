use tracing::trace;

use super::plane_box::plane_box_witness;
use super::Reorientation;
use crate::error::Result;
use crate::math::aabb::within;
use crate::math::compare::{approx_eq, is_relative_zero};
use crate::math::{Aabb, Point2, PointN, Polygon2, RotationN, VectorN, TOLERANCE};

/// An origin plus up to two orthonormal axes, embedding 2D parametric
/// coordinates into `D`-dimensional space.
///
/// The variant is the rank, so an axis can never exist without the origin,
/// and a second axis never without the first.
///
/// Parametric form: `P(u, v) = origin + u * axes[0] + v * axes[1]`, where a
/// coordinate on a missing axis is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AffineBasis<const D: usize> {
    /// No corners yet.
    #[default]
    Empty,
    /// Every corner sits at `origin`.
    Point { origin: PointN<D> },
    /// Corners lie on the line through `origin` along `axis`.
    Line { origin: PointN<D>, axis: VectorN<D> },
    /// Corners lie in the plane through `origin` spanned by `axes`.
    Plane {
        origin: PointN<D>,
        axes: [VectorN<D>; 2],
    },
}

impl<const D: usize> AffineBasis<D> {
    /// Number of axes.
    #[must_use]
    pub fn rank(&self) -> usize {
        match self {
            Self::Empty | Self::Point { .. } => 0,
            Self::Line { .. } => 1,
            Self::Plane { .. } => 2,
        }
    }

    /// Returns `true` if the basis has no origin.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the origin, unless the basis is empty.
    #[must_use]
    pub fn origin(&self) -> Option<&PointN<D>> {
        match self {
            Self::Empty => None,
            Self::Point { origin } | Self::Line { origin, .. } | Self::Plane { origin, .. } => {
                Some(origin)
            }
        }
    }

    /// Returns the axes; a missing axis is `None`.
    #[must_use]
    pub fn axes(&self) -> [Option<VectorN<D>>; 2] {
        match *self {
            Self::Empty | Self::Point { .. } => [None, None],
            Self::Line { axis, .. } => [Some(axis), None],
            Self::Plane { axes, .. } => [Some(axes[0]), Some(axes[1])],
        }
    }

    /// Maps parametric coordinates to world space.
    ///
    /// # Panics
    ///
    /// Panics if the basis is empty. Debug builds also panic on a non-zero
    /// coordinate along a missing axis.
    #[must_use]
    pub fn convert(&self, p: &Point2) -> PointN<D> {
        let Some(&origin) = self.origin() else {
            panic!("cannot convert through an empty basis");
        };
        self.axes()
            .into_iter()
            .zip([p.x, p.y])
            .fold(origin, |acc, (axis, t)| acc + along(axis, t))
    }

    /// Adds `point` to the span of the basis, returning its parametric
    /// coordinates.
    ///
    /// An empty basis adopts `point` as its origin. Otherwise the offset from
    /// the origin is projected onto each axis in turn (Gram-Schmidt); a
    /// residual that is not zero relative to the original offset becomes a
    /// new axis. Returns `None`, leaving the basis unchanged, if the residual
    /// would need a third axis.
    pub fn expand(&mut self, point: &PointN<D>, epsilon: f64) -> Option<Point2> {
        let Some(&origin) = self.origin() else {
            *self = Self::Point { origin: *point };
            return Some(Point2::origin());
        };

        let start = point - origin;
        let bound = start.norm_squared() * epsilon;
        let mut shift = start;
        let mut coords = Point2::origin();

        for (j, axis) in self.axes().into_iter().enumerate() {
            // Orthogonal to every axis so far, so this is |shift|^2.
            if shift.dot(&start) <= bound {
                return Some(coords);
            }
            match axis {
                Some(axis) => {
                    coords[j] = shift.dot(&axis);
                    shift -= axis * coords[j];
                }
                None => {
                    coords[j] = shift.norm();
                    self.push_axis(shift / coords[j]);
                    return Some(coords);
                }
            }
        }

        (shift.dot(&start) <= bound).then_some(coords)
    }

    /// Drops the axes that the corners of `poly`, other than `skip`, no
    /// longer need.
    ///
    /// The basis is updated immediately; the returned [`Reorientation`] must
    /// then be applied to the container so the stored coordinates match.
    ///
    /// # Panics
    ///
    /// Panics if corners remain but the basis is empty.
    pub fn reduce(&mut self, poly: &Polygon2, skip: Option<usize>) -> Reorientation {
        let plan = self.reduce_inner(poly, skip);
        trace!(?plan, rank = self.rank(), "reduced basis");
        plan
    }

    fn reduce_inner(&mut self, poly: &Polygon2, skip: Option<usize>) -> Reorientation {
        let remaining = || {
            poly.corners()
                .iter()
                .enumerate()
                .filter(move |&(i, _)| Some(i) != skip)
                .map(|(_, c)| c)
        };

        let Some(&reference) = remaining().next() else {
            *self = Self::Empty;
            return Reorientation::ClearAll;
        };
        let Some(&origin) = self.origin() else {
            panic!("corners remain but the basis is empty");
        };
        let [axis0, axis1] = self.axes();

        // Which axes the differences from the reference corner still span
        let mut spans = [false, false];
        let mut slope: Option<f64> = None;

        for corner in remaining().skip(1) {
            let diff = corner - reference;
            let scale = diff.norm();
            if scale == 0.0 {
                continue;
            }
            let flat_x = is_relative_zero(diff.x, scale, TOLERANCE);
            let flat_y = is_relative_zero(diff.y, scale, TOLERANCE);

            if flat_y {
                if spans[1] || slope.is_some() {
                    return Reorientation::None;
                }
                spans[0] = true;
            } else if flat_x {
                if spans[0] || slope.is_some() {
                    return Reorientation::None;
                }
                spans[1] = true;
            } else {
                if spans[0] || spans[1] {
                    return Reorientation::None;
                }
                let new_slope = diff.y / diff.x;
                match slope {
                    None => slope = Some(new_slope),
                    Some(s) if !approx_eq(s, new_slope, TOLERANCE) => {
                        return Reorientation::None;
                    }
                    Some(_) => {}
                }
            }
        }

        if spans[0] {
            let Some(axis) = axis0 else {
                unreachable!("corners differ along a missing first axis");
            };
            *self = Self::Line {
                origin: origin + along(axis1, reference.y),
                axis,
            };
            return if remaining().any(|c| c.y != 0.0) {
                Reorientation::ClearAxis2
            } else {
                Reorientation::None
            };
        }

        if spans[1] {
            let Some(axis) = axis1 else {
                unreachable!("corners differ along a missing second axis");
            };
            *self = Self::Line {
                origin: origin + along(axis0, reference.x),
                axis,
            };
            return Reorientation::MoveAxis2ToAxis1;
        }

        let Some(slope) = slope else {
            // Every remaining corner coincides with the reference.
            *self = Self::Point {
                origin: origin + along(axis0, reference.x) + along(axis1, reference.y),
            };
            return match (reference.x != 0.0, reference.y != 0.0) {
                (true, true) => Reorientation::ClearBoth,
                (true, false) => Reorientation::ClearAxis1,
                (false, true) => Reorientation::ClearAxis2,
                (false, false) => Reorientation::None,
            };
        };

        // Colinear along a line that is parallel to neither axis:
        // v = reference.y + (u - reference.x) * slope. The new origin is
        // the reference corner.
        let (Some(a0), Some(a1)) = (axis0, axis1) else {
            unreachable!("diagonal corners need both axes");
        };
        let factor = slope.hypot(1.0);
        *self = Self::Line {
            origin: origin + a0 * reference.x + a1 * reference.y,
            axis: (a0 + a1 * slope) / factor,
        };
        Reorientation::ScaleAxis1ClearAxis2 {
            offset: reference.x,
            factor,
        }
    }

    /// Rotates the basis about a world-space `pivot`.
    pub fn rotate(&mut self, rotation: &RotationN<D>, pivot: &PointN<D>) {
        let turn = |p: PointN<D>| pivot + rotation * (p - pivot);
        *self = match *self {
            Self::Empty => Self::Empty,
            Self::Point { origin } => Self::Point {
                origin: turn(origin),
            },
            Self::Line { origin, axis } => Self::Line {
                origin: turn(origin),
                axis: rotation * axis,
            },
            Self::Plane { origin, axes } => Self::Plane {
                origin: turn(origin),
                axes: axes.map(|a| rotation * a),
            },
        };
    }

    /// Rotates the basis about a pivot given in parametric coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the basis is empty. Debug builds also panic on a non-zero
    /// pivot coordinate along a missing axis.
    pub fn rotate_about_parametric(&mut self, rotation: &RotationN<D>, pivot: &Point2) {
        let Some(&origin) = self.origin() else {
            panic!("cannot rotate an empty basis about a parametric pivot");
        };
        let shift = self.convert(pivot) - origin;
        self.rotate(rotation, &origin);
        self.translate(&(shift - rotation * shift));
    }

    /// Moves the origin by `v`.
    pub fn translate(&mut self, v: &VectorN<D>) {
        match self {
            Self::Empty => {}
            Self::Point { origin } | Self::Line { origin, .. } | Self::Plane { origin, .. } => {
                *origin += *v;
            }
        }
    }

    /// Projects `point` onto the basis without changing it.
    ///
    /// Returns the parametric coordinates of the projection and the residual
    /// vector from the projection to `point`, perpendicular to every axis.
    ///
    /// # Panics
    ///
    /// Panics if the basis is empty.
    #[must_use]
    pub fn offset(&self, point: &PointN<D>) -> (Point2, VectorN<D>) {
        let Some(&origin) = self.origin() else {
            panic!("cannot project onto an empty basis");
        };
        let mut residual = point - origin;
        let mut coords = Point2::origin();
        for (j, axis) in self.axes().into_iter().enumerate() {
            if let Some(axis) = axis {
                coords[j] = residual.dot(&axis);
                residual -= axis * coords[j];
            }
        }
        (coords, residual)
    }

    /// Tests the span of the basis (point, line or plane) against `aabb`.
    ///
    /// On a hit, returns a witness: the parametric coordinates of a point of
    /// the span inside the box. With `proper`, touching the boundary of the
    /// box is not a hit.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::UnsupportedDimension` for a plane outside 3
    /// dimensions.
    ///
    /// # Panics
    ///
    /// Panics if the basis is empty.
    pub fn check_intersect(&self, aabb: &Aabb<D>, proper: bool) -> Result<Option<Point2>> {
        match self {
            Self::Empty => panic!("cannot intersect an empty basis"),
            Self::Point { origin } => Ok(aabb.contains_point(origin, proper).then(Point2::origin)),
            Self::Line { origin, axis } => Ok(line_box_witness(origin, axis, aabb, proper)),
            Self::Plane { origin, axes } => {
                let Some(hit) = plane_box_witness(origin, axes, aabb, proper)? else {
                    return Ok(None);
                };
                if proper && !aabb.contains_point(&hit, true) {
                    return Ok(None);
                }
                Ok(Some(self.offset(&hit).0))
            }
        }
    }

    fn push_axis(&mut self, new_axis: VectorN<D>) {
        *self = match *self {
            Self::Point { origin } => Self::Line {
                origin,
                axis: new_axis,
            },
            Self::Line { origin, axis } => Self::Plane {
                origin,
                axes: [axis, new_axis],
            },
            Self::Empty | Self::Plane { .. } => unreachable!("no free axis to fill"),
        };
    }
}

/// `t` steps along `axis`; a missing axis only admits `t == 0`.
fn along<const D: usize>(axis: Option<VectorN<D>>, t: f64) -> VectorN<D> {
    match axis {
        Some(axis) => axis * t,
        None => {
            debug_assert!(t == 0.0, "non-zero coordinate {t} along a missing axis");
            VectorN::zeros()
        }
    }
}

/// Slab test of the line `origin + t * axis` against `aabb`; the witness is
/// the midpoint of the parameter interval inside the box.
fn line_box_witness<const D: usize>(
    origin: &PointN<D>,
    axis: &VectorN<D>,
    aabb: &Aabb<D>,
    proper: bool,
) -> Option<Point2> {
    let mut interval: Option<(f64, f64)> = None;

    for i in 0..D {
        let dist = axis[i];
        if dist == 0.0 {
            // Parallel to this slab
            if !within(origin[i], aabb.min[i], aabb.max[i], proper) {
                return None;
            }
            continue;
        }
        let mut low = (aabb.min[i] - origin[i]) / dist;
        let mut high = (aabb.max[i] - origin[i]) / dist;
        if low > high {
            std::mem::swap(&mut low, &mut high);
        }
        interval = Some(match interval {
            None => (low, high),
            Some((min, max)) => (min.max(low), max.min(high)),
        });
    }

    let Some((min, max)) = interval else {
        unreachable!("a unit axis is parallel to every slab");
    };
    let hit = if proper { min < max } else { min <= max };
    hit.then(|| Point2::new((min + max) * 0.5, 0.0))
}
