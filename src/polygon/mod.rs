mod query;
mod transform;

use std::cmp::Ordering;

use tracing::debug;

use crate::embedding::AffineBasis;
use crate::error::{OperationError, Result};
use crate::math::compare::points_approx_eq;
use crate::math::{PointN, Polygon2};

/// A polygon whose corners all lie in one 2D plane of `D`-dimensional space.
///
/// Corners are stored as 2D parametric coordinates of an [`AffineBasis`]
/// that grows from a point to a line to a plane as corners are added, and
/// shrinks again as they are removed or moved. The parametric
/// representation is not unique; compare polygons with
/// [`is_equal_to`](Self::is_equal_to), which works on world-space corners.
#[derive(Debug, Clone, Default)]
pub struct Polygon<const D: usize> {
    basis: AffineBasis<D>,
    corners: Polygon2,
}

impl<const D: usize> Polygon<D> {
    /// Creates an empty polygon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a polygon by appending `corners` in order.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::OutOfPlane` for the first corner that does not
    /// lie in the plane of the corners before it.
    pub fn from_corners<I>(corners: I, epsilon: f64) -> Result<Self>
    where
        I: IntoIterator<Item = PointN<D>>,
    {
        let mut poly = Self::new();
        for corner in corners {
            poly.add_corner(poly.num_corners(), &corner, epsilon)?;
        }
        Ok(poly)
    }

    /// Returns the number of corners.
    #[must_use]
    pub fn num_corners(&self) -> usize {
        self.corners.len()
    }

    /// Returns `true` if the polygon has no corners.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }

    /// Number of independent directions the corners span (0, 1 or 2).
    #[must_use]
    pub fn rank(&self) -> usize {
        self.basis.rank()
    }

    /// Returns the embedding of the parametric plane.
    #[must_use]
    pub fn basis(&self) -> &AffineBasis<D> {
        &self.basis
    }

    /// Returns the corners in parametric coordinates.
    #[must_use]
    pub fn parametric(&self) -> &Polygon2 {
        &self.corners
    }

    /// Returns corner `index` in world space.
    #[must_use]
    pub fn corner(&self, index: usize) -> Option<PointN<D>> {
        self.corners.corner(index).map(|c| self.basis.convert(c))
    }

    /// Iterates the corners in world space.
    pub fn corners(&self) -> impl Iterator<Item = PointN<D>> + '_ {
        self.corners.corners().iter().map(|c| self.basis.convert(c))
    }

    /// Inserts `point` as a new corner before `index`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::IndexOutOfRange` if `index` is past the end,
    /// or `OperationError::OutOfPlane` if `point` would need a third
    /// independent direction. The polygon is unchanged on error.
    pub fn add_corner(&mut self, index: usize, point: &PointN<D>, epsilon: f64) -> Result<()> {
        let len = self.corners.len();
        if index > len {
            return Err(OperationError::IndexOutOfRange { index, len }.into());
        }
        let Some(coords) = self.basis.expand(point, epsilon) else {
            debug!(index, rank = self.basis.rank(), "rejected out-of-plane corner");
            return Err(OperationError::OutOfPlane { index }.into());
        };
        self.corners.add_corner(index, coords);
        Ok(())
    }

    /// Removes corner `index`, returning it in world space.
    ///
    /// The basis shrinks if the remaining corners no longer span it.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::IndexOutOfRange` if there is no such corner.
    pub fn remove_corner(&mut self, index: usize) -> Result<PointN<D>> {
        self.check_index(index)?;
        let removed = self.basis.convert(&self.corners.remove_corner(index));
        let plan = self.basis.reduce(&self.corners, None);
        plan.apply(&mut self.corners, None);
        Ok(removed)
    }

    /// Moves corner `index` to `point`.
    ///
    /// All or nothing: the reduction and expansion run on a copy of the
    /// basis, and the polygon is only touched once both succeed.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::IndexOutOfRange` if there is no such corner,
    /// or `OperationError::OutOfPlane` if `point` does not lie in the plane
    /// of the other corners. The polygon is unchanged on error.
    pub fn move_corner(&mut self, index: usize, point: &PointN<D>, epsilon: f64) -> Result<()> {
        self.check_index(index)?;

        let mut trial = self.basis;
        let plan = trial.reduce(&self.corners, Some(index));
        let Some(coords) = trial.expand(point, epsilon) else {
            debug!(index, rank = self.basis.rank(), "rejected out-of-plane move");
            return Err(OperationError::OutOfPlane { index }.into());
        };

        plan.apply(&mut self.corners, Some(index));
        self.corners.set_corner(index, coords);
        self.basis = trial;
        Ok(())
    }

    /// Removes every corner.
    pub fn clear(&mut self) {
        self.corners.clear();
        self.basis = AffineBasis::Empty;
    }

    /// Returns `true` if both polygons have the same world-space corners, in
    /// order, within `epsilon`.
    #[must_use]
    pub fn is_equal_to(&self, other: &Self, epsilon: f64) -> bool {
        self.num_corners() == other.num_corners()
            && self
                .corners()
                .zip(other.corners())
                .all(|(a, b)| points_approx_eq(&a, &b, epsilon))
    }

    /// Total order for sorting: corner count, then world-space corners
    /// lexicographically.
    ///
    /// Carries no geometric meaning.
    #[must_use]
    pub fn sort_cmp(&self, other: &Self) -> Ordering {
        self.num_corners().cmp(&other.num_corners()).then_with(|| {
            self.corners()
                .zip(other.corners())
                .map(|(a, b)| cmp_points(&a, &b))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.corners.len();
        if index < len {
            Ok(())
        } else {
            Err(OperationError::IndexOutOfRange { index, len }.into())
        }
    }
}

fn cmp_points<const D: usize>(a: &PointN<D>, b: &PointN<D>) -> Ordering {
    a.coords
        .iter()
        .zip(b.coords.iter())
        .map(|(x, y)| x.total_cmp(y))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}
