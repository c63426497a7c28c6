use crate::math::{Point2, Polygon2};

/// How stored 2D corner coordinates must be rewritten after an
/// [`AffineBasis::reduce`](super::AffineBasis::reduce) shrank the basis.
///
/// Produced once per reduction and consumed by [`apply`](Self::apply).
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub enum Reorientation {
    /// Coordinates are still valid.
    None,
    /// Zero the first coordinate.
    ClearAxis1,
    /// Zero the second coordinate.
    ClearAxis2,
    /// Zero both coordinates.
    ClearBoth,
    /// The second coordinate becomes the first; the second is zeroed.
    MoveAxis2ToAxis1,
    /// Subtract `offset` from the first coordinate, multiply by `factor`,
    /// and zero the second.
    ScaleAxis1ClearAxis2 { offset: f64, factor: f64 },
    /// No corners remain.
    ClearAll,
}

impl Reorientation {
    /// Rewrites the corners of `poly` to match the reduced basis.
    ///
    /// Corner `skip`, if given, is left untouched: the caller is about to
    /// overwrite it.
    pub fn apply(self, poly: &mut Polygon2, skip: Option<usize>) {
        match self {
            Self::None => {}
            Self::ClearAll => {
                // With a skip index, that corner is the only one left.
                if skip.is_none() {
                    poly.clear();
                }
            }
            _ => {
                for (i, corner) in poly.corners_mut().iter_mut().enumerate() {
                    if Some(i) != skip {
                        self.rewrite(corner);
                    }
                }
            }
        }
    }

    fn rewrite(self, corner: &mut Point2) {
        match self {
            Self::ClearAxis1 => corner.x = 0.0,
            Self::ClearAxis2 => corner.y = 0.0,
            Self::ClearBoth => *corner = Point2::origin(),
            Self::MoveAxis2ToAxis1 => *corner = Point2::new(corner.y, 0.0),
            Self::ScaleAxis1ClearAxis2 { offset, factor } => {
                *corner = Point2::new((corner.x - offset) * factor, 0.0);
            }
            Self::None | Self::ClearAll => {}
        }
    }
}
