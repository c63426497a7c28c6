use super::PointN;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb<const D: usize> {
    /// Minimum corner of the bounding box.
    pub min: PointN<D>,
    /// Maximum corner of the bounding box.
    pub max: PointN<D>,
}

impl<const D: usize> Aabb<D> {
    /// Creates a box spanning two opposite corners, in any order.
    #[must_use]
    pub fn new(a: PointN<D>, b: PointN<D>) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// Returns `true` if `point` lies in the box.
    ///
    /// With `proper`, points on the boundary are outside.
    #[must_use]
    pub fn contains_point(&self, point: &PointN<D>, proper: bool) -> bool {
        (0..D).all(|i| within(point[i], self.min[i], self.max[i], proper))
    }

    /// Returns `true` if the segment from `start` to `end` meets the box.
    ///
    /// Slab test over the segment parameter `t` in `[0, 1]`. With `proper`,
    /// touching the boundary only is not an intersection.
    #[must_use]
    pub fn intersects_segment(&self, start: &PointN<D>, end: &PointN<D>, proper: bool) -> bool {
        let dir = end - start;
        let mut t_min = 0.0_f64;
        let mut t_max = 1.0_f64;

        for i in 0..D {
            if dir[i] == 0.0 {
                // Parallel to this slab
                if !within(start[i], self.min[i], self.max[i], proper) {
                    return false;
                }
                continue;
            }
            let mut low = (self.min[i] - start[i]) / dir[i];
            let mut high = (self.max[i] - start[i]) / dir[i];
            if low > high {
                std::mem::swap(&mut low, &mut high);
            }
            t_min = t_min.max(low);
            t_max = t_max.min(high);
        }

        if proper {
            t_min < t_max
        } else {
            t_min <= t_max
        }
    }
}

/// Interval membership, strict when `proper`.
#[inline]
pub(crate) fn within(x: f64, low: f64, high: f64, proper: bool) -> bool {
    if proper {
        low < x && x < high
    } else {
        low <= x && x <= high
    }
}
