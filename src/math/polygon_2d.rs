use super::{Ball, Point2, Vector2, TOLERANCE};

/// An ordered list of 2D corners forming a closed polygon.
///
/// Consecutive corners, plus the last and first, form the edges. Duplicate
/// corners are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon2 {
    corners: Vec<Point2>,
}

impl Polygon2 {
    /// Creates an empty polygon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of corners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.corners.len()
    }

    /// Returns `true` if the polygon has no corners.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }

    /// Returns the corners in order.
    #[must_use]
    pub fn corners(&self) -> &[Point2] {
        &self.corners
    }

    /// Mutable access to the corners, for in-place coordinate rewrites.
    pub fn corners_mut(&mut self) -> &mut [Point2] {
        &mut self.corners
    }

    /// Returns corner `index`, if it exists.
    #[must_use]
    pub fn corner(&self, index: usize) -> Option<&Point2> {
        self.corners.get(index)
    }

    /// Inserts a corner before `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn add_corner(&mut self, index: usize, point: Point2) {
        self.corners.insert(index, point);
    }

    /// Removes and returns corner `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove_corner(&mut self, index: usize) -> Point2 {
        self.corners.remove(index)
    }

    /// Replaces corner `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn set_corner(&mut self, index: usize, point: Point2) {
        self.corners[index] = point;
    }

    /// Removes every corner.
    pub fn clear(&mut self) {
        self.corners.clear();
    }

    /// Barycenter of the corners.
    ///
    /// # Panics
    ///
    /// Panics if the polygon is empty.
    #[must_use]
    pub fn center(&self) -> Point2 {
        assert!(!self.corners.is_empty(), "center of an empty polygon");
        #[allow(clippy::cast_precision_loss)]
        let n = self.corners.len() as f64;
        let sum = self
            .corners
            .iter()
            .fold(Vector2::zeros(), |acc, p| acc + p.coords);
        Point2::from(sum / n)
    }

    /// Returns `true` if `point` lies inside the polygon.
    ///
    /// Points on an edge count as inside unless `proper` is set. Uses the
    /// winding number, so self-overlapping regions are inside.
    #[must_use]
    pub fn contains_point(&self, point: &Point2, proper: bool) -> bool {
        if self.edges().any(|(a, b)| on_segment(point, a, b)) {
            return !proper;
        }
        if self.corners.len() < 3 {
            return false;
        }
        winding_number(point, &self.corners) != 0
    }

    /// Smallest enclosing circle of the corners.
    ///
    /// # Panics
    ///
    /// Panics if the polygon is empty.
    #[must_use]
    pub fn bounding_sphere(&self) -> Ball<2> {
        assert!(!self.corners.is_empty(), "bounding sphere of an empty polygon");
        let pts = &self.corners;

        let mut ball = Ball::new(pts[0], 0.0);
        for (i, pi) in pts.iter().enumerate().skip(1) {
            if ball.contains_point(pi) {
                continue;
            }
            ball = Ball::new(*pi, 0.0);
            for (j, pj) in pts[..i].iter().enumerate() {
                if ball.contains_point(pj) {
                    continue;
                }
                ball = circle_through_two(pi, pj);
                for pk in &pts[..j] {
                    if !ball.contains_point(pk) {
                        ball = circle_through_three(pi, pj, pk);
                    }
                }
            }
        }
        ball
    }

    /// A cheap enclosing circle centred on the bounding box of the corners.
    ///
    /// # Panics
    ///
    /// Panics if the polygon is empty.
    #[must_use]
    pub fn bounding_sphere_sloppy(&self) -> Ball<2> {
        assert!(!self.corners.is_empty(), "bounding sphere of an empty polygon");
        let first = self.corners[0];
        let (min, max) = self
            .corners
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
        let center = nalgebra::center(&min, &max);
        let radius = self
            .corners
            .iter()
            .map(|p| (p - center).norm())
            .fold(0.0, f64::max);
        Ball::new(center, radius)
    }

    /// Iterates the edges, closing edge included.
    fn edges(&self) -> impl Iterator<Item = (&Point2, &Point2)> {
        let n = self.corners.len();
        (0..n).map(move |i| (&self.corners[i], &self.corners[(i + 1) % n]))
    }
}

impl From<Vec<Point2>> for Polygon2 {
    fn from(corners: Vec<Point2>) -> Self {
        Self { corners }
    }
}

/// Winding number of `point` with respect to polygon `verts`.
///
/// Non-zero => inside, zero => outside.
fn winding_number(point: &Point2, verts: &[Point2]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let a = verts[i];
        let b = verts[(i + 1) % n];
        let side = cross_2d(&(b - a), &(point - a));

        if a.y <= point.y {
            if b.y > point.y && side > 0.0 {
                winding += 1;
            }
        } else if b.y <= point.y && side < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// Returns `true` if `point` lies on the segment `a`-`b` within [`TOLERANCE`].
fn on_segment(point: &Point2, a: &Point2, b: &Point2) -> bool {
    let ab = b - a;
    let ap = point - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return ap.norm() <= TOLERANCE;
    }
    let t = ap.dot(&ab) / len2;
    if t < -TOLERANCE || t > 1.0 + TOLERANCE {
        return false;
    }
    let closest = a + ab * t.clamp(0.0, 1.0);
    (point - closest).norm() <= TOLERANCE * len2.sqrt().max(1.0)
}

/// 2D cross product: `(a.x * b.y - a.y * b.x)`.
#[inline]
fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

fn circle_through_two(a: &Point2, b: &Point2) -> Ball<2> {
    Ball::new(nalgebra::center(a, b), (b - a).norm() * 0.5)
}

/// Circumcircle of three points, or the widest two-point circle if they are
/// colinear.
fn circle_through_three(a: &Point2, b: &Point2, c: &Point2) -> Ball<2> {
    let ab = b - a;
    let ac = c - a;
    let ab2 = ab.norm_squared();
    let ac2 = ac.norm_squared();
    let d = 2.0 * cross_2d(&ab, &ac);

    if d.abs() <= TOLERANCE * ab2.max(ac2) {
        return [
            circle_through_two(a, b),
            circle_through_two(a, c),
            circle_through_two(b, c),
        ]
        .into_iter()
        .fold(Ball::new(*a, 0.0), |best, ball| {
            if ball.radius() > best.radius() {
                ball
            } else {
                best
            }
        });
    }

    let offset = Vector2::new(
        (ac.y * ab2 - ab.y * ac2) / d,
        (ab.x * ac2 - ac.x * ab2) / d,
    );
    Ball::new(a + offset, offset.norm())
}
