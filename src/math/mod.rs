pub mod aabb;
pub mod ball;
pub mod compare;
pub mod polygon_2d;

pub use aabb::Aabb;
pub use ball::Ball;
pub use polygon_2d::Polygon2;

/// Point in `D`-dimensional world space.
pub type PointN<const D: usize> = nalgebra::Point<f64, D>;

/// Vector in `D`-dimensional world space.
pub type VectorN<const D: usize> = nalgebra::SVector<f64, D>;

/// Rotation of `D`-dimensional world space.
pub type RotationN<const D: usize> = nalgebra::Rotation<f64, D>;

/// 2D point type, used for parametric coordinates.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Used as the default relative epsilon wherever an operation takes one.
pub const TOLERANCE: f64 = 1e-10;
