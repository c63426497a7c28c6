pub mod embedding;
pub mod error;
pub mod math;
pub mod polygon;

pub use embedding::{AffineBasis, Reorientation};
pub use error::{PolyspanError, Result};
pub use polygon::Polygon;
