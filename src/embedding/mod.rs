mod basis;
mod plane_box;
mod reorient;

pub use basis::AffineBasis;
pub use reorient::Reorientation;
