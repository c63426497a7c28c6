use thiserror::Error;

/// Top-level error type for polyspan.
#[derive(Debug, Error)]
pub enum PolyspanError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("plane/box intersection is not implemented in {dim} dimensions")]
    UnsupportedDimension { dim: usize },
}

/// Errors related to polygon edits.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("corner {index} does not lie in the polygon's plane")]
    OutOfPlane { index: usize },

    #[error("corner index {index} is out of range for {len} corners")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Convenience type alias for results using [`PolyspanError`].
pub type Result<T> = std::result::Result<T, PolyspanError>;
