use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The suite has no problem with this ID.
    #[error("unknown problem {0}: the suite defines problems 1 to 20")]
    UnknownProblem(u32),

    /// A point was evaluated with the wrong number of coordinates.
    #[error("dimension mismatch: expected {expected} coordinates, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Landscapes can only be drawn for two dimensional problems.
    #[error("only 2-dimensional landscapes are supported, got {0} dimensions")]
    UnsupportedDimension(usize),

    #[error("axis {axis} is out of range for a {dimension}-dimensional problem")]
    AxisOutOfRange { axis: usize, dimension: usize },

    #[error("grid resolution must be positive")]
    EmptyGrid,

    /// Every sample was NaN, so the landscape has no value range.
    #[error("landscape has no defined value range: every sample is NaN")]
    UndefinedRange,

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
