//! Error types for overlap tracking

use thiserror::Error;

/// Result type alias for the tracking library
pub type Result<T> = std::result::Result<T, TrackingError>;

/// Errors that can occur while matching two label frames
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackingError {
    #[error("Label grids differ in shape: first frame is {first:?}, second frame is {second:?}")]
    ShapeMismatch { first: Vec<usize>, second: Vec<usize> },
}

impl TrackingError {
    pub fn shape_mismatch(first: &[usize], second: &[usize]) -> Self {
        Self::ShapeMismatch {
            first: first.to_vec(),
            second: second.to_vec(),
        }
    }
}
