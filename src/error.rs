//! Error types for checked spring construction and noise generation.
//!
//! The tracking operations themselves never fail; these errors only come out
//! of the validating constructors and the noise boundary.

use core::fmt;

/// Errors reported by the checked entry points.
#[derive(Debug, Clone, PartialEq)]
pub enum SpringError {
    /// Frequency must be finite and non-negative.
    InvalidFrequency,
    /// Damping ratio must be finite and non-negative.
    InvalidDampingRatio,
    /// Half-life must be finite and non-negative.
    InvalidHalfLife,
    /// Tolerances must be finite and non-negative.
    InvalidEpsilon,
    /// Output buffer length does not match the requested shape.
    ShapeMismatch { expected: usize, actual: usize },
    /// Every extent of a noise shape must be at least one.
    EmptyShape,
    /// The cell count of a noise shape does not fit in `usize`.
    ShapeOverflow,
}

impl fmt::Display for SpringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpringError::InvalidFrequency => write!(f, "frequency must be finite and non-negative"),
            SpringError::InvalidDampingRatio => {
                write!(f, "damping ratio must be finite and non-negative")
            }
            SpringError::InvalidHalfLife => write!(f, "half-life must be finite and non-negative"),
            SpringError::InvalidEpsilon => write!(f, "epsilon must be finite and non-negative"),
            SpringError::ShapeMismatch { expected, actual } => {
                write!(f, "shape holds {} vectors but output has {}", expected, actual)
            }
            SpringError::EmptyShape => write!(f, "noise shape has a zero extent"),
            SpringError::ShapeOverflow => write!(f, "noise shape cell count overflows usize"),
        }
    }
}

impl core::error::Error for SpringError {}
