//! Errors reported by the chain accessors, the pose solver and the preset lookup

use std::fmt;

/// Validation failure of a solver call or a chain/preset lookup. All of these are
/// reported before any computation, so no partial output is ever produced.
#[derive(Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// Angle or parameter vector has the wrong number of elements.
    Shape { expected: usize, found: usize },
    /// NaN or infinity at the given position of the input vector.
    NonFinite { index: usize, value: f64 },
    /// Joint or link index outside 0..count.
    IndexOutOfRange { index: usize, count: usize },
    /// No preset with this name.
    PresetNotFound(String),
    /// No value of this parameter keeps the joints it drives within their limits.
    LimitsUnreachable { index: usize },
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            KinematicsError::Shape { expected, found } =>
                write!(f, "Shape error: expected {} values, found {}", expected, found),
            KinematicsError::NonFinite { index, value } =>
                write!(f, "Non-finite value {} at position {}", value, index),
            KinematicsError::IndexOutOfRange { index, count } =>
                write!(f, "Index {} out of range, must be below {}", index, count),
            KinematicsError::PresetNotFound(ref name) =>
                write!(f, "Preset not found: {}", name),
            KinematicsError::LimitsUnreachable { index } =>
                write!(f, "No value at position {} keeps the joints within limits", index),
        }
    }
}

impl std::error::Error for KinematicsError {}
