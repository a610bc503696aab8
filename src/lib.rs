use std::error;
use std::fmt;

pub mod centre;
pub mod dataload;
pub mod initializer;
pub mod network;
pub mod trainer;

/// An error raised while constructing or training a network.
#[derive(Debug, Clone)]
pub enum RbfError {
    /// A hyperparameter which must be strictly positive was not.
    Config { param: &'static str, value: f64 },
    /// Fewer centre vectors than hidden units, or an empty dataset.
    InsufficientData { required: usize, available: usize },
    /// A pattern or target vector of the wrong length.
    DimensionMismatch { expected: usize, found: usize },
    /// A spread update drove the spread to zero or below, which would make
    /// every later activation divide by a non-positive value. Fatal, never
    /// clamped.
    SpreadCollapsed { spread: f64 },
}

impl error::Error for RbfError {}
impl fmt::Display for RbfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RbfError::Config { param, value } => f.write_fmt(format_args!(
                "Parameter {} must be positive but was {}.",
                param, value,
            )),
            RbfError::InsufficientData {
                required,
                available,
            } => f.write_fmt(format_args!(
                "Expected at least {} entries but only {} were supplied.",
                required, available,
            )),
            RbfError::DimensionMismatch { expected, found } => f.write_fmt(format_args!(
                "Expected a vector of length {} but received one of length {}.",
                expected, found,
            )),
            RbfError::SpreadCollapsed { spread } => f.write_fmt(format_args!(
                "A spread update produced {}; spreads must stay positive.",
                spread,
            )),
        }
    }
}
