use thiserror::Error;

/// Broad classification of a [`VRError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An input violated a documented domain constraint.
    Validation,
    /// A numeric value was physically impossible (negative energy, below absolute zero).
    Computation,
    /// A module that has not been built yet was invoked.
    Unimplemented,
    /// Configuration could not be read or parsed.
    Config,
    Other,
}

/// Error type for invalid operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VRError {
    #[error("{0}")]
    Error(String),
    #[error("{name} out of bounds: {value} is not within [{lower}, {upper}]")]
    OutOfBounds {
        name: String,
        value: f64,
        lower: f64,
        upper: f64,
    },
    #[error("Shape mismatch for {name}. Expected {expected}, got {actual}")]
    ShapeMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("Missing input variable: {0}")]
    MissingInput(String),
    #[error("Invalid value for {name}: {reason}")]
    Computation { name: String, reason: String },
    #[error("{0} is not implemented")]
    Unimplemented(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl VRError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VRError::OutOfBounds { .. } | VRError::ShapeMismatch { .. } | VRError::MissingInput(_) => {
                ErrorKind::Validation
            }
            VRError::Computation { .. } => ErrorKind::Computation,
            VRError::Unimplemented(_) => ErrorKind::Unimplemented,
            VRError::Config(_) => ErrorKind::Config,
            VRError::Error(_) => ErrorKind::Other,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}

/// Convenience type for `Result<T, VRError>`.
pub type VRResult<T> = Result<T, VRError>;

/// Check that `value` lies within the closed interval `[lower, upper]`.
///
/// NaN is always rejected.
pub fn check_bounds(name: &str, value: f64, lower: f64, upper: f64) -> VRResult<()> {
    if value >= lower && value <= upper {
        Ok(())
    } else {
        Err(VRError::OutOfBounds {
            name: name.to_string(),
            value,
            lower,
            upper,
        })
    }
}

/// Check that `value` is finite and not negative.
pub fn check_non_negative(name: &str, value: f64) -> VRResult<()> {
    if !value.is_finite() {
        return Err(VRError::Computation {
            name: name.to_string(),
            reason: format!("expected a finite value, got {}", value),
        });
    }
    if value < 0.0 {
        return Err(VRError::Computation {
            name: name.to_string(),
            reason: format!("expected a non-negative value, got {}", value),
        });
    }
    Ok(())
}
