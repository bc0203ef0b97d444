//! Error types for active-subspaces operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for active-subspaces operations.
///
/// Provides detailed context about failures including malformed array
/// shapes, mismatched input/output pairs, and covariance matrices that
/// cannot be factored.
///
/// # Examples
///
/// ```
/// use active_subspaces::error::SubspaceError;
///
/// let err = SubspaceError::Shape {
///     expected: "M x m with m >= 1".to_string(),
///     actual: "10 x 0".to_string(),
/// };
/// assert!(err.to_string().contains("shape"));
/// ```
#[derive(Debug)]
pub enum SubspaceError {
    /// An array argument does not have a valid two-dimensional shape.
    Shape {
        /// Expected shape description
        expected: String,
        /// Actual shape found
        actual: String,
    },

    /// Paired input and output arrays disagree in row count.
    CountMismatch {
        /// Rows in the input matrix
        inputs: usize,
        /// Rows in the output vector
        outputs: usize,
    },

    /// An output array has more than one column.
    NonScalarOutput {
        /// Number of columns found
        cols: usize,
    },

    /// A covariance matrix is not symmetric positive definite and cannot
    /// be Cholesky-factored.
    Factorization {
        /// Reason the factorization failed
        message: String,
    },

    /// An enumerated configuration option received an unrecognized value.
    InvalidParameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for SubspaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubspaceError::Shape { expected, actual } => {
                write!(f, "Invalid array shape: expected {expected}, got {actual}")
            }
            SubspaceError::CountMismatch { inputs, outputs } => {
                write!(
                    f,
                    "Different number of inputs and outputs: {inputs} input rows, {outputs} output rows"
                )
            }
            SubspaceError::NonScalarOutput { cols } => {
                write!(
                    f,
                    "Only scalar-valued functions are supported: outputs have {cols} columns"
                )
            }
            SubspaceError::Factorization { message } => {
                write!(f, "Cholesky factorization failed: {message}")
            }
            SubspaceError::InvalidParameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter: {param} = {value}, expected {constraint}"
                )
            }
            SubspaceError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SubspaceError {}

impl From<&str> for SubspaceError {
    fn from(msg: &str) -> Self {
        SubspaceError::Other(msg.to_string())
    }
}

impl From<String> for SubspaceError {
    fn from(msg: String) -> Self {
        SubspaceError::Other(msg)
    }
}

impl SubspaceError {
    /// Create a shape error from observed matrix dimensions.
    #[must_use]
    pub fn shape(expected: &str, rows: usize, cols: usize) -> Self {
        Self::Shape {
            expected: expected.to_string(),
            actual: format!("{rows} x {cols}"),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, SubspaceError>;
