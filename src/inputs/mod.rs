//! Shape validation and coercion for input and output arrays.
//!
//! Every numerical routine in this crate (and its downstream consumers)
//! expects inputs as an M-by-m matrix of points and outputs as an M-by-1
//! column of scalar function values. This module rejects malformed arrays
//! before any expensive computation runs and promotes scalars and 1-D
//! sequences to a 2-D layout.
//!
//! # Example
//!
//! ```
//! use active_subspaces::inputs::{validate_inputs, validate_inputs_outputs};
//! use active_subspaces::primitives::Matrix;
//!
//! let x = Matrix::from_vec(3, 2, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).expect("valid matrix dimensions");
//! let f = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).expect("valid matrix dimensions");
//!
//! let (m_rows, m_cols) = validate_inputs(&x).expect("x is a valid input matrix");
//! assert_eq!((m_rows, m_cols), (3, 2));
//!
//! let (m_rows, m_cols) = validate_inputs_outputs(&x, &f).expect("f pairs with x");
//! assert_eq!((m_rows, m_cols), (3, 2));
//! ```

use crate::error::{Result, SubspaceError};
use crate::primitives::Matrix;
use std::str::FromStr;

/// Checks a matrix of input points for the right shape.
///
/// Returns the dimensions `(M, m)` of the validated matrix. `M == 0` (no
/// points) is allowed; `m == 0` (points with no coordinates) is not a
/// usable input space and is the one degenerate shape the [`Matrix`] type
/// still admits.
///
/// # Errors
///
/// Returns [`SubspaceError::Shape`] if the matrix has zero columns.
pub fn validate_inputs(x: &Matrix<f64>) -> Result<(usize, usize)> {
    let (rows, cols) = x.shape();
    if cols == 0 {
        return Err(SubspaceError::shape("M x m with m >= 1", rows, cols));
    }
    Ok((rows, cols))
}

/// Checks a matrix of input points and a column of outputs for the right
/// shapes.
///
/// The outputs `f` must pair with `x`: one row per input point, exactly
/// one column. Returns the dimensions `(M, m)` of the input matrix.
///
/// # Errors
///
/// - [`SubspaceError::Shape`] if `x` or `f` has zero columns.
/// - [`SubspaceError::CountMismatch`] if row counts of `x` and `f` differ.
/// - [`SubspaceError::NonScalarOutput`] if `f` has more than one column.
pub fn validate_inputs_outputs(x: &Matrix<f64>, f: &Matrix<f64>) -> Result<(usize, usize)> {
    let (rows, cols) = validate_inputs(x)?;

    let (f_rows, f_cols) = f.shape();
    if f_cols == 0 {
        return Err(SubspaceError::shape("M x 1", f_rows, f_cols));
    }
    if f_rows != rows {
        return Err(SubspaceError::CountMismatch {
            inputs: rows,
            outputs: f_rows,
        });
    }
    if f_cols != 1 {
        return Err(SubspaceError::NonScalarOutput { cols: f_cols });
    }

    Ok((rows, cols))
}

/// Axis along which a 1-D sequence is expanded to a 2-D array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Expand to a 1-by-n row.
    Row,
    /// Expand to an n-by-1 column.
    Col,
}

impl FromStr for Axis {
    type Err = SubspaceError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "row" => Ok(Axis::Row),
            "col" => Ok(Axis::Col),
            other => Err(SubspaceError::InvalidParameter {
                param: "axis".to_string(),
                value: other.to_string(),
                constraint: "'row' or 'col'".to_string(),
            }),
        }
    }
}

/// Promotes a scalar or 1-D sequence to a 2-D array along the given axis.
///
/// A scalar is a length-1 slice; matrices are already 2-D and need no
/// coercion.
#[must_use]
pub fn atleast_2d(a: &[f64], axis: Axis) -> Matrix<f64> {
    let n = a.len();
    let (rows, cols) = match axis {
        Axis::Row => (1, n),
        Axis::Col => (n, 1),
    };
    Matrix::from_vec(rows, cols, a.to_vec()).expect("slice length matches rows * cols")
}

/// Returns the input as a 2-D row array.
#[must_use]
pub fn atleast_2d_row(a: &[f64]) -> Matrix<f64> {
    atleast_2d(a, Axis::Row)
}

/// Returns the input as a 2-D column array.
#[must_use]
pub fn atleast_2d_col(a: &[f64]) -> Matrix<f64> {
    atleast_2d(a, Axis::Col)
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
