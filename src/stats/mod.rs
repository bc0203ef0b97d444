//! Conditional statistics of function values over discrete group labels.
//!
//! Used to assess how well a candidate reduced coordinate explains the
//! variation of a function: evaluations sharing an active-variable bucket
//! are aggregated into a per-bucket mean and variance.

use crate::error::{Result, SubspaceError};
use crate::primitives::{Matrix, Vector};

/// Log target for the diagnostic emitted by [`conditional_expectations`].
///
/// The embedding application owns the subscriber; this crate only emits
/// through the `tracing` facade.
pub const LOG_TARGET: &str = "active_subspaces";

/// Computes conditional expectations and variances for a set of function
/// values.
///
/// `f` is an M-by-1 column of scalar function evaluations; `ind` assigns
/// each evaluation a nonnegative group label, where equal labels mean
/// equal values of the active variable. With `n = max(ind) + 1`, returns
/// `(Ef, Vf)` of length n: the arithmetic mean and population variance
/// (divide by count, not count - 1) of the values in each group
/// `0..n - 1`.
///
/// A label in `0..n - 1` with no members yields NaN mean and variance for
/// that group rather than an error; downstream consumers are expected to
/// tolerate NaN. Empty `f` and `ind` yield empty result vectors.
///
/// Emits one informational `tracing` record per call under
/// [`LOG_TARGET`], reporting n and the population of group 0 (a proxy for
/// Monte Carlo samples per conditional slice).
///
/// # Errors
///
/// - [`SubspaceError::NonScalarOutput`] if `f` has more than one column.
/// - [`SubspaceError::Shape`] if `f` has zero columns.
/// - [`SubspaceError::CountMismatch`] if `ind` and `f` disagree in length.
///
/// # Examples
///
/// ```
/// use active_subspaces::prelude::*;
/// use active_subspaces::stats::conditional_expectations;
///
/// let f = Matrix::from_vec(4, 1, vec![1.0, 2.0, 3.0, 4.0]).expect("valid matrix dimensions");
/// let (ef, vf) = conditional_expectations(&f, &[0, 0, 1, 1]).expect("labels pair with f");
///
/// assert!((ef[0] - 1.5).abs() < 1e-12);
/// assert!((ef[1] - 3.5).abs() < 1e-12);
/// assert!((vf[0] - 0.25).abs() < 1e-12);
/// assert!((vf[1] - 0.25).abs() < 1e-12);
/// ```
pub fn conditional_expectations(
    f: &Matrix<f64>,
    ind: &[usize],
) -> Result<(Vector<f64>, Vector<f64>)> {
    let (rows, cols) = f.shape();
    if cols == 0 {
        return Err(SubspaceError::shape("M x 1", rows, cols));
    }
    if cols != 1 {
        return Err(SubspaceError::NonScalarOutput { cols });
    }
    if ind.len() != rows {
        return Err(SubspaceError::CountMismatch {
            inputs: rows,
            outputs: ind.len(),
        });
    }

    let n = ind.iter().max().map_or(0, |&i| i + 1);
    let nmc = ind.iter().filter(|&&i| i == 0).count();
    tracing::info!(
        target: LOG_TARGET,
        "Computing {} conditional averages with {} MC samples.",
        n,
        nmc
    );

    let mut ef = vec![0.0; n];
    let mut vf = vec![0.0; n];
    for i in 0..n {
        let fi: Vec<f64> = ind
            .iter()
            .zip(f.as_slice().iter())
            .filter(|(&label, _)| label == i)
            .map(|(_, &value)| value)
            .collect();
        let fi = Vector::from_vec(fi);
        // An empty group yields NaN (0/0), never an error.
        ef[i] = fi.mean();
        vf[i] = fi.variance();
    }

    Ok((Vector::from_vec(ef), Vector::from_vec(vf)))
}
