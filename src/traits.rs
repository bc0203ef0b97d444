//! Core traits for input normalization.
//!
//! These traits define the API contracts shared by the normalization
//! strategies.

use crate::error::Result;
use crate::primitives::Matrix;

/// Maps input points between their native domain and a canonical
/// reference domain, exactly and invertibly.
///
/// Implementations are constructed once from domain or distribution
/// parameters and are thereafter pure functions of that fixed state, so
/// shared references may be used concurrently without synchronization.
/// The two strategies in this crate are
/// [`BoundedNormalizer`](crate::normalize::BoundedNormalizer) for
/// hyperrectangle domains and
/// [`UnboundedNormalizer`](crate::normalize::UnboundedNormalizer) for
/// Gaussian-distributed inputs; no other strategies are needed.
///
/// # Examples
///
/// ```
/// use active_subspaces::prelude::*;
///
/// let normalizer = BoundedNormalizer::new(&[0.0, -1.0], &[2.0, 3.0]).unwrap();
/// let x = Matrix::from_vec(1, 2, vec![1.0, 1.0]).unwrap();
///
/// let z = normalizer.normalize(&x).unwrap();
/// let back = normalizer.unnormalize(&z).unwrap();
/// assert!((back.get(0, 0) - 1.0).abs() < 1e-12);
/// ```
pub trait Normalizer {
    /// Maps points from the native domain to the reference domain.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` fails shape validation or its column count
    /// does not match the normalizer's dimension.
    fn normalize(&self, x: &Matrix<f64>) -> Result<Matrix<f64>>;

    /// Maps points from the reference domain back to the native domain.
    ///
    /// Exact algebraic inverse of [`normalize`](Normalizer::normalize) for
    /// any input, to floating-point precision.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` fails shape validation or its column count
    /// does not match the normalizer's dimension.
    fn unnormalize(&self, x: &Matrix<f64>) -> Result<Matrix<f64>>;
}
