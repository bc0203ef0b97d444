//! Normalization strategies for bounded and unbounded input domains.
//!
//! Downstream subspace estimation works on a canonical reference domain:
//! the symmetric cube [-1, 1]^m for bounded inputs, or standard-normal
//! coordinates for Gaussian inputs. The two normalizers here perform that
//! mapping exactly and invertibly.
//!
//! # Example
//!
//! ```
//! use active_subspaces::prelude::*;
//!
//! // A 2-D hyperrectangle [0, 2] x [-1, 3].
//! let normalizer = BoundedNormalizer::new(&[0.0, -1.0], &[2.0, 3.0]).expect("lb < ub");
//!
//! let x = Matrix::from_vec(2, 2, vec![
//!     0.0, -1.0,
//!     2.0, 3.0,
//! ]).expect("valid matrix dimensions");
//!
//! let z = normalizer.normalize(&x).expect("x has 2 columns");
//! // Lower bounds map to -1, upper bounds to +1.
//! assert!((z.get(0, 0) + 1.0).abs() < 1e-12);
//! assert!((z.get(1, 1) - 1.0).abs() < 1e-12);
//! ```

use crate::error::{Result, SubspaceError};
use crate::inputs::validate_inputs;
use crate::primitives::Matrix;
use crate::traits::Normalizer;
use serde::{Deserialize, Serialize};

/// Affine rescaling of a hyperrectangle [lb, ub] to the symmetric cube
/// [-1, 1]^m.
///
/// The bounds are fixed at construction; `normalize` and `unnormalize`
/// are exact algebraic inverses of each other for any input, not only
/// points inside the hyperrectangle.
///
/// # Example
///
/// ```
/// use active_subspaces::prelude::*;
///
/// let normalizer = BoundedNormalizer::new(&[-5.0], &[5.0]).expect("lb < ub");
/// let x = Matrix::from_vec(1, 1, vec![0.0]).expect("valid matrix dimensions");
/// let z = normalizer.normalize(&x).expect("x has 1 column");
/// assert!(z.get(0, 0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundedNormalizer {
    /// Lower bounds, one per input coordinate.
    lb: Vec<f64>,
    /// Upper bounds, one per input coordinate.
    ub: Vec<f64>,
}

impl BoundedNormalizer {
    /// Creates a normalizer for the hyperrectangle with the given bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the bound vectors are empty or differ in
    /// length, or if `lb[j] >= ub[j]` for any coordinate (a degenerate
    /// coordinate would divide by zero in `normalize`).
    pub fn new(lb: &[f64], ub: &[f64]) -> Result<Self> {
        if lb.is_empty() || lb.len() != ub.len() {
            return Err(SubspaceError::Shape {
                expected: format!("lb and ub of equal length >= 1 (lb has {})", lb.len()),
                actual: format!("ub has {}", ub.len()),
            });
        }
        for (j, (&lo, &hi)) in lb.iter().zip(ub.iter()).enumerate() {
            if !(lo < hi) {
                return Err(SubspaceError::InvalidParameter {
                    param: format!("bounds[{j}]"),
                    value: format!("lb = {lo}, ub = {hi}"),
                    constraint: "lb < ub elementwise".to_string(),
                });
            }
        }
        Ok(Self {
            lb: lb.to_vec(),
            ub: ub.to_vec(),
        })
    }

    /// Returns the input-space dimension m.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.lb.len()
    }

    /// Returns the lower bounds.
    #[must_use]
    pub fn lb(&self) -> &[f64] {
        &self.lb
    }

    /// Returns the upper bounds.
    #[must_use]
    pub fn ub(&self) -> &[f64] {
        &self.ub
    }

    fn check_dim(&self, cols: usize) -> Result<()> {
        if cols != self.dim() {
            return Err(SubspaceError::Shape {
                expected: format!("M x {} to match the normalizer bounds", self.dim()),
                actual: format!("M x {cols}"),
            });
        }
        Ok(())
    }
}

impl Normalizer for BoundedNormalizer {
    fn normalize(&self, x: &Matrix<f64>) -> Result<Matrix<f64>> {
        let (rows, cols) = validate_inputs(x)?;
        self.check_dim(cols)?;

        let mut result = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                let scaled = 2.0 * (x.get(i, j) - self.lb[j]) / (self.ub[j] - self.lb[j]) - 1.0;
                result.set(i, j, scaled);
            }
        }
        Ok(result)
    }

    fn unnormalize(&self, x: &Matrix<f64>) -> Result<Matrix<f64>> {
        let (rows, cols) = validate_inputs(x)?;
        self.check_dim(cols)?;

        let mut result = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                let raw = (self.ub[j] - self.lb[j]) * (x.get(i, j) + 1.0) / 2.0 + self.lb[j];
                result.set(i, j, raw);
            }
        }
        Ok(result)
    }
}

/// Whitening transform for unbounded Gaussian inputs.
///
/// Built from the mean `mu` and covariance `C` of the input distribution;
/// the Cholesky factor `L` with `L L^T = C` is computed once at
/// construction. `normalize` maps draws from N(mu, C) to (approximately)
/// standard-normal coordinates; `unnormalize` is its exact algebraic
/// inverse for any input.
///
/// # Example
///
/// ```
/// use active_subspaces::prelude::*;
///
/// let c = Matrix::from_vec(2, 2, vec![
///     4.0, 2.0,
///     2.0, 3.0,
/// ]).expect("valid matrix dimensions");
/// let normalizer = UnboundedNormalizer::new(&[1.0, -1.0], &c).expect("C is SPD");
///
/// // The mean maps to the origin.
/// let mu = Matrix::from_vec(1, 2, vec![1.0, -1.0]).expect("valid matrix dimensions");
/// let z = normalizer.normalize(&mu).expect("mu has 2 columns");
/// assert!(z.get(0, 0).abs() < 1e-12);
/// assert!(z.get(0, 1).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnboundedNormalizer {
    /// Mean of the Gaussian input distribution, one entry per coordinate.
    mu: Vec<f64>,
    /// Lower-triangular Cholesky factor of the covariance.
    l: Matrix<f64>,
}

impl UnboundedNormalizer {
    /// Symmetry tolerance for the supplied covariance, relative to the
    /// magnitude of the entries compared.
    const SYMMETRY_RTOL: f64 = 1e-12;

    /// Creates a normalizer for Gaussian inputs with mean `mu` and
    /// covariance `c`.
    ///
    /// # Errors
    ///
    /// Returns [`SubspaceError::Shape`] if `mu` is empty or `c` is not
    /// m-by-m, and [`SubspaceError::Factorization`] if `c` is asymmetric
    /// or not positive definite.
    pub fn new(mu: &[f64], c: &Matrix<f64>) -> Result<Self> {
        let m = mu.len();
        if m == 0 {
            return Err(SubspaceError::Shape {
                expected: "mu of length >= 1".to_string(),
                actual: "length 0".to_string(),
            });
        }
        if c.shape() != (m, m) {
            return Err(SubspaceError::Shape {
                expected: format!("{m} x {m} covariance to match mu"),
                actual: format!("{} x {}", c.n_rows(), c.n_cols()),
            });
        }

        for i in 0..m {
            for j in (i + 1)..m {
                let a = c.get(i, j);
                let b = c.get(j, i);
                let scale = 1.0_f64.max(a.abs()).max(b.abs());
                if (a - b).abs() > Self::SYMMETRY_RTOL * scale {
                    return Err(SubspaceError::Factorization {
                        message: format!(
                            "covariance is not symmetric: C[{i},{j}] = {a}, C[{j},{i}] = {b}"
                        ),
                    });
                }
            }
        }

        let l = c.cholesky().map_err(|e| SubspaceError::Factorization {
            message: e.to_string(),
        })?;

        Ok(Self {
            mu: mu.to_vec(),
            l,
        })
    }

    /// Returns the input-space dimension m.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.mu.len()
    }

    /// Returns the mean of the input distribution.
    #[must_use]
    pub fn mu(&self) -> &[f64] {
        &self.mu
    }

    /// Returns the lower-triangular Cholesky factor of the covariance.
    #[must_use]
    pub fn cholesky_factor(&self) -> &Matrix<f64> {
        &self.l
    }

    fn check_dim(&self, cols: usize) -> Result<()> {
        if cols != self.dim() {
            return Err(SubspaceError::Shape {
                expected: format!("M x {} to match the normalizer mean", self.dim()),
                actual: format!("M x {cols}"),
            });
        }
        Ok(())
    }
}

impl Normalizer for UnboundedNormalizer {
    fn normalize(&self, x: &Matrix<f64>) -> Result<Matrix<f64>> {
        let (rows, cols) = validate_inputs(x)?;
        self.check_dim(cols)?;

        // Solve L z = (x - mu)^T one point at a time. Forward substitution
        // exploits the triangular structure, which keeps unnormalize an
        // exact inverse up to rounding.
        let mut result = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                let mut sum = 0.0;
                for k in 0..j {
                    sum += self.l.get(j, k) * result.get(i, k);
                }
                let centered = x.get(i, j) - self.mu[j];
                result.set(i, j, (centered - sum) / self.l.get(j, j));
            }
        }
        Ok(result)
    }

    fn unnormalize(&self, x: &Matrix<f64>) -> Result<Matrix<f64>> {
        let (rows, cols) = validate_inputs(x)?;
        self.check_dim(cols)?;

        // x L^T + mu; L is lower triangular so the inner sum stops at j.
        let mut result = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                let mut sum = 0.0;
                for k in 0..=j {
                    sum += x.get(i, k) * self.l.get(j, k);
                }
                result.set(i, j, sum + self.mu[j]);
            }
        }
        Ok(result)
    }
}
