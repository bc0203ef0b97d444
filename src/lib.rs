//! Input normalization and conditional statistics for active subspace
//! analysis.
//!
//! Dimension-reduction machinery (gradient sampling, subspace estimation,
//! response surfaces) expects inputs on a canonical reference domain. This
//! crate performs that mapping exactly and invertibly, validates the
//! shapes flowing into every downstream stage, and estimates per-group
//! conditional moments used to judge how well a reduced coordinate
//! explains a function's variation.
//!
//! # Quick Start
//!
//! ```
//! use active_subspaces::prelude::*;
//!
//! // Inputs live in the hyperrectangle [0, 2] x [-1, 1].
//! let normalizer = BoundedNormalizer::new(&[0.0, -1.0], &[2.0, 1.0]).unwrap();
//!
//! let x = Matrix::from_vec(2, 2, vec![
//!     0.0, -1.0,
//!     2.0, 1.0,
//! ]).unwrap();
//!
//! // Bounds map exactly to the corners of [-1, 1]^2.
//! let z = normalizer.normalize(&x).unwrap();
//! assert!((z.get(0, 0) + 1.0).abs() < 1e-12);
//! assert!((z.get(1, 1) - 1.0).abs() < 1e-12);
//!
//! // The mapping is exactly invertible.
//! let back = normalizer.unnormalize(&z).unwrap();
//! assert!((back.get(1, 0) - 2.0).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`inputs`]: Shape validation and 2-D coercion for input/output arrays
//! - [`normalize`]: Bounded (affine) and unbounded (whitening) normalizers
//! - [`stats`]: Conditional expectation/variance estimation over group labels
//!
//! Sampling schemes, eigendecomposition-based subspace estimation,
//! response-surface fitting, and orchestration are external collaborators
//! and live outside this crate.

pub mod error;
pub mod inputs;
pub mod normalize;
pub mod prelude;
pub mod primitives;
pub mod stats;
pub mod traits;

pub use error::{Result, SubspaceError};
pub use primitives::{Matrix, Vector};
pub use traits::Normalizer;
