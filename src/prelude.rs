//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use active_subspaces::prelude::*;
//! ```

pub use crate::error::{Result, SubspaceError};
pub use crate::inputs::{validate_inputs, validate_inputs_outputs};
pub use crate::normalize::{BoundedNormalizer, UnboundedNormalizer};
pub use crate::primitives::{Matrix, Vector};
pub use crate::stats::conditional_expectations;
pub use crate::traits::Normalizer;
