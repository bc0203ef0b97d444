//! Core numeric primitives (Vector, Matrix).
//!
//! These types carry all input points and function values flowing through
//! the normalization and conditional-statistics routines.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
