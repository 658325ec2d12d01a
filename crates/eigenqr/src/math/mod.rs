//! Dense matrix storage and the matrix product.
//!
//! `Matrix` is a small row-major container with just the operations the QR
//! pipeline needs. It is kept dependency-light on purpose: only `num-traits`
//! for the zero/one/float bounds.
pub mod matrix;
pub mod multiply;

pub use matrix::{Matrix, ShapeError};
pub use multiply::{multiply, multiply_into};
