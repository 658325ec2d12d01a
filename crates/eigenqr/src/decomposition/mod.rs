//! QR decomposition of square matrices.
pub mod gram_schmidt;

pub use gram_schmidt::{decompose, decompose_into, QrDecomposition};
