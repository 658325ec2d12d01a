//! eigenqr: eigenvalues of real square matrices by unshifted QR iteration.
//!
//! The pipeline decomposes the working matrix with classical Gram-Schmidt,
//! recombines it as `R * Q` for a fixed number of rounds and then reads the
//! eigenvalues off the (quasi-)triangular result: real values from the
//! diagonal, complex-conjugate pairs from undecoupled 2x2 blocks.
//!
//! The crate is split into small modules: the dense [`math::Matrix`] type and
//! its product, the QR [`decomposition`], the [`iteration`] driver, the
//! eigenvalue [`eigen`] extractor, and plain-text stream [`io`].
pub mod config;
pub mod decomposition;
pub mod eigen;
pub mod error;
pub mod io;
pub mod iteration;
pub mod math;
pub mod solver;

pub use config::{ExtractionMode, SolverConfig};
pub use eigen::Eigenvalue;
pub use error::{EigenError, Result};
pub use math::Matrix;
pub use solver::solve;
