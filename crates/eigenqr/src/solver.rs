use num_traits::Float;

use crate::config::SolverConfig;
use crate::eigen::{extract_eigenvalues, Eigenvalue};
use crate::error::{EigenError, Result};
use crate::iteration::{QrIteration, QrWorkspace};
use crate::math::Matrix;

/// Run the full pipeline on `matrix`: QR iteration followed by extraction.
///
/// The matrix is consumed as the working copy. Scratch storage for `Q` and
/// `R` is allocated up front and released before returning.
pub fn solve<T: Float>(mut matrix: Matrix<T>, config: &SolverConfig) -> Result<Vec<Eigenvalue<T>>> {
    let (rows, cols) = matrix.shape();
    if rows != cols {
        return Err(EigenError::invalid_data(format!(
            "expected a square matrix, got {}x{}",
            rows, cols
        )));
    }
    if rows == 0 {
        return Err(EigenError::invalid_data("matrix dimension must be positive"));
    }

    let mut workspace = QrWorkspace::allocate(rows)?;
    QrIteration::new(config.iterations).run(&mut matrix, &mut workspace);
    workspace.release();

    let eigenvalues = extract_eigenvalues(&matrix, config.epsilon, config.mode);
    log::debug!(
        "Extracted {} eigenvalues ({} output lines) from a {}x{} matrix",
        eigenvalues.len(),
        eigenvalues.iter().map(Eigenvalue::multiplicity).sum::<usize>(),
        rows,
        cols
    );
    matrix.release();
    Ok(eigenvalues)
}
