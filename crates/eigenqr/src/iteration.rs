//! Unshifted QR iteration.
use num_traits::Float;

use crate::config::DEFAULT_ITERATIONS;
use crate::decomposition::decompose_into;
use crate::error::Result;
use crate::math::{multiply_into, Matrix};

/// Scratch `Q` and `R` matrices reused by every round.
#[derive(Debug)]
pub struct QrWorkspace<T = f64> {
    q: Matrix<T>,
    r: Matrix<T>,
}

impl<T: Float> QrWorkspace<T> {
    pub fn allocate(n: usize) -> Result<Self> {
        Ok(Self {
            q: Matrix::allocate(n, n)?,
            r: Matrix::allocate(n, n)?,
        })
    }

    pub fn q(&self) -> &Matrix<T> {
        &self.q
    }

    pub fn r(&self) -> &Matrix<T> {
        &self.r
    }

    pub fn release(self) {
        self.q.release();
        self.r.release();
    }
}

/// Fixed-round QR iteration driver.
///
/// There is no convergence test: the round count alone bounds the work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrIteration {
    pub rounds: usize,
}

impl Default for QrIteration {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ITERATIONS,
        }
    }
}

impl QrIteration {
    pub fn new(rounds: usize) -> Self {
        Self { rounds }
    }

    /// Overwrite `a` with `R * Q` of its own decomposition, `rounds` times.
    pub fn run<T: Float>(&self, a: &mut Matrix<T>, workspace: &mut QrWorkspace<T>) {
        let (n, _) = a.shape();
        log::debug!("Running {} QR rounds on a {}x{} matrix", self.rounds, n, n);

        for _ in 0..self.rounds {
            decompose_into(a, &mut workspace.q, &mut workspace.r);
            multiply_into(&workspace.r, &workspace.q, a);
        }

        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "Largest sub-diagonal magnitude after iteration: {:e}",
                subdiagonal_residual(a).to_f64().unwrap_or(f64::NAN)
            );
        }
    }
}

/// Largest `|A[i+1, i]|`, a rough indicator of how triangular `a` is.
pub fn subdiagonal_residual<T: Float>(a: &Matrix<T>) -> T {
    let n = a.nrows().min(a.ncols());
    (1..n)
        .map(|i| a[(i, i - 1)].abs())
        .fold(T::zero(), |acc, v| if v > acc { v } else { acc })
}
