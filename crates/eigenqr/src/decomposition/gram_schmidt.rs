//! Classical Gram-Schmidt QR decomposition.
//!
//! Columns are processed left to right. Column `j` is normalized first and
//! only then projected out of every later column, so the coefficients in row
//! `j` of `R` are always taken against the already normalized column.
use num_traits::Float;

use crate::error::Result;
use crate::math::Matrix;

/// Owned result of [`decompose`].
#[derive(Clone, Debug)]
pub struct QrDecomposition<T = f64> {
    pub q: Matrix<T>,
    pub r: Matrix<T>,
}

fn column_norm<T: Float>(m: &Matrix<T>, col: usize) -> T {
    let mut sum = T::zero();
    for row in 0..m.nrows() {
        let v = m[(row, col)];
        sum = sum + v * v;
    }
    sum.sqrt()
}

fn column_dot<T: Float>(m: &Matrix<T>, lhs: usize, rhs: usize) -> T {
    let mut sum = T::zero();
    for row in 0..m.nrows() {
        sum = sum + m[(row, lhs)] * m[(row, rhs)];
    }
    sum
}

/// Decompose the square matrix `a` into the preallocated `q` and `r`.
///
/// `q` ends up with orthonormal columns (up to the usual loss of
/// orthogonality of the classical method) and the upper triangle of `r`
/// holds the coefficients, so that `a ≈ q * r`. Entries of `r` below the
/// diagonal are never written.
///
/// A column whose norm is exactly zero is left as is: it is not normalized
/// and nothing is projected out of later columns, and its row of `r` is
/// zero. This is the only degenerate case handled; near-singular inputs just
/// lose precision.
pub fn decompose_into<T: Float>(a: &Matrix<T>, q: &mut Matrix<T>, r: &mut Matrix<T>) {
    assert!(a.is_square(), "QR decomposition requires a square matrix");
    let n = a.nrows();
    assert_eq!(r.as_slice().len(), n * n, "R must hold {}x{} elements", n, n);
    r.set_shape(n, n);
    q.copy_from(a);

    for j in 0..n {
        let norm = column_norm(q, j);
        r[(j, j)] = norm;

        if norm == T::zero() {
            for i in j + 1..n {
                r[(j, i)] = T::zero();
            }
            continue;
        }

        for row in 0..n {
            q[(row, j)] = q[(row, j)] / norm;
        }

        for i in j + 1..n {
            let coefficient = column_dot(q, j, i);
            r[(j, i)] = coefficient;
            for row in 0..n {
                q[(row, i)] = q[(row, i)] - q[(row, j)] * coefficient;
            }
        }
    }
}

/// Allocate `Q` and `R` and decompose `a`.
pub fn decompose<T: Float>(a: &Matrix<T>) -> Result<QrDecomposition<T>> {
    let n = a.nrows();
    let mut q = Matrix::allocate(n, n)?;
    let mut r = Matrix::allocate(n, n)?;
    decompose_into(a, &mut q, &mut r);
    Ok(QrDecomposition { q, r })
}
