use num_traits::Zero;
use std::ops::Mul;

use crate::error::Result;
use crate::math::Matrix;

/// Compute `out = a * b` with the textbook triple loop.
///
/// `a` is `p x q`, `b` is `q x r` and `out` must already hold `p * r`
/// elements; its shape is set to `p x r`. Mismatched operands are a caller
/// bug and panic.
pub fn multiply_into<T>(a: &Matrix<T>, b: &Matrix<T>, out: &mut Matrix<T>)
where
    T: Copy + Zero + Mul<Output = T>,
{
    let (p, q) = a.shape();
    let (q_b, r) = b.shape();
    assert_eq!(q, q_b, "inner dimensions do not match: {}x{} * {}x{}", p, q, q_b, r);
    out.set_shape(p, r);

    for i in 0..p {
        let a_row = a.row_slice(i);
        for j in 0..r {
            let mut sum = T::zero();
            for (k, &a_ik) in a_row.iter().enumerate() {
                sum = sum + a_ik * b[(k, j)];
            }
            out[(i, j)] = sum;
        }
    }
}

/// Allocate the output and compute `a * b`.
pub fn multiply<T>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>>
where
    T: Copy + Zero + Mul<Output = T>,
{
    let mut out = Matrix::allocate(a.nrows(), b.ncols())?;
    multiply_into(a, b, &mut out);
    Ok(out)
}
