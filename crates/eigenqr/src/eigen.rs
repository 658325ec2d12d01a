//! Eigenvalue extraction from a (quasi-)upper-triangular matrix.
use num_traits::Float;

use crate::config::ExtractionMode;
use crate::math::Matrix;

/// One eigenvalue read off the iterated matrix.
///
/// A complex value stands for the conjugate pair `re ± im·i`; only the
/// non-negative imaginary part is stored and both members are always
/// reported together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Eigenvalue<T = f64> {
    Real(T),
    Complex { re: T, im: T },
}

impl<T: Float> Eigenvalue<T> {
    pub fn re(&self) -> T {
        match *self {
            Eigenvalue::Real(v) => v,
            Eigenvalue::Complex { re, .. } => re,
        }
    }

    pub fn im(&self) -> T {
        match *self {
            Eigenvalue::Real(_) => T::zero(),
            Eigenvalue::Complex { im, .. } => im,
        }
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Eigenvalue::Real(_))
    }

    /// Number of output lines this value produces (2 for a conjugate pair).
    pub fn multiplicity(&self) -> usize {
        match self {
            Eigenvalue::Real(_) => 1,
            Eigenvalue::Complex { .. } => 2,
        }
    }
}

fn is_negligible<T: Float>(value: T, epsilon: f64) -> bool {
    value.abs().to_f64().map_or(false, |v| v < epsilon)
}

/// Roots of the 2x2 block `[[a, b], [c, d]]`.
fn block_eigenvalues<T: Float>(a: T, b: T, c: T, d: T, mode: ExtractionMode, out: &mut Vec<Eigenvalue<T>>) {
    let two = T::one() + T::one();
    let m = (a + d) / two;
    let p = a * d - b * c;
    let discriminant = m * m - p;

    match mode {
        ExtractionMode::Corrected if discriminant >= T::zero() => {
            let root = discriminant.sqrt();
            out.push(Eigenvalue::Real(m + root));
            out.push(Eigenvalue::Real(m - root));
        }
        _ => out.push(Eigenvalue::Complex {
            re: m,
            im: discriminant.abs().sqrt(),
        }),
    }
}

/// Scan the diagonal of `a` and classify each position.
///
/// At index `i` the sub-diagonal entry `a[i+1, i]` decides: below `epsilon`
/// (absolute) the diagonal entry is a real eigenvalue and the scan moves one
/// step; otherwise rows `i, i+1` form a 2x2 block and the scan moves two.
/// How blocks and the final diagonal entry are reported depends on `mode`,
/// see [`ExtractionMode`].
pub fn extract_eigenvalues<T: Float>(
    a: &Matrix<T>,
    epsilon: f64,
    mode: ExtractionMode,
) -> Vec<Eigenvalue<T>> {
    assert!(a.is_square(), "eigenvalues require a square matrix");
    let n = a.nrows();
    if n == 0 {
        return Vec::new();
    }

    let mut values = Vec::with_capacity(n);
    let mut last_was_block = false;
    let mut i = 0;
    while i + 1 < n {
        if is_negligible(a[(i + 1, i)], epsilon) {
            values.push(Eigenvalue::Real(a[(i, i)]));
            last_was_block = false;
            i += 1;
        } else {
            block_eigenvalues(
                a[(i, i)],
                a[(i, i + 1)],
                a[(i + 1, i)],
                a[(i + 1, i + 1)],
                mode,
                &mut values,
            );
            last_was_block = true;
            i += 2;
        }
    }

    let emit_last = match mode {
        ExtractionMode::Legacy => !last_was_block,
        ExtractionMode::Corrected => i == n - 1,
    };
    if emit_last {
        values.push(Eigenvalue::Real(a[(n - 1, n - 1)]));
    }
    values
}
