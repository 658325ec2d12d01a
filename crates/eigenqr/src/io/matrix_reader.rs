//! Whitespace-separated matrix reader.
use std::io::Read;
use std::str::SplitWhitespace;

use crate::error::{EigenError, Result};
use crate::math::Matrix;

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    consumed: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
            consumed: 0,
        }
    }

    fn next_token(&mut self) -> Option<&'a str> {
        let token = self.inner.next()?;
        self.consumed += 1;
        Some(token)
    }

    /// Collect at most `limit` further tokens; fewer when the input runs out.
    fn take_up_to(&mut self, limit: usize) -> Vec<&'a str> {
        let taken: Vec<&'a str> = self.inner.by_ref().take(limit).collect();
        self.consumed += taken.len();
        taken
    }
}

/// Read a square matrix: the dimension `n` followed by `n * n` values in
/// row-major order. Tokens after the last value are ignored.
///
/// A dimension whose element count overflows is [`EigenError::OutOfMemory`].
/// The value tokens are counted before the matrix is allocated, so a large
/// dimension with too few values is [`EigenError::InvalidData`] and never
/// touches the allocator. Everything else wrong with the input is
/// [`EigenError::InvalidData`].
pub fn read_matrix<R: Read>(mut reader: R) -> Result<Matrix<f64>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = std::str::from_utf8(&bytes)
        .map_err(|e| EigenError::invalid_data(format!("input is not valid UTF-8 ({})", e)))?;
    let mut tokens = Tokens::new(text);

    let dimension = tokens
        .next_token()
        .ok_or_else(|| EigenError::invalid_data("missing matrix dimension"))?;
    let n = dimension.parse::<usize>().map_err(|_| {
        EigenError::invalid_data(format!("invalid matrix dimension '{}'", dimension))
    })?;
    if n == 0 {
        return Err(EigenError::invalid_data("matrix dimension must be positive"));
    }
    let expected = n
        .checked_mul(n)
        .ok_or(EigenError::OutOfMemory { rows: n, cols: n })?;

    let first_value = tokens.consumed + 1;
    let values = tokens.take_up_to(expected);
    if values.len() < expected {
        return Err(EigenError::invalid_data(format!(
            "expected {} values for a {}x{} matrix, found {}",
            expected,
            n,
            n,
            values.len()
        )));
    }

    let mut matrix = Matrix::allocate(n, n)?;
    for (index, (slot, token)) in matrix.as_mut_slice().iter_mut().zip(&values).enumerate() {
        *slot = token.parse::<f64>().map_err(|_| {
            EigenError::invalid_data(format!(
                "invalid number '{}' at token {}",
                token,
                first_value + index
            ))
        })?;
    }

    log::debug!("Read a {}x{} matrix ({} tokens)", n, n, tokens.consumed);
    Ok(matrix)
}
