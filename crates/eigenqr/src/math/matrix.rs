use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};
use thiserror::Error;

use crate::error::{EigenError, Result};

/// Dense row-major matrix that exclusively owns its storage.
///
/// `data.len() == rows * cols` holds for every live value. Routines that
/// produce a matrix write into a preallocated output instead of growing it,
/// so the buffer never changes size after [`Matrix::allocate`].
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T = f64> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Allocate a zero-filled `rows x cols` matrix.
    ///
    /// Fails with [`EigenError::OutOfMemory`] when the element count overflows
    /// or the allocator refuses the request.
    pub fn allocate(rows: usize, cols: usize) -> Result<Self>
    where
        T: Clone + Zero,
    {
        let len = rows
            .checked_mul(cols)
            .ok_or(EigenError::OutOfMemory { rows, cols })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| EigenError::OutOfMemory { rows, cols })?;
        data.resize(len, T::zero());
        Ok(Self { data, rows, cols })
    }

    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> std::result::Result<Self, ShapeError> {
        let (rows, cols) = shape;
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(ShapeError {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn identity(n: usize) -> Result<Self>
    where
        T: Clone + Zero + One,
    {
        let mut matrix = Self::allocate(n, n)?;
        for i in 0..n {
            matrix[(i, i)] = T::one();
        }
        Ok(matrix)
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Copy the dimensions and every element of `source` into `self`.
    ///
    /// The destination must already hold `source.rows * source.cols`
    /// elements; the borrow rules keep the two buffers disjoint.
    pub fn copy_from(&mut self, source: &Matrix<T>)
    where
        T: Copy,
    {
        assert_eq!(
            self.data.len(),
            source.data.len(),
            "copy destination capacity does not match source"
        );
        self.rows = source.rows;
        self.cols = source.cols;
        self.data.copy_from_slice(&source.data);
    }

    /// Reinterpret the buffer as `rows x cols` without touching the values.
    pub(crate) fn set_shape(&mut self, rows: usize, cols: usize) {
        assert_eq!(
            self.data.len(),
            rows * cols,
            "output capacity does not match the requested shape"
        );
        self.rows = rows;
        self.cols = cols;
    }

    pub fn transpose(&self) -> Matrix<T>
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self[(row, col)].clone());
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Release the storage. Taking `self` by value makes a second release
    /// impossible.
    pub fn release(self) {
        drop(self);
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid shape ({rows}, {cols}) for buffer of length {len}")]
pub struct ShapeError {
    rows: usize,
    cols: usize,
    len: usize,
}
