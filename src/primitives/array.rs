//! Array type for 2D numeric data.

use crate::error::{MedirError, Result};

/// Reduction axis for a 2D array.
///
/// `Rows` collapses the row dimension (one result per column, like
/// reducing along axis 0); `Columns` collapses the column dimension
/// (one result per row, like reducing along axis 1). Passing `None`
/// where an `Option<Axis>` is expected reduces over the whole array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Columns,
}

/// A 2D array of f64 values (row-major storage).
///
/// Reductions keep the collapsed dimension with extent 1, so a reduction
/// of a `(7, 8)` array along `Axis::Rows` has shape `(1, 8)` and a global
/// reduction has shape `(1, 1)`. This makes reduced results directly
/// broadcastable against the input.
///
/// # Examples
///
/// ```
/// use medir::primitives::Array;
///
/// let a = Array::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(a.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Array {
    /// Creates a new array from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MedirError::DimensionMismatch {
                expected: format!("{} elements ({rows}x{cols})", rows * cols),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates an array by evaluating a function at every (row, col) index.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { data, rows, cols }
    }

    /// Creates a 1x1 array holding a single value.
    #[must_use]
    pub fn scalar(value: f64) -> Self {
        Self {
            data: vec![value],
            rows: 1,
            cols: 1,
        }
    }

    /// Creates an array of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::full(rows, cols, 0.0)
    }

    /// Creates an array filled with a constant value.
    #[must_use]
    pub fn full(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the array holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns the underlying data as a slice (row-major).
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Applies a function to every element, producing a new array.
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            data: self.data.iter().map(|&x| f(x)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Returns a boolean mask marking NaN positions.
    #[must_use]
    pub fn nan_mask(&self) -> Vec<bool> {
        self.data.iter().map(|x| x.is_nan()).collect()
    }

    /// Shape of the result of reducing along `axis`, with the collapsed
    /// dimension kept at extent 1.
    #[must_use]
    pub fn reduced_shape(shape: (usize, usize), axis: Option<Axis>) -> (usize, usize) {
        match axis {
            None => (1, 1),
            Some(Axis::Rows) => (1, shape.1),
            Some(Axis::Columns) => (shape.0, 1),
        }
    }

    /// Extracts the 1D lanes a reduction along `axis` runs over.
    ///
    /// Lane `i` corresponds to element `i` of the reduced (row-major)
    /// result: column lanes for `Axis::Rows`, row lanes for `Axis::Columns`,
    /// and a single lane covering the whole array for `None`.
    #[must_use]
    pub fn lanes(&self, axis: Option<Axis>) -> Vec<Vec<f64>> {
        match axis {
            None => vec![self.data.clone()],
            Some(Axis::Rows) => (0..self.cols)
                .map(|j| (0..self.rows).map(|i| self.get(i, j)).collect())
                .collect(),
            Some(Axis::Columns) => (0..self.rows)
                .map(|i| self.data[i * self.cols..(i + 1) * self.cols].to_vec())
                .collect(),
        }
    }

    /// Combines two arrays elementwise with 2D broadcasting.
    ///
    /// A dimension of extent 1 broadcasts against any extent, so reduced
    /// results (shape `(1, c)`, `(r, 1)` or `(1, 1)`) combine directly
    /// with the arrays they came from.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes are not broadcast-compatible.
    pub fn broadcast_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Result<Self> {
        let rows = broadcast_dim(self.rows, other.rows)
            .ok_or_else(|| MedirError::shape_mismatch(self.shape(), other.shape()))?;
        let cols = broadcast_dim(self.cols, other.cols)
            .ok_or_else(|| MedirError::shape_mismatch(self.shape(), other.shape()))?;

        let out = Self::from_fn(rows, cols, |i, j| {
            let a = self.get(
                if self.rows == 1 { 0 } else { i },
                if self.cols == 1 { 0 } else { j },
            );
            let b = other.get(
                if other.rows == 1 { 0 } else { i },
                if other.cols == 1 { 0 } else { j },
            );
            f(a, b)
        });
        Ok(out)
    }

    /// Elementwise addition with broadcasting.
    ///
    /// # Errors
    ///
    /// Returns an error if shapes are not broadcast-compatible.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.broadcast_with(other, |a, b| a + b)
    }

    /// Elementwise subtraction with broadcasting.
    ///
    /// # Errors
    ///
    /// Returns an error if shapes are not broadcast-compatible.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.broadcast_with(other, |a, b| a - b)
    }

    /// Elementwise multiplication with broadcasting.
    ///
    /// # Errors
    ///
    /// Returns an error if shapes are not broadcast-compatible.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.broadcast_with(other, |a, b| a * b)
    }

    /// Elementwise division with broadcasting.
    ///
    /// # Errors
    ///
    /// Returns an error if shapes are not broadcast-compatible.
    pub fn div(&self, other: &Self) -> Result<Self> {
        self.broadcast_with(other, |a, b| a / b)
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        self.map(|x| x * scalar)
    }
}

fn broadcast_dim(a: usize, b: usize) -> Option<usize> {
    if a == b {
        Some(a)
    } else if a == 1 {
        Some(b)
    } else if b == 1 {
        Some(a)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "array_tests.rs"]
mod tests;
