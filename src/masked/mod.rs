//! Masked array container: a payload paired with a boolean exclusion mask.
//!
//! A `true` mask entry marks the corresponding payload entry as missing.
//! Masked entries are excluded from reductions and the mask propagates
//! through elementwise arithmetic as the union of the operand masks.
//!
//! The NaN-sentinel rendering of the same logical data is available via
//! [`MaskedArray::to_nan_array`]; reducing that rendering under
//! [`NanPolicy::Omit`](crate::stats::NanPolicy) must produce the same
//! result as reducing the masked array directly.
//!
//! # Examples
//!
//! ```
//! use medir::masked::MaskedArray;
//! use medir::primitives::Array;
//!
//! let data = Array::from_vec(1, 3, vec![1.0, 2.0, 3.0]).expect("valid shape");
//! let m = MaskedArray::new(data, vec![false, true, false]).expect("mask matches shape");
//! assert!(m.to_nan_array().get(0, 1).is_nan());
//! ```

use crate::error::{MedirError, Result};
use crate::primitives::{Array, Axis};

/// A 2D array of f64 values paired with a same-shape boolean mask.
///
/// Invariant: mask and payload always share shape. Masked positions'
/// payload values are never read by reductions.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedArray {
    data: Array,
    mask: Vec<bool>,
}

impl MaskedArray {
    /// Creates a masked array from a payload and a mask.
    ///
    /// # Errors
    ///
    /// Returns an error if the mask length doesn't match the payload size.
    pub fn new(data: Array, mask: Vec<bool>) -> Result<Self> {
        if mask.len() != data.len() {
            return Err(MedirError::DimensionMismatch {
                expected: format!("mask of {} entries", data.len()),
                actual: format!("mask of {} entries", mask.len()),
            });
        }
        Ok(Self { data, mask })
    }

    /// Creates a masked array with all entries present.
    #[must_use]
    pub fn from_array(data: Array) -> Self {
        let mask = vec![false; data.len()];
        Self { data, mask }
    }

    /// Creates a masked array by evaluating a function at every index,
    /// returning `(value, masked)` pairs.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> (f64, bool),
    ) -> Self {
        let mut mask = Vec::with_capacity(rows * cols);
        let data = Array::from_fn(rows, cols, |i, j| {
            let (v, m) = f(i, j);
            mask.push(m);
            v
        });
        Self { data, mask }
    }

    /// Returns the payload view.
    #[must_use]
    pub fn data(&self) -> &Array {
        &self.data
    }

    /// Returns the mask view (row-major, `true` = missing).
    #[must_use]
    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    /// Gets the `(value, masked)` pair at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> (f64, bool) {
        (
            self.data.get(row, col),
            self.mask[row * self.data.n_cols() + col],
        )
    }

    /// Renders the same logical data with NaN sentinels at masked positions.
    #[must_use]
    pub fn to_nan_array(&self) -> Array {
        let cols = self.data.n_cols();
        Array::from_fn(self.data.n_rows(), cols, |i, j| {
            if self.mask[i * cols + j] {
                f64::NAN
            } else {
                self.data.get(i, j)
            }
        })
    }

    /// Applies a function to every payload element, keeping the mask.
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            data: self.data.map(f),
            mask: self.mask.clone(),
        }
    }

    /// Multiplies each payload element by a scalar, keeping the mask.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        self.map(|x| x * scalar)
    }

    /// Combines two masked arrays elementwise with broadcasting.
    ///
    /// The output mask is the union of the (broadcast) operand masks.
    ///
    /// # Errors
    ///
    /// Returns an error if shapes are not broadcast-compatible.
    pub fn broadcast_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Result<Self> {
        let data = self.data.broadcast_with(&other.data, f)?;
        let (rows, cols) = data.shape();
        let (sr, sc) = self.shape();
        let (or_, oc) = other.shape();
        let mut mask = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                let a = self.mask[(if sr == 1 { 0 } else { i }) * sc + if sc == 1 { 0 } else { j }];
                let b =
                    other.mask[(if or_ == 1 { 0 } else { i }) * oc + if oc == 1 { 0 } else { j }];
                mask.push(a || b);
            }
        }
        Ok(Self { data, mask })
    }

    /// Elementwise addition with mask union.
    ///
    /// # Errors
    ///
    /// Returns an error if shapes are not broadcast-compatible.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.broadcast_with(other, |a, b| a + b)
    }

    /// Elementwise subtraction with mask union.
    ///
    /// # Errors
    ///
    /// Returns an error if shapes are not broadcast-compatible.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.broadcast_with(other, |a, b| a - b)
    }

    /// Elementwise multiplication with mask union.
    ///
    /// # Errors
    ///
    /// Returns an error if shapes are not broadcast-compatible.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.broadcast_with(other, |a, b| a * b)
    }

    /// Elementwise division with mask union.
    ///
    /// # Errors
    ///
    /// Returns an error if shapes are not broadcast-compatible.
    pub fn div(&self, other: &Self) -> Result<Self> {
        self.broadcast_with(other, |a, b| a / b)
    }

    /// Extracts the `(value, masked)` lanes a reduction along `axis`
    /// runs over, in the same lane order as [`Array::lanes`].
    #[must_use]
    pub fn lanes(&self, axis: Option<Axis>) -> Vec<Vec<(f64, bool)>> {
        let cols = self.data.n_cols();
        let rows = self.data.n_rows();
        let pair = |i: usize, j: usize| (self.data.get(i, j), self.mask[i * cols + j]);
        match axis {
            None => {
                let mut lane = Vec::with_capacity(rows * cols);
                for i in 0..rows {
                    for j in 0..cols {
                        lane.push(pair(i, j));
                    }
                }
                vec![lane]
            }
            Some(Axis::Rows) => (0..cols)
                .map(|j| (0..rows).map(|i| pair(i, j)).collect())
                .collect(),
            Some(Axis::Columns) => (0..rows)
                .map(|i| (0..cols).map(|j| pair(i, j)).collect())
                .collect(),
        }
    }

    /// Number of unmasked entries along `axis`.
    #[must_use]
    pub fn count_unmasked(&self, axis: Option<Axis>) -> Array {
        let (rows, cols) = Array::reduced_shape(self.shape(), axis);
        let counts: Vec<f64> = self
            .lanes(axis)
            .iter()
            .map(|lane| lane.iter().filter(|(_, m)| !m).count() as f64)
            .collect();
        Array::from_fn(rows, cols, |i, j| counts[i * cols + j])
    }

    /// Mask-aware sum along `axis`. Output entries are masked where the
    /// lane had no unmasked values.
    #[must_use]
    pub fn sum(&self, axis: Option<Axis>) -> MaskedArray {
        self.reduce_lane(axis, |vals| vals.iter().sum())
    }

    /// Mask-aware minimum along `axis`.
    #[must_use]
    pub fn min(&self, axis: Option<Axis>) -> MaskedArray {
        self.reduce_lane(axis, |vals| vals.iter().copied().fold(f64::INFINITY, f64::min))
    }

    /// Mask-aware maximum along `axis`.
    #[must_use]
    pub fn max(&self, axis: Option<Axis>) -> MaskedArray {
        self.reduce_lane(axis, |vals| {
            vals.iter().copied().fold(f64::NEG_INFINITY, f64::max)
        })
    }

    /// Mask-aware arithmetic mean along `axis`.
    #[must_use]
    pub fn mean(&self, axis: Option<Axis>) -> MaskedArray {
        self.reduce_lane(axis, |vals| {
            vals.iter().sum::<f64>() / vals.len() as f64
        })
    }

    fn reduce_lane(&self, axis: Option<Axis>, f: impl Fn(&[f64]) -> f64) -> MaskedArray {
        let (rows, cols) = Array::reduced_shape(self.shape(), axis);
        let mut mask = Vec::with_capacity(rows * cols);
        let mut out = Vec::with_capacity(rows * cols);
        for lane in self.lanes(axis) {
            let vals: Vec<f64> = lane.iter().filter(|(_, m)| !m).map(|(v, _)| *v).collect();
            if vals.is_empty() {
                out.push(f64::NAN);
                mask.push(true);
            } else {
                out.push(f(&vals));
                mask.push(false);
            }
        }
        let data = Array::from_fn(rows, cols, |i, j| out[i * cols + j]);
        MaskedArray { data, mask }
    }
}

#[cfg(test)]
#[path = "masked_tests.rs"]
mod tests;
