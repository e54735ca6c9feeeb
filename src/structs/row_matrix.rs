// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # RowMatrix Module - *Row-Based Parameter Matrix*
//!
//! A matrix stored as an ordered array of independently stored row vectors,
//! carrying the identity of the distributed partition it represents.
//!
//! Arithmetic lives in [`crate::kernels::routing`] and reductions in
//! [`crate::kernels::aggregate`]. This module covers identity, row access
//! and lifecycle.

use std::fmt;

use log::debug;

use crate::enums::error::MatrixError;
use crate::enums::row_slot::RowSlot;
use crate::enums::shape_dim::ShapeDim;
use crate::traits::row_vector::RowVector;
use crate::traits::shape::Shape;

/// # RowMatrix
///
/// Row-based matrix generic over its row storage strategy.
///
/// ### Description
/// Each row is an independently addressable vector, dense or sparse,
/// held in a [`RowSlot`]. The matrix exclusively owns its row array.
/// Rows can be replaced with `set_row`, released with `clear_row`,
/// and lazily materialised with `init_empty`.
///
/// ### Properties
/// - `matrix_id`: Shard identity of the parameter partition. Fixed at construction.
/// - `clock`: Logical version, advanced by the synchronisation layer, never by arithmetic.
/// - `cols`: Logical column count shared by every row.
/// - `rows`: Row slots, indexed `0..num_rows()`.
///
/// ### Row width
/// Every present row is expected to have `cols` elements. This is a caller
/// contract and is not verified on each call; operand shape mismatches are
/// reported by the row vectors themselves.
///
/// ### Absent rows
/// Arithmetic materialises an absent receiver row as a zero vector before
/// combining it. Absent operand rows and absent rows seen by reductions read
/// as zero rows.
#[derive(Clone, PartialEq, Debug)]
pub struct RowMatrix<V> {
    pub(crate) matrix_id: i32,
    pub(crate) clock: i32,
    pub(crate) cols: u64,
    pub(crate) rows: Vec<RowSlot<V>>,
}

impl<V: RowVector> RowMatrix<V> {
    /// Assembles a matrix from its identity and a prepared row array.
    pub fn new(matrix_id: i32, clock: i32, cols: u64, rows: Vec<RowSlot<V>>) -> Self {
        RowMatrix { matrix_id, clock, cols, rows }
    }

    /// Assembles a matrix whose rows are all present.
    pub fn from_rows(matrix_id: i32, clock: i32, cols: u64, rows: Vec<V>) -> Self {
        let rows = rows.into_iter().map(RowSlot::Present).collect();
        RowMatrix { matrix_id, clock, cols, rows }
    }

    /// Assembles a matrix of `num_rows` absent rows, to be filled lazily.
    pub fn with_absent_rows(matrix_id: i32, clock: i32, num_rows: usize, cols: u64) -> Self {
        let mut rows = Vec::with_capacity(num_rows);
        rows.resize_with(num_rows, || RowSlot::Absent);
        RowMatrix { matrix_id, clock, cols, rows }
    }

    /// Assembles a matrix of `num_rows` materialised zero rows.
    pub fn zeros(matrix_id: i32, clock: i32, num_rows: usize, cols: u64) -> Result<Self, MatrixError> {
        let mut m = Self::with_absent_rows(matrix_id, clock, num_rows, cols);
        let width = m.width()?;
        for slot in m.rows.iter_mut() {
            *slot = RowSlot::Present(V::zeros(width));
        }
        Ok(m)
    }

    #[inline]
    pub fn matrix_id(&self) -> i32 {
        self.matrix_id
    }

    #[inline]
    pub fn clock(&self) -> i32 {
        self.clock
    }

    /// Updates the logical version. Called by the synchronisation layer.
    #[inline]
    pub fn set_clock(&mut self, clock: i32) {
        self.clock = clock;
    }

    /// Logical column count.
    #[inline]
    pub fn dim(&self) -> u64 {
        self.cols
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// `cols` as an in-memory length.
    pub(crate) fn width(&self) -> Result<usize, MatrixError> {
        usize::try_from(self.cols).map_err(|_| MatrixError::Overflow {
            value: self.cols.to_string(),
            target: "usize",
        })
    }

    #[inline]
    pub(crate) fn check_index(&self, idx: usize) -> Result<(), MatrixError> {
        if idx < self.rows.len() {
            Ok(())
        } else {
            Err(MatrixError::IndexOutOfRange { index: idx, len: self.rows.len() })
        }
    }

    /// Returns the slot at `idx`, including absent and cleared markers.
    pub fn get_row(&self, idx: usize) -> Result<&RowSlot<V>, MatrixError> {
        self.check_index(idx)?;
        Ok(&self.rows[idx])
    }

    /// Returns the row at `idx` if it is present.
    pub fn row(&self, idx: usize) -> Result<Option<&V>, MatrixError> {
        Ok(self.get_row(idx)?.as_ref())
    }

    pub fn row_mut(&mut self, idx: usize) -> Result<Option<&mut V>, MatrixError> {
        self.check_index(idx)?;
        Ok(self.rows[idx].as_mut())
    }

    /// Replaces the row at `idx`.
    pub fn set_row(&mut self, idx: usize, v: V) -> Result<(), MatrixError> {
        self.check_index(idx)?;
        self.rows[idx] = RowSlot::Present(v);
        Ok(())
    }

    #[inline]
    pub fn rows(&self) -> &[RowSlot<V>] {
        &self.rows
    }

    /// Replaces the whole row array.
    pub fn set_rows(&mut self, rows: Vec<RowSlot<V>>) {
        self.rows = rows;
    }

    /// Column access is not available on a row-based layout.
    pub fn get_col(&self, idx: usize) -> Result<V, MatrixError> {
        Err(MatrixError::Unsupported {
            feature: format!("column {} access on a row-based matrix", idx),
        })
    }

    /// Releases the row at `row_id`.
    ///
    /// # Panics
    /// If `row_id >= num_rows()`.
    pub fn clear_row(&mut self, row_id: usize) {
        assert!(
            row_id < self.rows.len(),
            "clear_row: row {} out of range for {} rows",
            row_id,
            self.rows.len()
        );
        debug!("matrix {}: clearing row {}", self.matrix_id, row_id);
        self.rows[row_id] = RowSlot::Cleared;
    }

    /// Materialises the row at `idx` as a zero vector if it is absent or cleared.
    /// A present row is left untouched.
    pub fn init_empty(&mut self, idx: usize) -> Result<(), MatrixError> {
        self.check_index(idx)?;
        if self.rows[idx].is_absent() {
            debug!("matrix {}: materialising row {} ({} cols)", self.matrix_id, idx, self.cols);
            self.rows[idx] = RowSlot::Present(V::zeros(self.width()?));
        }
        Ok(())
    }

    /// Destroys the matrix: identity is zeroed and all rows are dropped.
    /// The matrix must be reconstructed before further use.
    pub fn clear(&mut self) {
        debug!("matrix {}: clear ({} rows)", self.matrix_id, self.rows.len());
        self.matrix_id = 0;
        self.clock = 0;
        self.cols = 0;
        self.rows = Vec::new();
    }

    /// True once `clear` has run (or for an equivalent empty, zero-identity matrix).
    pub fn is_cleared(&self) -> bool {
        self.matrix_id == 0 && self.clock == 0 && self.cols == 0 && self.rows.is_empty()
    }
}

impl<V> Shape for RowMatrix<V> {
    fn shape(&self) -> ShapeDim {
        ShapeDim::Rank2 {
            rows: self.rows.len(),
            cols: usize::try_from(self.cols).unwrap_or(usize::MAX),
        }
    }
}

// Pretty print
impl<V: RowVector> fmt::Display for RowMatrix<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RowMatrix {} (clock {}): {} × {} [row-based]",
            self.matrix_id,
            self.clock,
            self.rows.len(),
            self.cols
        )?;
        let ncols = self.width().unwrap_or(usize::MAX);
        for slot in self.rows.iter().take(6) {
            // Print up to 6 rows
            let Some(row) = slot.as_ref() else {
                write!(f, "\n[ absent ]")?;
                continue;
            };
            write!(f, "\n[")?;
            let shown = ncols.min(row.dim()).min(8);
            for col in 0..shown {
                // Print up to 8 cols
                write!(f, " {:8.4}", row.get(col))?;
                if col != shown - 1 {
                    write!(f, ",")?;
                }
            }
            if row.dim() > 8 {
                write!(f, " ...")?;
            }
            write!(f, " ]")?;
        }
        if self.rows.len() > 6 {
            write!(f, "\n...")?;
        }
        Ok(())
    }
}
