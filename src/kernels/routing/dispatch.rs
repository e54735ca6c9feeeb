// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Dispatch Module
//!
//! Routes an operation descriptor and an operand onto per-row calls and
//! assembles the result matrix.
//!
//! Four entry points cover every operand kind:
//! - [`RowMatrix::calculate_row`]: one row against a vector.
//! - [`RowMatrix::calculate_broadcast`]: every row against the same vector.
//! - [`RowMatrix::calculate_matrix`]: row `i` against operand row `i`.
//! - [`RowMatrix::calculate_unary`]: every row through a unary function.
//!
//! The descriptor's [`OpMode`] decides aliasing. `InPlace` mutates the
//! receiver's rows and returns [`Calculated::InPlace`]; `Copy` leaves the
//! receiver and its operands untouched and returns [`Calculated::New`].
//! Index and shape checks run before any row is mutated.

use std::borrow::Cow;
use std::fmt;

use log::trace;
#[cfg(feature = "parallel_proc")]
use rayon::prelude::*;

use crate::enums::error::MatrixError;
use crate::enums::operators::{Binary, BinaryKind, OpMode, Unary, UnaryKind};
use crate::enums::row_slot::RowSlot;
use crate::structs::row_matrix::RowMatrix;
use crate::traits::row_vector::RowVector;

/// Right-hand side of a binary dispatch.
#[derive(Debug)]
pub enum Operand<'a, V> {
    /// Combine with a single row only.
    Row(usize, &'a V),
    /// Combine with every row.
    Broadcast(&'a V),
    /// Combine row-by-row with another matrix of the same row count.
    Matrix(&'a RowMatrix<V>),
}

impl<V> fmt::Display for Operand<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Row(i, _) => write!(f, "row {}", i),
            Operand::Broadcast(_) => write!(f, "broadcast vector"),
            Operand::Matrix(m) => write!(f, "matrix {}", m.matrix_id),
        }
    }
}

/// Outcome of a dispatch call.
#[derive(Debug)]
pub enum Calculated<'a, V> {
    /// The receiver was mutated and is handed back.
    InPlace(&'a mut RowMatrix<V>),
    /// A new matrix; the receiver is unchanged.
    New(RowMatrix<V>),
}

impl<'a, V> Calculated<'a, V> {
    #[inline]
    pub fn is_in_place(&self) -> bool {
        matches!(self, Calculated::InPlace(_))
    }

    /// The resulting matrix, whichever way it was produced.
    #[inline]
    pub fn matrix(&self) -> &RowMatrix<V> {
        match self {
            Calculated::InPlace(m) => m,
            Calculated::New(m) => m,
        }
    }

    /// The new matrix of a copying dispatch, `None` for in-place.
    #[inline]
    pub fn into_new(self) -> Option<RowMatrix<V>> {
        match self {
            Calculated::New(m) => Some(m),
            Calculated::InPlace(_) => None,
        }
    }
}

impl<V: RowVector> RowMatrix<V> {
    /// Applies `op` between row `row_id` and `other`. Other rows are untouched.
    pub fn calculate_row(
        &mut self,
        row_id: usize,
        other: &V,
        op: Binary,
    ) -> Result<Calculated<'_, V>, MatrixError> {
        self.calculate(Operand::Row(row_id, other), op)
    }

    /// Applies `op` between every row and `other`.
    pub fn calculate_broadcast(&mut self, other: &V, op: Binary) -> Result<Calculated<'_, V>, MatrixError> {
        self.calculate(Operand::Broadcast(other), op)
    }

    /// Applies `op` between row `i` of `self` and row `i` of `other`.
    pub fn calculate_matrix(
        &mut self,
        other: &RowMatrix<V>,
        op: Binary,
    ) -> Result<Calculated<'_, V>, MatrixError> {
        self.calculate(Operand::Matrix(other), op)
    }

    /// Applies a unary `op` to every row.
    pub fn calculate_unary(&mut self, op: Unary) -> Result<Calculated<'_, V>, MatrixError> {
        match op.mode {
            OpMode::InPlace => Ok(Calculated::InPlace(self.mutate_unary(op)?)),
            OpMode::Copy => Ok(Calculated::New(self.produce_unary(op)?)),
        }
    }

    /// Binary dispatch over any operand kind.
    pub fn calculate(&mut self, operand: Operand<'_, V>, op: Binary) -> Result<Calculated<'_, V>, MatrixError> {
        match op.mode {
            OpMode::InPlace => Ok(Calculated::InPlace(self.mutate(operand, op)?)),
            OpMode::Copy => Ok(Calculated::New(self.produce(operand, op)?)),
        }
    }

    /// Copying binary path. Receiver and operand stay unchanged.
    pub(crate) fn produce(&self, operand: Operand<'_, V>, op: Binary) -> Result<Self, MatrixError> {
        debug_assert_eq!(op.mode, OpMode::Copy, "produce requires a copying descriptor");
        trace!("matrix {}: {} with {} ({} rows)", self.matrix_id, op, operand, self.rows.len());
        let width = self.width()?;
        let kind = op.kind;

        let rows = match operand {
            Operand::Row(row_id, other) => {
                self.check_index(row_id)?;
                let combined = combine(&self.rows[row_id], other, kind, width)?;
                let mut rows = self.rows.clone();
                rows[row_id] = RowSlot::Present(combined);
                rows
            }
            Operand::Broadcast(other) => {
                try_map_rows(&self.rows, |_, slot| combine(slot, other, kind, width))?
            }
            Operand::Matrix(other) => {
                self.check_row_count(other)?;
                try_map_rows(&self.rows, |i, slot| {
                    let rhs = row_or_zeros(&other.rows[i], width);
                    combine(slot, &rhs, kind, width)
                })?
            }
        };
        Ok(self.with_rows(rows))
    }

    /// In-place binary path.
    pub(crate) fn mutate(&mut self, operand: Operand<'_, V>, op: Binary) -> Result<&mut Self, MatrixError> {
        debug_assert_eq!(op.mode, OpMode::InPlace, "mutate requires an in-place descriptor");
        trace!("matrix {}: {} with {} ({} rows)", self.matrix_id, op, operand, self.rows.len());
        let width = self.width()?;
        let kind = op.kind;

        match operand {
            Operand::Row(row_id, other) => {
                self.check_index(row_id)?;
                check_slot(&self.rows[row_id], other, width)?;
                combine_assign(&mut self.rows[row_id], other, kind, width)?;
            }
            Operand::Broadcast(other) => {
                for slot in self.rows.iter() {
                    check_slot(slot, other, width)?;
                }
                try_for_each_row_mut(&mut self.rows, |_, slot| combine_assign(slot, other, kind, width))?;
            }
            Operand::Matrix(other) => {
                self.check_row_count(other)?;
                for (slot, rhs) in self.rows.iter().zip(other.rows.iter()) {
                    check_slot(slot, &row_or_zeros(rhs, width), width)?;
                }
                try_for_each_row_mut(&mut self.rows, |i, slot| {
                    let rhs = row_or_zeros(&other.rows[i], width);
                    combine_assign(slot, &rhs, kind, width)
                })?;
            }
        }
        Ok(self)
    }

    pub(crate) fn produce_unary(&self, op: Unary) -> Result<Self, MatrixError> {
        debug_assert_eq!(op.mode, OpMode::Copy, "produce_unary requires a copying descriptor");
        trace!("matrix {}: {} ({} rows)", self.matrix_id, op, self.rows.len());
        let width = self.width()?;
        let kind = op.kind;
        let rows = try_map_rows(&self.rows, |_, slot| Ok(transform(slot, kind, width)))?;
        Ok(self.with_rows(rows))
    }

    pub(crate) fn mutate_unary(&mut self, op: Unary) -> Result<&mut Self, MatrixError> {
        debug_assert_eq!(op.mode, OpMode::InPlace, "mutate_unary requires an in-place descriptor");
        trace!("matrix {}: {} ({} rows)", self.matrix_id, op, self.rows.len());
        let width = self.width()?;
        let kind = op.kind;
        try_for_each_row_mut(&mut self.rows, |_, slot| {
            materialize(slot, width).unary_assign(kind);
            Ok(())
        })?;
        Ok(self)
    }

    fn check_row_count(&self, other: &RowMatrix<V>) -> Result<(), MatrixError> {
        if other.rows.len() == self.rows.len() {
            Ok(())
        } else {
            Err(MatrixError::RowCountMismatch {
                expected: self.rows.len(),
                found: other.rows.len(),
            })
        }
    }

    // Same identity, new row array.
    #[inline]
    fn with_rows(&self, rows: Vec<RowSlot<V>>) -> Self {
        RowMatrix {
            matrix_id: self.matrix_id,
            clock: self.clock,
            cols: self.cols,
            rows,
        }
    }
}

/// Borrows a present row or builds the zero row an absent slot stands for.
#[inline]
fn row_or_zeros<V: RowVector>(slot: &RowSlot<V>, width: usize) -> Cow<'_, V> {
    match slot {
        RowSlot::Present(v) => Cow::Borrowed(v),
        _ => Cow::Owned(V::zeros(width)),
    }
}

/// Lets the row algebra reject `other` before anything is mutated.
#[inline]
fn check_slot<V: RowVector>(slot: &RowSlot<V>, other: &V, width: usize) -> Result<(), MatrixError> {
    match slot {
        RowSlot::Present(v) => v.check_compatible(other),
        _ => V::zeros(width).check_compatible(other),
    }
}

/// Fills an absent slot with zeros and returns the row.
#[inline]
fn materialize<V: RowVector>(slot: &mut RowSlot<V>, width: usize) -> &mut V {
    if slot.is_absent() {
        *slot = RowSlot::Present(V::zeros(width));
    }
    match slot {
        RowSlot::Present(v) => v,
        _ => unreachable!("slot materialised above"),
    }
}

#[inline]
fn combine<V: RowVector>(slot: &RowSlot<V>, other: &V, kind: BinaryKind, width: usize) -> Result<V, MatrixError> {
    row_or_zeros(slot, width).binary(other, kind)
}

#[inline]
fn combine_assign<V: RowVector>(
    slot: &mut RowSlot<V>,
    other: &V,
    kind: BinaryKind,
    width: usize,
) -> Result<(), MatrixError> {
    materialize(slot, width).binary_assign(other, kind)
}

#[inline]
fn transform<V: RowVector>(slot: &RowSlot<V>, kind: UnaryKind, width: usize) -> V {
    row_or_zeros(slot, width).unary(kind)
}

#[cfg(not(feature = "parallel_proc"))]
fn try_map_rows<V, F>(rows: &[RowSlot<V>], f: F) -> Result<Vec<RowSlot<V>>, MatrixError>
where
    V: RowVector,
    F: Fn(usize, &RowSlot<V>) -> Result<V, MatrixError>,
{
    rows.iter()
        .enumerate()
        .map(|(i, slot)| f(i, slot).map(RowSlot::Present))
        .collect()
}

#[cfg(feature = "parallel_proc")]
fn try_map_rows<V, F>(rows: &[RowSlot<V>], f: F) -> Result<Vec<RowSlot<V>>, MatrixError>
where
    V: RowVector,
    F: Fn(usize, &RowSlot<V>) -> Result<V, MatrixError> + Sync + Send,
{
    rows.par_iter()
        .enumerate()
        .map(|(i, slot)| f(i, slot).map(RowSlot::Present))
        .collect()
}

#[cfg(not(feature = "parallel_proc"))]
fn try_for_each_row_mut<V, F>(rows: &mut [RowSlot<V>], f: F) -> Result<(), MatrixError>
where
    V: RowVector,
    F: Fn(usize, &mut RowSlot<V>) -> Result<(), MatrixError>,
{
    rows.iter_mut().enumerate().try_for_each(|(i, slot)| f(i, slot))
}

#[cfg(feature = "parallel_proc")]
fn try_for_each_row_mut<V, F>(rows: &mut [RowSlot<V>], f: F) -> Result<(), MatrixError>
where
    V: RowVector,
    F: Fn(usize, &mut RowSlot<V>) -> Result<(), MatrixError> + Sync + Send,
{
    rows.par_iter_mut().enumerate().try_for_each(|(i, slot)| f(i, slot))
}
