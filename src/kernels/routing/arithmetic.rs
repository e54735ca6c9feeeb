// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # RowMatrix Arithmetic Surface
//!
//! Named arithmetic methods for [`RowMatrix`], each a descriptor choice
//! followed by a call into the dispatch layer.
//!
//! Every operation comes in a copying form (`add_vec`), which takes `&self`
//! and returns a new matrix, and an in-place form (`iadd_vec`), which takes
//! `&mut self` and hands the mutated receiver back for chaining:
//!
//! ```rust
//! use rowmatrix::{DenseVector, RowMatrix};
//!
//! let mut m = RowMatrix::from_rows(
//!     0, 0, 2,
//!     vec![DenseVector::from_slice(&[1.0, 2.0]), DenseVector::from_slice(&[3.0, 4.0])],
//! );
//! let bias = DenseVector::from_slice(&[1.0, 1.0]);
//!
//! let shifted = m.add_vec(&bias).unwrap();
//! m.iadd_vec(&bias).unwrap().imul_scalar(2.0).unwrap();
//! assert_eq!(m.row(0).unwrap().unwrap().as_slice(), &[4.0, 6.0]);
//! assert_eq!(shifted.row(0).unwrap().unwrap().as_slice(), &[2.0, 3.0]);
//! ```
//!
//! `std::ops` operators are provided on references and return `Result`,
//! since operand shapes are only known at runtime.

use std::ops::{Add, Div, Mul, Sub};

use crate::enums::error::MatrixError;
use crate::enums::operators::{Binary, BinaryKind, Unary, UnaryKind};
use crate::kernels::routing::dispatch::Operand;
use crate::structs::row_matrix::RowMatrix;
use crate::traits::row_vector::RowVector;

/// Generates the row, broadcast and matrix-matrix methods for one `BinaryKind`.
macro_rules! impl_binary_surface {
    ($($kind:ident => $row:ident, $irow:ident, $vec:ident, $ivec:ident, $mat:ident, $imat:ident);* $(;)?) => {
        impl<V: RowVector> RowMatrix<V> {
            $(
                #[doc = concat!("Copying `", stringify!($kind), "` of `other` into row `row_id` only.")]
                #[inline]
                pub fn $row(&self, row_id: usize, other: &V) -> Result<Self, MatrixError> {
                    self.produce(Operand::Row(row_id, other), Binary::copying(BinaryKind::$kind))
                }

                #[doc = concat!("In-place `", stringify!($kind), "` of `other` into row `row_id` only.")]
                #[inline]
                pub fn $irow(&mut self, row_id: usize, other: &V) -> Result<&mut Self, MatrixError> {
                    self.mutate(Operand::Row(row_id, other), Binary::in_place(BinaryKind::$kind))
                }

                #[doc = concat!("Copying `", stringify!($kind), "` of `other` broadcast across every row.")]
                #[inline]
                pub fn $vec(&self, other: &V) -> Result<Self, MatrixError> {
                    self.produce(Operand::Broadcast(other), Binary::copying(BinaryKind::$kind))
                }

                #[doc = concat!("In-place `", stringify!($kind), "` of `other` broadcast across every row.")]
                #[inline]
                pub fn $ivec(&mut self, other: &V) -> Result<&mut Self, MatrixError> {
                    self.mutate(Operand::Broadcast(other), Binary::in_place(BinaryKind::$kind))
                }

                #[doc = concat!("Copying row-wise `", stringify!($kind), "` with `other`.")]
                #[inline]
                pub fn $mat(&self, other: &RowMatrix<V>) -> Result<Self, MatrixError> {
                    self.produce(Operand::Matrix(other), Binary::copying(BinaryKind::$kind))
                }

                #[doc = concat!("In-place row-wise `", stringify!($kind), "` with `other`.")]
                #[inline]
                pub fn $imat(&mut self, other: &RowMatrix<V>) -> Result<&mut Self, MatrixError> {
                    self.mutate(Operand::Matrix(other), Binary::in_place(BinaryKind::$kind))
                }
            )*
        }
    };
}

/// Generates the copying and in-place scalar methods for one `UnaryKind` variant.
macro_rules! impl_scalar_surface {
    ($($kind:ident => $copy:ident, $inplace:ident);* $(;)?) => {
        impl<V: RowVector> RowMatrix<V> {
            $(
                #[doc = concat!("Copying elementwise `", stringify!($kind), "` with scalar `x`.")]
                #[inline]
                pub fn $copy(&self, x: f64) -> Result<Self, MatrixError> {
                    self.produce_unary(Unary::copying(UnaryKind::$kind(x)))
                }

                #[doc = concat!("In-place elementwise `", stringify!($kind), "` with scalar `x`.")]
                #[inline]
                pub fn $inplace(&mut self, x: f64) -> Result<&mut Self, MatrixError> {
                    self.mutate_unary(Unary::in_place(UnaryKind::$kind(x)))
                }
            )*
        }
    };
}

impl_binary_surface! {
    Add => add_row, iadd_row, add_vec, iadd_vec, add_matrix, iadd_matrix;
    Sub => sub_row, isub_row, sub_vec, isub_vec, sub_matrix, isub_matrix;
    Mul => mul_row, imul_row, mul_vec, imul_vec, mul_matrix, imul_matrix;
    Div => div_row, idiv_row, div_vec, idiv_vec, div_matrix, idiv_matrix;
}

impl_scalar_surface! {
    SAdd => add_scalar, iadd_scalar;
    SSub => sub_scalar, isub_scalar;
    SMul => mul_scalar, imul_scalar;
    SDiv => div_scalar, idiv_scalar;
}

impl<V: RowVector> RowMatrix<V> {
    /// Copying `row_id += alpha * other`.
    #[inline]
    pub fn axpy_row(&self, row_id: usize, other: &V, alpha: f64) -> Result<Self, MatrixError> {
        self.produce(Operand::Row(row_id, other), Binary::copying(BinaryKind::Axpy(alpha)))
    }

    /// In-place `row_id += alpha * other`.
    #[inline]
    pub fn iaxpy_row(&mut self, row_id: usize, other: &V, alpha: f64) -> Result<&mut Self, MatrixError> {
        self.mutate(Operand::Row(row_id, other), Binary::in_place(BinaryKind::Axpy(alpha)))
    }

    /// Copying `row += alpha * other` for every row.
    #[inline]
    pub fn axpy_vec(&self, other: &V, alpha: f64) -> Result<Self, MatrixError> {
        self.produce(Operand::Broadcast(other), Binary::copying(BinaryKind::Axpy(alpha)))
    }

    /// In-place `row += alpha * other` for every row.
    #[inline]
    pub fn iaxpy_vec(&mut self, other: &V, alpha: f64) -> Result<&mut Self, MatrixError> {
        self.mutate(Operand::Broadcast(other), Binary::in_place(BinaryKind::Axpy(alpha)))
    }

    /// Copying `self + alpha * other`, row by row.
    #[inline]
    pub fn axpy_matrix(&self, other: &RowMatrix<V>, alpha: f64) -> Result<Self, MatrixError> {
        self.produce(Operand::Matrix(other), Binary::copying(BinaryKind::Axpy(alpha)))
    }

    /// In-place `self += alpha * other`, row by row.
    #[inline]
    pub fn iaxpy_matrix(&mut self, other: &RowMatrix<V>, alpha: f64) -> Result<&mut Self, MatrixError> {
        self.mutate(Operand::Matrix(other), Binary::in_place(BinaryKind::Axpy(alpha)))
    }

    /// Copying elementwise transform, e.g. `UnaryKind::Exp`.
    #[inline]
    pub fn map_unary(&self, kind: UnaryKind) -> Result<Self, MatrixError> {
        self.produce_unary(Unary::copying(kind))
    }

    #[inline]
    pub fn imap_unary(&mut self, kind: UnaryKind) -> Result<&mut Self, MatrixError> {
        self.mutate_unary(Unary::in_place(kind))
    }
}

// ===== Operator Trait Implementations =====

macro_rules! impl_matrix_ops {
    ($($trait:ident, $method:ident => $matrix_fn:ident, $scalar_fn:ident);* $(;)?) => {
        $(
            impl<V: RowVector> $trait<&RowMatrix<V>> for &RowMatrix<V> {
                type Output = Result<RowMatrix<V>, MatrixError>;

                fn $method(self, rhs: &RowMatrix<V>) -> Self::Output {
                    self.$matrix_fn(rhs)
                }
            }

            impl<V: RowVector> $trait<f64> for &RowMatrix<V> {
                type Output = Result<RowMatrix<V>, MatrixError>;

                fn $method(self, rhs: f64) -> Self::Output {
                    self.$scalar_fn(rhs)
                }
            }
        )*
    };
}

impl_matrix_ops! {
    Add, add => add_matrix, add_scalar;
    Sub, sub => sub_matrix, sub_scalar;
    Mul, mul => mul_matrix, mul_scalar;
    Div, div => div_matrix, div_scalar;
}
