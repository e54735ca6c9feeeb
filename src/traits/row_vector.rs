// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # RowVector Trait Module
//!
//! The capability interface a row storage strategy must provide for
//! `RowMatrix` to dispatch onto it.
//!
//! The matrix layer never touches elements directly. Every elementwise kernel,
//! dot product and norm lives behind this trait, so dense, sparse or any
//! user-provided storage plugs into the same generic core.
//!
//! ### Shape errors
//! Implementors report operand length mismatches as
//! [`MatrixError::ShapeMismatch`]. The matrix layer forwards those unchanged.

use std::fmt::Debug;

use crate::enums::error::MatrixError;
use crate::enums::operators::{BinaryKind, UnaryKind};

/// `Send + Sync` when rows are processed on `Rayon`, otherwise no bound.
#[cfg(feature = "parallel_proc")]
pub trait MaybeSendSync: Send + Sync {}
#[cfg(feature = "parallel_proc")]
impl<T: Send + Sync> MaybeSendSync for T {}

/// `Send + Sync` when rows are processed on `Rayon`, otherwise no bound.
#[cfg(not(feature = "parallel_proc"))]
pub trait MaybeSendSync {}
#[cfg(not(feature = "parallel_proc"))]
impl<T> MaybeSendSync for T {}

/// Row vector algebra.
pub trait RowVector: Clone + Debug + MaybeSendSync {
    /// Logical element count.
    fn dim(&self) -> usize;

    /// A zero-valued vector of logical length `dim`.
    fn zeros(dim: usize) -> Self;

    /// Element at `idx` widened to `f64`. Unstored sparse entries read as zero.
    fn get(&self, idx: usize) -> f64;

    /// Errors unless `other` can be combined elementwise with `self`.
    #[inline]
    fn check_compatible(&self, other: &Self) -> Result<(), MatrixError> {
        if self.dim() == other.dim() {
            Ok(())
        } else {
            Err(MatrixError::ShapeMismatch {
                expected: self.dim(),
                found: other.dim(),
            })
        }
    }

    /// `self = self (op) other`, elementwise.
    fn binary_assign(&mut self, other: &Self, kind: BinaryKind) -> Result<(), MatrixError>;

    /// `self (op) other` into fresh storage.
    fn binary(&self, other: &Self, kind: BinaryKind) -> Result<Self, MatrixError> {
        let mut out = self.clone();
        out.binary_assign(other, kind)?;
        Ok(out)
    }

    /// `self = op(self)`, elementwise.
    fn unary_assign(&mut self, kind: UnaryKind);

    /// `op(self)` into fresh storage.
    fn unary(&self, kind: UnaryKind) -> Self {
        let mut out = self.clone();
        out.unary_assign(kind);
        out
    }

    /// Inner product.
    fn dot(&self, other: &Self) -> Result<f64, MatrixError>;

    /// `self += alpha * other`
    #[inline]
    fn iaxpy(&mut self, other: &Self, alpha: f64) -> Result<(), MatrixError> {
        self.binary_assign(other, BinaryKind::Axpy(alpha))
    }

    /// `alpha * self` into fresh storage.
    #[inline]
    fn scaled(&self, alpha: f64) -> Self {
        self.unary(UnaryKind::SMul(alpha))
    }

    /// Sum of all elements.
    fn sum(&self) -> f64;

    /// Euclidean norm.
    fn norm(&self) -> f64;

    /// Calls `f(index, value)` for every stored element in index order.
    fn for_each_stored(&self, f: &mut dyn FnMut(usize, f64));
}
