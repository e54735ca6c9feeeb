// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Shape Trait Module
//!
//! Unified way to describe the dimensionality “shape” of row vectors
//! and row-based matrices.

use crate::enums::shape_dim::ShapeDim;

/// Shape trait.
///
/// Returns the `ShapeDim` for the receiver.
///
/// Includes accessors for the common cases, shape_1d and shape_2d,
/// which are automatic provided the implementor implements `shape`.
pub trait Shape {
    /// Returns the shape dimension
    fn shape(&self) -> ShapeDim;

    /// Returns the first dimension shape
    fn shape_1d(&self) -> usize {
        match self.shape() {
            ShapeDim::Rank1(n) => n,
            ShapeDim::Rank2 { rows, .. } => rows,
        }
    }

    /// Returns the first and second dimension shapes
    ///
    /// A vector reads as a single row.
    fn shape_2d(&self) -> (usize, usize) {
        match self.shape() {
            ShapeDim::Rank1(n) => (1, n),
            ShapeDim::Rank2 { rows, cols } => (rows, cols),
        }
    }
}
