// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # ShapeDim Enum Module
//!
//! Companion to [crate::traits::shape::Shape];
//!
//! Contains all supported `Shape` variants.

use crate::traits::shape::Shape;

/// Dimensional rank of a row vector or a row-based matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeDim {
    /// Vector logical length
    Rank1(usize),

    /// Matrix with row/column counts.
    Rank2 { rows: usize, cols: usize },
}

/// Implement `Shape` for `ShapeDim` so a shape can be passed wherever
/// a shaped value is expected.
impl Shape for ShapeDim {
    fn shape(&self) -> ShapeDim {
        self.clone()
    }
}
