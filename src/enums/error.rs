// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Error Module - Custom *RowMatrix* Error Type
//!
//! Defines the unified error type for the crate.
//!
//! ## Features
//! - Covers vector shape mismatches, operand row count mismatches,
//! out-of-range row indices, and capabilities the row-based layout
//! does not have.
//! - Derives `Display` and `Error` through *thiserror* for integration
//! with standard Rust error handling.

use thiserror::Error;

/// Catch all error type for `RowMatrix` and its row vectors.
///
/// Row vectors report [`MatrixError::ShapeMismatch`] themselves. The matrix
/// layer forwards it unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("Shape mismatch: expected dimension {expected}, found {found}.")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("Row count mismatch: expected {expected} rows, found {found}.")]
    RowCountMismatch { expected: usize, found: usize },

    #[error("Index out of range: row {index} does not exist in a matrix of {len} rows.")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unsupported operation: {feature}")]
    Unsupported { feature: String },

    #[error("Overflow: value '{value}' cannot be represented in type '{target}'.")]
    Overflow { value: String, target: &'static str },
}
