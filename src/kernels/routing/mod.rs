// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Routing Module
//!
//! Operation dispatch for `RowMatrix`: operand-kind routing, in-place versus
//! copying result assembly, and the named arithmetic surface built on it.

pub mod arithmetic;
pub mod dispatch;

pub use dispatch::{Calculated, Operand};
