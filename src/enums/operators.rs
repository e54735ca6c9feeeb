// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Operators Module
//!
//! Immutable operation descriptors consumed by the dispatch layer.
//!
//! A descriptor pairs *what* to compute ([`BinaryKind`] / [`UnaryKind`]) with
//! *how* the result is stored ([`OpMode`]). The mode alone decides whether
//! a dispatch call mutates the receiver or produces a new matrix, so the whole
//! named arithmetic surface reduces to a choice of descriptor.

use std::fmt;

/// Whether an operation mutates existing row storage or allocates new storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpMode {
    /// Mutates the receiver's rows and hands the same matrix back.
    InPlace,
    /// Leaves the receiver and operands untouched and returns a new matrix.
    Copy,
}

/// Elementwise function between a row and a vector operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinaryKind {
    Add,
    Sub,
    Mul,
    Div,
    /// `row + alpha * operand`
    Axpy(f64),
}

impl BinaryKind {
    /// Applies the function to one pair of elements.
    #[inline]
    pub fn apply(self, l: f64, r: f64) -> f64 {
        match self {
            BinaryKind::Add => l + r,
            BinaryKind::Sub => l - r,
            BinaryKind::Mul => l * r,
            BinaryKind::Div => l / r,
            BinaryKind::Axpy(alpha) => l + alpha * r,
        }
    }
}

/// Elementwise function over a single row.
///
/// The `S*` variants carry their scalar right-hand side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryKind {
    SAdd(f64),
    SSub(f64),
    SMul(f64),
    SDiv(f64),
    Exp,
    Log,
    Log1p,
    Sqrt,
    Abs,
    Pow(f64),
}

impl UnaryKind {
    /// Applies the function to one element.
    #[inline]
    pub fn apply(self, v: f64) -> f64 {
        match self {
            UnaryKind::SAdd(x) => v + x,
            UnaryKind::SSub(x) => v - x,
            UnaryKind::SMul(x) => v * x,
            UnaryKind::SDiv(x) => v / x,
            UnaryKind::Exp => v.exp(),
            UnaryKind::Log => v.ln(),
            UnaryKind::Log1p => v.ln_1p(),
            UnaryKind::Sqrt => v.sqrt(),
            UnaryKind::Abs => v.abs(),
            UnaryKind::Pow(p) => v.powf(p),
        }
    }
}

/// Binary operation descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binary {
    pub kind: BinaryKind,
    pub mode: OpMode,
}

impl Binary {
    #[inline]
    pub fn new(kind: BinaryKind, mode: OpMode) -> Self {
        Binary { kind, mode }
    }

    #[inline]
    pub fn in_place(kind: BinaryKind) -> Self {
        Binary::new(kind, OpMode::InPlace)
    }

    #[inline]
    pub fn copying(kind: BinaryKind) -> Self {
        Binary::new(kind, OpMode::Copy)
    }

    #[inline]
    pub fn is_in_place(&self) -> bool {
        self.mode == OpMode::InPlace
    }
}

/// Unary operation descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unary {
    pub kind: UnaryKind,
    pub mode: OpMode,
}

impl Unary {
    #[inline]
    pub fn new(kind: UnaryKind, mode: OpMode) -> Self {
        Unary { kind, mode }
    }

    #[inline]
    pub fn in_place(kind: UnaryKind) -> Self {
        Unary::new(kind, OpMode::InPlace)
    }

    #[inline]
    pub fn copying(kind: UnaryKind) -> Self {
        Unary::new(kind, OpMode::Copy)
    }

    #[inline]
    pub fn is_in_place(&self) -> bool {
        self.mode == OpMode::InPlace
    }
}

impl fmt::Display for OpMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpMode::InPlace => write!(f, "in-place"),
            OpMode::Copy => write!(f, "copy"),
        }
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self.kind, self.mode)
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self.kind, self.mode)
    }
}
