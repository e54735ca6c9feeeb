// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use crate::enums::error::MatrixError;
use crate::enums::operators::{BinaryKind, UnaryKind};
use crate::enums::shape_dim::ShapeDim;
use crate::traits::print::{MAX_PREVIEW, format_float};
use crate::traits::row_vector::RowVector;
use crate::traits::shape::Shape;
use crate::Float;

/// Sparse row vector with sorted index/value storage.
///
/// Indices are strictly increasing and below `dim`. Unstored entries are
/// logically zero.
///
/// ### Kernel semantics
/// - `Add`, `Sub`, `Axpy` and `Div` are evaluated over the union of both
///   operands' stored indices, reading a missing side as zero.
/// - `Mul` keeps only indices stored on both sides.
/// - Unary operations apply to stored entries only, so `f(0)` is never
///   materialised for unstored entries.
#[derive(PartialEq, Clone, Debug, Default)]
pub struct SparseVector<T> {
    pub dim: usize,
    indices: Vec<usize>,
    values: Vec<T>,
}

impl<T: Float> SparseVector<T> {
    /// Empty vector of logical length `dim`.
    #[inline]
    pub fn new(dim: usize) -> Self {
        SparseVector { dim, indices: Vec::new(), values: Vec::new() }
    }

    /// Builds from unordered `(index, value)` pairs. A repeated index keeps the last value.
    pub fn from_pairs(dim: usize, mut pairs: Vec<(usize, T)>) -> Result<Self, MatrixError> {
        if let Some(&(index, _)) = pairs.iter().find(|(i, _)| *i >= dim) {
            return Err(MatrixError::IndexOutOfRange { index, len: dim });
        }
        // stable sort so the later duplicate stays last
        pairs.sort_by_key(|(i, _)| *i);
        let mut out = Self::new(dim);
        for (i, v) in pairs {
            if out.indices.last() == Some(&i) {
                if let Some(last) = out.values.last_mut() {
                    *last = v;
                }
            } else {
                out.indices.push(i);
                out.values.push(v);
            }
        }
        Ok(out)
    }

    /// Stores `value` at `idx`, replacing any existing entry.
    pub fn set(&mut self, idx: usize, value: T) -> Result<(), MatrixError> {
        if idx >= self.dim {
            return Err(MatrixError::IndexOutOfRange { index: idx, len: self.dim });
        }
        match self.indices.binary_search(&idx) {
            Ok(pos) => self.values[pos] = value,
            Err(pos) => {
                self.indices.insert(pos, idx);
                self.values.insert(pos, value);
            }
        }
        Ok(())
    }

    /// Number of stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Sorted merge of the two index sets.
    fn merge(&self, other: &Self, kind: BinaryKind) -> (Vec<usize>, Vec<T>) {
        let intersect_only = matches!(kind, BinaryKind::Mul);
        let cap = if intersect_only {
            self.nnz().min(other.nnz())
        } else {
            self.nnz() + other.nnz()
        };
        let mut indices = Vec::with_capacity(cap);
        let mut values = Vec::with_capacity(cap);
        let (mut a, mut b) = (0, 0);
        let emit = |idx: usize, l: f64, r: f64, indices: &mut Vec<usize>, values: &mut Vec<T>| {
            indices.push(idx);
            values.push(T::from_f64_lossy(kind.apply(l, r)));
        };

        while a < self.nnz() && b < other.nnz() {
            let (ia, ib) = (self.indices[a], other.indices[b]);
            match ia.cmp(&ib) {
                Ordering::Equal => {
                    let l = self.values[a].to_f64_lossless();
                    let r = other.values[b].to_f64_lossless();
                    emit(ia, l, r, &mut indices, &mut values);
                    a += 1;
                    b += 1;
                }
                Ordering::Less => {
                    if !intersect_only {
                        emit(ia, self.values[a].to_f64_lossless(), 0.0, &mut indices, &mut values);
                    }
                    a += 1;
                }
                Ordering::Greater => {
                    if !intersect_only {
                        emit(ib, 0.0, other.values[b].to_f64_lossless(), &mut indices, &mut values);
                    }
                    b += 1;
                }
            }
        }
        if !intersect_only {
            for k in a..self.nnz() {
                emit(self.indices[k], self.values[k].to_f64_lossless(), 0.0, &mut indices, &mut values);
            }
            for k in b..other.nnz() {
                emit(other.indices[k], 0.0, other.values[k].to_f64_lossless(), &mut indices, &mut values);
            }
        }
        (indices, values)
    }
}

impl<T: Float> RowVector for SparseVector<T> {
    #[inline]
    fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    fn zeros(dim: usize) -> Self {
        Self::new(dim)
    }

    fn get(&self, idx: usize) -> f64 {
        match self.indices.binary_search(&idx) {
            Ok(pos) => self.values[pos].to_f64_lossless(),
            Err(_) => 0.0,
        }
    }

    fn binary_assign(&mut self, other: &Self, kind: BinaryKind) -> Result<(), MatrixError> {
        self.check_compatible(other)?;
        let (indices, values) = self.merge(other, kind);
        self.indices = indices;
        self.values = values;
        Ok(())
    }

    fn binary(&self, other: &Self, kind: BinaryKind) -> Result<Self, MatrixError> {
        self.check_compatible(other)?;
        let (indices, values) = self.merge(other, kind);
        Ok(SparseVector { dim: self.dim, indices, values })
    }

    fn unary_assign(&mut self, kind: UnaryKind) {
        for v in self.values.iter_mut() {
            *v = T::from_f64_lossy(kind.apply(v.to_f64_lossless()));
        }
    }

    fn dot(&self, other: &Self) -> Result<f64, MatrixError> {
        self.check_compatible(other)?;
        let (mut a, mut b) = (0, 0);
        let mut acc = 0.0;
        while a < self.nnz() && b < other.nnz() {
            match self.indices[a].cmp(&other.indices[b]) {
                Ordering::Equal => {
                    acc += self.values[a].to_f64_lossless() * other.values[b].to_f64_lossless();
                    a += 1;
                    b += 1;
                }
                Ordering::Less => a += 1,
                Ordering::Greater => b += 1,
            }
        }
        Ok(acc)
    }

    fn sum(&self) -> f64 {
        self.values.iter().map(|v| v.to_f64_lossless()).sum()
    }

    fn norm(&self) -> f64 {
        self.values
            .iter()
            .map(|v| {
                let x = v.to_f64_lossless();
                x * x
            })
            .sum::<f64>()
            .sqrt()
    }

    fn for_each_stored(&self, f: &mut dyn FnMut(usize, f64)) {
        for (i, v) in self.indices.iter().zip(self.values.iter()) {
            f(*i, v.to_f64_lossless());
        }
    }
}

impl<T> Shape for SparseVector<T> {
    fn shape(&self) -> ShapeDim {
        ShapeDim::Rank1(self.dim)
    }
}

impl<T> Display for SparseVector<T>
where
    T: Float + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let nnz = self.indices.len();

        writeln!(f, "SparseVector [dim {}, {} stored]", self.dim, nnz)?;

        write!(f, "{{")?;

        for (k, (i, v)) in self.indices.iter().zip(self.values.iter()).take(MAX_PREVIEW).enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", i, format_float(*v))?;
        }

        if nnz > MAX_PREVIEW {
            write!(f, ", … ({} total)", nnz)?;
        }

        write!(f, "}}")
    }
}
