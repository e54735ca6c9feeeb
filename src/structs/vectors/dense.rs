// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

use std::fmt::{Display, Formatter};

use crate::enums::error::MatrixError;
use crate::enums::operators::{BinaryKind, UnaryKind};
use crate::enums::shape_dim::ShapeDim;
use crate::traits::print::{MAX_PREVIEW, format_float};
use crate::traits::row_vector::RowVector;
use crate::traits::shape::Shape;
use crate::Float;

/// Dense row vector.
///
/// Every logical element is stored, so `dim() == data.len()`.
///
/// ### Fields
/// - `data`: Backing values.
/// - `matrix_id`, `row_id`, `clock`: Identity of the parameter partition the
///   vector was produced from. Zero for free-standing vectors. Elementwise
///   operations keep the left operand's identity.
///
/// ### Usage Tips
/// Kernels widen each element to `f64`, apply the operation, and narrow back,
/// so `DenseVector<f32>` rows share the exact kernels of `DenseVector<f64>`.
#[derive(PartialEq, Clone, Debug, Default)]
pub struct DenseVector<T> {
    /// Backing buffer for values.
    pub data: Vec<T>,
    pub matrix_id: i32,
    pub row_id: i32,
    pub clock: i32,
}

impl<T: Float> DenseVector<T> {
    #[inline]
    pub fn from_vec(data: Vec<T>) -> Self {
        DenseVector { data, matrix_id: 0, row_id: 0, clock: 0 }
    }

    #[inline]
    pub fn from_slice(data: &[T]) -> Self {
        Self::from_vec(data.to_vec())
    }

    /// Stamps the vector with a partition identity.
    #[inline]
    pub fn with_identity(mut self, matrix_id: i32, row_id: i32, clock: i32) -> Self {
        self.matrix_id = matrix_id;
        self.row_id = row_id;
        self.clock = clock;
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Float> RowVector for DenseVector<T> {
    #[inline]
    fn dim(&self) -> usize {
        self.data.len()
    }

    fn zeros(dim: usize) -> Self {
        Self::from_vec(vec![T::zero(); dim])
    }

    #[inline]
    fn get(&self, idx: usize) -> f64 {
        debug_assert!(idx < self.data.len(), "Index out of bounds");
        self.data[idx].to_f64_lossless()
    }

    fn binary_assign(&mut self, other: &Self, kind: BinaryKind) -> Result<(), MatrixError> {
        self.check_compatible(other)?;
        for (l, r) in self.data.iter_mut().zip(other.data.iter()) {
            *l = T::from_f64_lossy(kind.apply(l.to_f64_lossless(), r.to_f64_lossless()));
        }
        Ok(())
    }

    fn binary(&self, other: &Self, kind: BinaryKind) -> Result<Self, MatrixError> {
        self.check_compatible(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(l, r)| T::from_f64_lossy(kind.apply(l.to_f64_lossless(), r.to_f64_lossless())))
            .collect();
        Ok(self.with_data(data))
    }

    fn unary_assign(&mut self, kind: UnaryKind) {
        for v in self.data.iter_mut() {
            *v = T::from_f64_lossy(kind.apply(v.to_f64_lossless()));
        }
    }

    fn unary(&self, kind: UnaryKind) -> Self {
        let data = self
            .data
            .iter()
            .map(|v| T::from_f64_lossy(kind.apply(v.to_f64_lossless())))
            .collect();
        self.with_data(data)
    }

    fn dot(&self, other: &Self) -> Result<f64, MatrixError> {
        self.check_compatible(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(l, r)| l.to_f64_lossless() * r.to_f64_lossless())
            .sum())
    }

    fn sum(&self) -> f64 {
        self.data.iter().map(|v| v.to_f64_lossless()).sum()
    }

    fn norm(&self) -> f64 {
        self.data
            .iter()
            .map(|v| {
                let x = v.to_f64_lossless();
                x * x
            })
            .sum::<f64>()
            .sqrt()
    }

    fn for_each_stored(&self, f: &mut dyn FnMut(usize, f64)) {
        for (i, v) in self.data.iter().enumerate() {
            f(i, v.to_f64_lossless());
        }
    }
}

impl<T> DenseVector<T> {
    // Same identity, new values.
    #[inline]
    fn with_data(&self, data: Vec<T>) -> Self {
        DenseVector {
            data,
            matrix_id: self.matrix_id,
            row_id: self.row_id,
            clock: self.clock,
        }
    }
}

impl<T> Shape for DenseVector<T> {
    fn shape(&self) -> ShapeDim {
        ShapeDim::Rank1(self.data.len())
    }
}

impl<T: Float> From<Vec<T>> for DenseVector<T> {
    #[inline]
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Float> From<&[T]> for DenseVector<T> {
    #[inline]
    fn from(data: &[T]) -> Self {
        Self::from_slice(data)
    }
}

impl<T: Float> FromIterator<T> for DenseVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Display for DenseVector<T>
where
    T: Float + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let len = self.data.len();

        writeln!(f, "DenseVector [{} values] (matrix: {}, row: {}, clock: {})", len, self.matrix_id, self.row_id, self.clock)?;

        write!(f, "[")?;

        for (i, v) in self.data.iter().take(MAX_PREVIEW).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", format_float(*v))?;
        }

        if len > MAX_PREVIEW {
            write!(f, ", … ({} total)", len)?;
        }

        write!(f, "]")
    }
}
