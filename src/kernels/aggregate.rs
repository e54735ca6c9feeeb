// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Aggregate Module
//!
//! Whole-matrix reductions built on the row algebra.
//!
//! Averages and moments divide by the declared `num_rows() * dim()`, not by
//! the number of stored elements, so sparse rows are averaged over their full
//! logical width with unstored entries counted as zero.
//!
//! All reductions run sequentially in row order, so results are
//! bit-reproducible regardless of the `parallel_proc` feature.

use crate::enums::error::MatrixError;
use crate::enums::row_slot::RowSlot;
use crate::structs::row_matrix::RowMatrix;
use crate::structs::vectors::dense::DenseVector;
use crate::traits::row_vector::RowVector;

impl<V: RowVector> RowMatrix<V> {
    /// Sum of every element.
    pub fn sum(&self) -> f64 {
        let mut res = 0.0;
        for row in self.present_rows() {
            res += row.sum();
        }
        res
    }

    /// `sum() / (num_rows() * dim())`
    pub fn average(&self) -> f64 {
        self.sum() / self.logical_len()
    }

    /// Euclidean norm of the matrix flattened to one vector.
    pub fn norm(&self) -> f64 {
        let mut res = 0.0;
        for row in self.present_rows() {
            let tmp = row.norm();
            res += tmp * tmp;
        }
        res.sqrt()
    }

    /// Population standard deviation over all logical elements.
    ///
    /// Uses the raw moment form `sqrt(E[x²] - E[x]²)`, which loses precision
    /// when the mean is large relative to the spread.
    pub fn std(&self) -> f64 {
        let (mut sum1, mut sum2) = (0.0, 0.0);
        for row in self.present_rows() {
            sum1 += row.sum();
            let tmp = row.norm();
            sum2 += tmp * tmp;
        }

        let n = self.logical_len();
        sum1 /= n;
        sum2 /= n;
        (sum2 - sum1 * sum1).sqrt()
    }

    /// Matrix-vector product: entry `i` is `row[i] · other`.
    ///
    /// The result carries this matrix's id and clock. Absent rows yield zero.
    pub fn dot(&self, other: &V) -> Result<DenseVector<f64>, MatrixError> {
        let mut res = Vec::with_capacity(self.rows.len());
        for slot in &self.rows {
            res.push(match slot {
                RowSlot::Present(row) => row.dot(other)?,
                _ => 0.0,
            });
        }
        Ok(DenseVector::from_vec(res).with_identity(self.matrix_id, 0, self.clock))
    }

    /// Transposed product `Σ_i weights[i] * row[i]`.
    ///
    /// Accumulates as a left fold from row 0, seeded with `row[0] * weights[0]`.
    /// `weights` must have at least `num_rows()` elements. An empty matrix
    /// yields a zero vector of width `dim()`.
    pub fn trans_dot(&self, weights: &V) -> Result<V, MatrixError> {
        let width = self.width()?;
        if weights.dim() < self.rows.len() {
            return Err(MatrixError::ShapeMismatch {
                expected: self.rows.len(),
                found: weights.dim(),
            });
        }
        let Some(first) = self.rows.first() else {
            return Ok(V::zeros(width));
        };

        let mut res = match first {
            RowSlot::Present(row) => row.scaled(weights.get(0)),
            _ => V::zeros(width),
        };
        for (i, slot) in self.rows.iter().enumerate().skip(1) {
            if let RowSlot::Present(row) = slot {
                res.iaxpy(row, weights.get(i))?;
            }
        }
        Ok(res)
    }

    #[inline]
    fn present_rows(&self) -> impl Iterator<Item = &V> {
        self.rows.iter().filter_map(RowSlot::as_ref)
    }

    // Declared element count; absent elements count as zeros.
    #[inline]
    fn logical_len(&self) -> f64 {
        self.rows.len() as f64 * self.cols as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn dv(v: &[f64]) -> DenseVector<f64> {
        DenseVector::from_slice(v)
    }

    fn m(rows: &[&[f64]]) -> RowMatrix<DenseVector<f64>> {
        let cols = rows[0].len() as u64;
        RowMatrix::from_rows(11, 6, cols, rows.iter().map(|r| dv(r)).collect())
    }

    #[test]
    fn test_sum_average_norm() {
        let m = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(m.sum(), 10.0);
        assert_eq!(m.average(), 2.5);
        assert_eq!(m.norm(), 30f64.sqrt());
    }

    #[test]
    fn test_std_population() {
        let m = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        // mean 2.5, E[x²] = 7.5, variance 1.25
        assert_relative_eq!(m.std(), 1.25f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_dot() {
        let m = m(&[&[1.0, 0.0], &[0.0, 1.0]]);
        let out = m.dot(&dv(&[5.0, 7.0])).unwrap();
        assert_eq!(out.as_slice(), &[5.0, 7.0]);
        assert_eq!((out.matrix_id, out.row_id, out.clock), (11, 0, 6));
    }

    #[test]
    fn test_dot_shape_mismatch() {
        let m = m(&[&[1.0, 0.0]]);
        let err = m.dot(&dv(&[1.0, 2.0, 3.0])).unwrap_err();
        assert_eq!(err, MatrixError::ShapeMismatch { expected: 2, found: 3 });
    }

    #[test]
    fn test_trans_dot() {
        let m = m(&[&[1.0, 0.0], &[0.0, 1.0]]);
        let out = m.trans_dot(&dv(&[2.0, 3.0])).unwrap();
        assert_eq!(out.as_slice(), &[2.0, 3.0]);
    }

    #[test]
    fn test_trans_dot_left_fold_order() {
        let m = m(&[&[0.1, 1.0], &[0.2, 1.0], &[0.3, 1.0]]);
        let w = dv(&[1.0, 1.0, 1.0]);
        let out = m.trans_dot(&w).unwrap();
        // ((0.1 * 1) + 0.2) + 0.3, evaluated in that order
        assert_eq!(out.as_slice()[0], (0.1 + 0.2) + 0.3);
        assert_eq!(out.as_slice()[1], 3.0);
    }

    #[test]
    fn test_trans_dot_short_weights() {
        let m = m(&[&[1.0], &[2.0]]);
        let err = m.trans_dot(&dv(&[1.0])).unwrap_err();
        assert_eq!(err, MatrixError::ShapeMismatch { expected: 2, found: 1 });
    }

    #[test]
    fn test_trans_dot_empty() {
        let m: RowMatrix<DenseVector<f64>> = RowMatrix::from_rows(0, 0, 3, vec![]);
        let out = m.trans_dot(&dv(&[])).unwrap();
        assert_eq!(out.as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_absent_rows_count_as_zero() {
        let mut m = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        m.clear_row(1);
        assert_eq!(m.sum(), 3.0);
        assert_eq!(m.average(), 0.75);
        assert_eq!(m.dot(&dv(&[1.0, 1.0])).unwrap().as_slice(), &[3.0, 0.0]);

        m.clear_row(0);
        let out = m.trans_dot(&dv(&[1.0, 1.0])).unwrap();
        assert_eq!(out.as_slice(), &[0.0, 0.0]);
    }

    #[cfg(feature = "sparse")]
    #[test]
    fn test_sparse_average_uses_declared_width() {
        use crate::SparseVector;

        let rows = vec![
            SparseVector::from_pairs(4, vec![(0, 4.0)]).unwrap(),
            SparseVector::from_pairs(4, vec![(3, 4.0)]).unwrap(),
        ];
        let m = RowMatrix::from_rows(0, 0, 4, rows);
        // 8 / (2 * 4), not 8 / 2 stored elements
        assert_eq!(m.average(), 1.0);
        // E[x²] = 32 / 8 = 4, mean 1
        assert_relative_eq!(m.std(), 3f64.sqrt(), epsilon = 1e-12);
    }
}
