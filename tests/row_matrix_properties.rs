//! Integration tests for the RowMatrix dispatch, reduction and lifecycle surface

use approx::assert_relative_eq;
use proptest::prelude::*;

use rowmatrix::{
    Binary, BinaryKind, DenseVector, MatrixError, RowMatrix, RowSlot, Unary, UnaryKind,
};

fn dv(v: &[f64]) -> DenseVector<f64> {
    DenseVector::from_slice(v)
}

fn matrix(rows: &[Vec<f64>]) -> RowMatrix<DenseVector<f64>> {
    let cols = rows.first().map(|r| r.len()).unwrap_or(0) as u64;
    RowMatrix::from_rows(42, 7, cols, rows.iter().map(|r| dv(r)).collect())
}

fn values(m: &RowMatrix<DenseVector<f64>>) -> Vec<Vec<f64>> {
    m.rows()
        .iter()
        .map(|s| s.as_ref().map(|r| r.as_slice().to_vec()).unwrap_or_default())
        .collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + b.abs())
}

/// Row count, then rows of equal width plus a vector of that width.
fn rows_and_vector() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<f64>)> {
    (1usize..5, 1usize..6).prop_flat_map(|(n, c)| {
        (
            prop::collection::vec(prop::collection::vec(-100.0f64..100.0, c), n),
            prop::collection::vec(-100.0f64..100.0, c),
        )
    })
}

fn binary_kind() -> impl Strategy<Value = BinaryKind> {
    prop_oneof![
        Just(BinaryKind::Add),
        Just(BinaryKind::Sub),
        Just(BinaryKind::Mul),
        Just(BinaryKind::Div),
        (-4.0f64..4.0).prop_map(BinaryKind::Axpy),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_scalar_add_sub_round_trip((rows, _) in rows_and_vector(), c in -10.0f64..10.0) {
        let m = matrix(&rows);
        let back = m.add_scalar(c).unwrap().sub_scalar(c).unwrap();
        for (got, want) in values(&back).iter().flatten().zip(rows.iter().flatten()) {
            prop_assert!(close(*got, *want), "{} != {}", got, want);
        }
    }

    #[test]
    fn prop_broadcast_add_sub_round_trip((rows, v) in rows_and_vector()) {
        let m = matrix(&rows);
        let v = dv(&v);
        let back = m.add_vec(&v).unwrap().sub_vec(&v).unwrap();
        for (got, want) in values(&back).iter().flatten().zip(rows.iter().flatten()) {
            prop_assert!(close(*got, *want), "{} != {}", got, want);
        }
    }

    #[test]
    fn prop_copy_matches_in_place((rows, v) in rows_and_vector(), kind in binary_kind()) {
        let m = matrix(&rows);
        let v = dv(&v);

        let mut receiver = m.clone();
        let copied = receiver
            .calculate_broadcast(&v, Binary::copying(kind))
            .unwrap()
            .into_new()
            .unwrap();
        prop_assert_eq!(&receiver, &m);

        let mut in_place = m.clone();
        in_place.calculate_broadcast(&v, Binary::in_place(kind)).unwrap();
        prop_assert_eq!(values(&copied), values(&in_place));
    }

    #[test]
    fn prop_row_dispatch_touches_only_target((rows, v) in rows_and_vector(), pick in 0usize..5) {
        let m = matrix(&rows);
        let row_id = pick % rows.len();
        let mut target = m.clone();
        target.iaxpy_row(row_id, &dv(&v), 1.5).unwrap();

        for (i, (got, orig)) in values(&target).iter().zip(rows.iter()).enumerate() {
            if i != row_id {
                let got_bits: Vec<u64> = got.iter().map(|x| x.to_bits()).collect();
                let orig_bits: Vec<u64> = orig.iter().map(|x| x.to_bits()).collect();
                prop_assert_eq!(got_bits, orig_bits);
            }
        }
    }
}

#[test]
fn test_norm_of_concrete_matrix() {
    let m = matrix(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
    assert_relative_eq!(m.norm(), 30f64.sqrt());
    assert_relative_eq!(m.norm().powi(2), 30.0, epsilon = 1e-12);
}

#[test]
fn test_average_of_concrete_matrix() {
    let m = matrix(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
    assert_eq!(m.sum(), 10.0);
    assert_eq!(m.average(), 2.5);
}

#[test]
fn test_dot_identity_rows() {
    let m = matrix(&[vec![1.0, 0.0], vec![0.0, 1.0]]);
    assert_eq!(m.dot(&dv(&[5.0, 7.0])).unwrap().as_slice(), &[5.0, 7.0]);
}

#[test]
fn test_trans_dot_identity_rows() {
    let m = matrix(&[vec![1.0, 0.0], vec![0.0, 1.0]]);
    assert_eq!(m.trans_dot(&dv(&[2.0, 3.0])).unwrap().as_slice(), &[2.0, 3.0]);
}

#[test]
fn test_clear_row_yields_absent_marker() {
    let mut m = matrix(&[vec![1.0, 0.0], vec![0.0, 1.0]]);
    m.clear_row(1);
    assert_eq!(m.get_row(1).unwrap(), &RowSlot::Cleared);
    assert!(m.get_row(1).unwrap().is_absent());
}

#[test]
fn test_copying_leaves_receiver_and_operand_unchanged() {
    let a = matrix(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
    let b = matrix(&[vec![5.0, 6.0], vec![7.0, 8.0]]);
    let (a0, b0) = (a.clone(), b.clone());
    let out = a.div_matrix(&b).unwrap();
    assert_eq!(a, a0);
    assert_eq!(b, b0);
    assert_eq!(values(&out)[1], vec![3.0 / 7.0, 0.5]);
}

#[test]
fn test_in_place_returns_same_instance() {
    let mut m = matrix(&[vec![1.0, 2.0]]);
    let ptr = &m as *const _;
    let out = m.calculate_unary(Unary::in_place(UnaryKind::SMul(2.0))).unwrap();
    assert!(out.is_in_place());
    assert!(std::ptr::eq(out.matrix(), ptr));
}

#[test]
fn test_errors_propagate_from_row_algebra() {
    let mut m = matrix(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
    let err = m.iadd_vec(&dv(&[1.0])).unwrap_err();
    assert_eq!(err, MatrixError::ShapeMismatch { expected: 2, found: 1 });
    assert_eq!(values(&m), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);

    let err = m.add_row(9, &dv(&[1.0, 1.0])).unwrap_err();
    assert_eq!(err, MatrixError::IndexOutOfRange { index: 9, len: 2 });
}

#[cfg(feature = "sparse")]
#[test]
fn test_sparse_rows_share_the_dispatch_core() {
    use rowmatrix::SparseVector;

    let rows = vec![
        SparseVector::from_pairs(1000, vec![(3, 1.0), (999, 2.0)]).unwrap(),
        SparseVector::from_pairs(1000, vec![(10, -1.0)]).unwrap(),
    ];
    let mut m = RowMatrix::from_rows(5, 1, 1000, rows);
    let grad = SparseVector::from_pairs(1000, vec![(3, 4.0), (10, 1.0)]).unwrap();

    m.iaxpy_vec(&grad, -0.5).unwrap();
    let r0 = m.row(0).unwrap().unwrap();
    assert_eq!(r0.indices(), &[3, 10, 999]);
    assert_eq!(r0.values(), &[-1.0, -0.5, 2.0]);
    let r1 = m.row(1).unwrap().unwrap();
    assert_eq!(r1.indices(), &[3, 10]);
    assert_eq!(r1.values(), &[-2.0, -1.5]);

    assert_eq!(m.sum(), -1.0 - 0.5 + 2.0 - 2.0 - 1.5);
    assert_eq!(m.dot(&grad).unwrap().as_slice(), &[-4.0 - 0.5, -8.0 - 1.5]);
}
