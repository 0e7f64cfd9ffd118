//! Integration tests for the `add` dispatcher.

use approx::assert_relative_eq;
use proptest::prelude::*;
use sumar::{add, Buffer, DType, Error};

#[test]
fn singleton_both_dtypes() {
    let a = Buffer::from(vec![1.0_f32]);
    let sum = add(&a, &a).unwrap();
    assert_eq!(sum.as_f32(), Some(&[2.0_f32][..]));

    let a = Buffer::from(vec![1.0_f64]);
    let sum = add(&a, &a).unwrap();
    assert_eq!(sum.as_f64(), Some(&[2.0_f64][..]));
}

#[test]
fn empty_inputs_yield_empty_output() {
    let a = Buffer::from(Vec::<f64>::new());
    let sum = add(&a, &a).unwrap();
    assert_eq!(sum.len(), 0);
    assert_eq!(sum.dtype(), DType::F64);
}

#[test]
fn large_array() {
    // 2M elements, ~16 MiB of f64.
    let n = 1 << 21;
    let a = Buffer::from(vec![1.0_f64; n]);
    let sum = add(&a, &a).unwrap();
    let out = sum.as_f64().unwrap();
    assert_eq!(out.len(), n);
    assert_eq!(out[0], 2.0);
    assert_eq!(out[n - 1], 2.0);
}

#[test]
fn shape_mismatch_is_rejected() {
    let a = Buffer::from(vec![1.0_f32; 8]);
    let b = Buffer::from(vec![1.0_f32; 7]);
    assert_eq!(
        add(&a, &b).unwrap_err(),
        Error::ShapeMismatch { left: 8, right: 7 }
    );
}

#[test]
fn dtype_mismatch_is_rejected() {
    let a = Buffer::from(vec![1.0_f32; 4]);
    let b = Buffer::from(vec![1.0_f64; 4]);
    assert!(matches!(
        add(&a, &b).unwrap_err(),
        Error::UnsupportedType(_)
    ));
}

fn paired_vecs_f32() -> impl Strategy<Value = (Vec<f32>, Vec<f32>)> {
    (0usize..512).prop_flat_map(|n| {
        (
            prop::collection::vec(-1.0e6_f32..1.0e6, n),
            prop::collection::vec(-1.0e6_f32..1.0e6, n),
        )
    })
}

fn paired_vecs_f64() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (0usize..512).prop_flat_map(|n| {
        (
            prop::collection::vec(-1.0e12_f64..1.0e12, n),
            prop::collection::vec(-1.0e12_f64..1.0e12, n),
        )
    })
}

proptest! {
    #[test]
    fn add_matches_scalar_f32((a, b) in paired_vecs_f32()) {
        let sum = add(&Buffer::from(a.clone()), &Buffer::from(b.clone())).unwrap();
        let out = sum.as_f32().unwrap();
        prop_assert_eq!(out.len(), a.len());
        for i in 0..a.len() {
            // Single two-operand sums are bitwise identical to scalar.
            prop_assert_eq!(out[i], a[i] + b[i]);
        }
    }

    #[test]
    fn add_matches_scalar_f64((a, b) in paired_vecs_f64()) {
        let sum = add(&Buffer::from(a.clone()), &Buffer::from(b.clone())).unwrap();
        prop_assert_eq!(sum.dtype(), DType::F64);
        let out = sum.as_f64().unwrap();
        prop_assert_eq!(out.len(), a.len());
        for i in 0..a.len() {
            assert_relative_eq!(out[i], a[i] + b[i]);
        }
    }

    #[test]
    fn add_is_commutative((a, b) in paired_vecs_f32()) {
        let a = Buffer::from(a);
        let b = Buffer::from(b);
        prop_assert_eq!(add(&a, &b).unwrap(), add(&b, &a).unwrap());
    }

    #[test]
    fn add_preserves_length_and_dtype((a, b) in paired_vecs_f64()) {
        let n = a.len();
        let sum = add(&Buffer::from(a), &Buffer::from(b)).unwrap();
        prop_assert_eq!(sum.len(), n);
        prop_assert_eq!(sum.dtype(), DType::F64);
    }
}
