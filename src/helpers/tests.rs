use super::stats::*;
use super::test_helpers::{assert_array_all_close, generate_gaussian_blobs};
use ndarray::{array, Array1};

#[test]
fn column_moments_works() {
    let X = array![[1., 10.], [2., 10.], [3., 10.], [6., 10.]];
    let (mean, variance) = column_moments(X.view());
    assert_array_all_close(mean.view(), array![3., 10.].view(), 1e-12);
    // Population variance: (4 + 1 + 0 + 9) / 4
    assert_array_all_close(variance.view(), array![3.5, 0.].view(), 1e-12);
}

#[test]
fn column_moments_single_row() {
    let X = array![[-2.5f32, 4.]];
    let (mean, variance) = column_moments(X.view());
    assert_eq!(mean, array![-2.5f32, 4.]);
    assert_eq!(variance, array![0f32, 0.]);
}

#[test]
fn argmax_first_works() {
    assert_eq!(argmax_first(&array![0.1, 3.2, -1.]), Some(1));
    assert_eq!(argmax_first(&array![f64::NEG_INFINITY, -1e300]), Some(1));
}

#[test]
fn argmax_first_breaks_ties_by_lowest_index() {
    assert_eq!(argmax_first(&array![1., 5., 5., 2.]), Some(1));
    assert_eq!(argmax_first(&array![2., 2.]), Some(0));
    let all_neg_inf = Array1::from_elem(3, f64::NEG_INFINITY);
    assert_eq!(argmax_first(&all_neg_inf), Some(0));
}

#[test]
fn argmax_first_empty() {
    let empty = Array1::<f64>::zeros(0);
    assert_eq!(argmax_first(&empty), None);
}

#[test]
fn argmax_first_skips_nan() {
    assert_eq!(argmax_first(&array![f64::NAN, 1., 1.]), Some(1));
    assert_eq!(argmax_first(&array![2., f64::NAN, 2.]), Some(0));
    assert_eq!(argmax_first(&array![f64::NAN]), None);
}

#[test]
fn softmax_inplace_works() {
    let mut x = array![1f64.ln(), 2f64.ln(), 3f64.ln()];
    softmax_inplace(&mut x);
    assert_array_all_close(x.view(), array![1. / 6., 2. / 6., 3. / 6.].view(), 1e-12);
}

#[test]
fn softmax_inplace_keeps_precision_on_large_scores() {
    // ln(2) vanishes when added back to -5e8, equal entries must stay 0.5.
    let mut x = array![-5e8f32, -5e8];
    softmax_inplace(&mut x);
    assert_eq!(x, array![0.5f32, 0.5]);

    let mut x = array![-5.000000123e8f64, -5.000000123e8, -2e9];
    softmax_inplace(&mut x);
    assert_eq!(x, array![0.5, 0.5, 0.]);
}

#[test]
fn softmax_inplace_all_neg_inf() {
    let mut x = Array1::from_elem(4, f64::NEG_INFINITY);
    softmax_inplace(&mut x);
    assert_eq!(x, Array1::from_elem(4, 0.25));
}

#[test]
fn log_softmax_inplace_works() {
    let mut x = array![-5e8f32, -5e8, -2e9];
    log_softmax_inplace(&mut x);
    assert_eq!(x[0], -(2f32.ln()));
    assert_eq!(x[1], -(2f32.ln()));
    assert!(x[2] < -1e9);

    let mut y = array![-2000., -2001.];
    let mut p = y.clone();
    log_softmax_inplace(&mut y);
    softmax_inplace(&mut p);
    assert_array_all_close(y.mapv(f64::exp).view(), p.view(), 1e-12);

    let mut z = Array1::from_elem(2, f64::NEG_INFINITY);
    log_softmax_inplace(&mut z);
    assert_eq!(z, Array1::from_elem(2, -(2f64.ln())));
}

#[test]
fn generate_gaussian_blobs_is_seeded() {
    let centers = array![[0., 0.], [5., 5.]];
    let (X1, y1) = generate_gaussian_blobs(centers.view(), 1., 10, 42);
    let (X2, y2) = generate_gaussian_blobs(centers.view(), 1., 10, 42);
    assert_eq!(X1.dim(), (20, 2));
    assert_eq!(X1, X2);
    assert_eq!(y1, y2);
    assert_eq!(y1.iter().filter(|&&label| label == 1).count(), 10);
}
