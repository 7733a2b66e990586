use ndarray::array;

use super::accuracy;
use crate::estimators::error::NaiveBayesError;

#[test]
fn test_accuracy() {
    let y_true = array!["cat", "dog", "dog", "bird"];
    let y_pred = array!["cat", "dog", "cat", "bird"];
    let acc: f64 = accuracy(y_true.view(), y_pred.view()).unwrap();
    assert_eq!(acc, 0.75);
}

#[test]
fn test_accuracy_perfect_and_empty() {
    let y = array![1, 2, 3];
    let acc: f32 = accuracy(y.view(), y.view()).unwrap();
    assert_eq!(acc, 1.);

    let empty = ndarray::Array1::<i32>::zeros(0);
    let acc: f64 = accuracy(empty.view(), empty.view()).unwrap();
    assert_eq!(acc, 0.);
}

#[test]
fn test_accuracy_length_mismatch() {
    let y_true = array![0, 1, 1];
    let y_pred = array![0, 1];
    let res = accuracy::<f64, _>(y_true.view(), y_pred.view());
    assert_eq!(
        res,
        Err(NaiveBayesError::LengthMismatch {
            samples: 2,
            targets: 3
        })
    );
}
