use ndarray::ArrayView1;

use crate::estimators::error::{NaiveBayesError, Result};
use crate::Float;

#[cfg(test)]
mod tests;

/// This function computes the fraction of predictions that match the true
/// labels. An empty pair of arrays has an accuracy of zero.
pub fn accuracy<F: Float, L: PartialEq>(y_true: ArrayView1<L>, y_pred: ArrayView1<L>) -> Result<F> {
    if y_true.len() != y_pred.len() {
        return Err(NaiveBayesError::LengthMismatch {
            samples: y_pred.len(),
            targets: y_true.len(),
        });
    }
    if y_true.is_empty() {
        return Ok(F::zero());
    }
    let n_correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(truth, pred)| truth == pred)
        .count();
    Ok(F::cast(n_correct) / F::cast(y_true.len()))
}
