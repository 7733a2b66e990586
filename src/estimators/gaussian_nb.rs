use std::collections::BTreeMap;

use log::{debug, warn};
use ndarray::{Array1, Array2, ArrayBase, ArrayView1, ArrayView2, Axis, Data, Ix1, Ix2};

use super::error::{NaiveBayesError, Result};
use super::hyperparams::{GaussianNbParams, GaussianNbValidParams};
use super::traits::Fit;
use crate::datasets::DatasetBase;
use crate::helpers::stats::{argmax_first, column_moments, log_softmax_inplace, softmax_inplace};
use crate::metrics::accuracy;
use crate::Float;

/// Parameters estimated by a successful call to `fit`. Row `i` of `means` and
/// `variances` belongs to `classes[i]`.
#[derive(Debug, Clone, PartialEq)]
struct FittedState<F, L> {
    classes: Array1<L>,
    prior_counts: Array1<usize>,
    means: Array2<F>,
    variances: Array2<F>,
    epsilon: F,
}

/// The Gaussian naive Bayes classifier
///
/// Within each class, every feature is modeled by an independent normal
/// distribution whose mean and population variance are estimated from the
/// training data. A sample is scored against class `i` with
/// ```ignore
/// prior_counts[i] * exp(-0.5 * sum_j (x_j - mean[i][j])^2 / var[i][j])
///     / sqrt(prod_j var[i][j])
/// ```
/// where `var` is the per-class variance plus the variance floor `epsilon`.
/// Scores are evaluated in log space so that far-away samples do not
/// underflow every class to zero.
///
/// The classifier starts unfitted; every prediction method returns
/// [`NaiveBayesError::NotFitted`] until `fit` succeeds. `fit` takes `&mut self`
/// and predictions take `&self`, so a fitted model can be shared between
/// readers.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianNaiveBayes<F, L> {
    params: GaussianNbValidParams<F>,
    state: Option<FittedState<F, L>>,
}

impl<F: Float, L: Ord + Clone> Default for GaussianNaiveBayes<F, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float, L: Ord + Clone> GaussianNaiveBayes<F, L> {
    /// This method instantiates the hyperparameters of a Gaussian naive Bayes
    /// estimator with their default values.
    pub fn params() -> GaussianNbParams<F> {
        GaussianNbParams::new()
    }

    /// Creates an unfitted classifier with default hyperparameters.
    pub fn new() -> Self {
        Self::with_params(GaussianNbValidParams::default())
    }

    /// Creates an unfitted classifier from checked hyperparameters.
    pub fn with_params(params: GaussianNbValidParams<F>) -> Self {
        GaussianNaiveBayes {
            params,
            state: None,
        }
    }

    pub fn hyperparams(&self) -> &GaussianNbValidParams<F> {
        &self.params
    }

    pub fn is_fitted(&self) -> bool {
        self.state.is_some()
    }

    /// Estimates the class list, the class counts and the per-class mean and
    /// variance of every feature, replacing any previous fit.
    ///
    /// Inputs are validated before anything is overwritten: on error the
    /// previously fitted parameters, if any, are kept. Values large enough to
    /// overflow the means or variances are rejected with
    /// [`NaiveBayesError::NonFiniteStatistics`].
    pub fn fit<D, S>(&mut self, X: &ArrayBase<D, Ix2>, y: &ArrayBase<S, Ix1>) -> Result<&mut Self>
    where
        D: Data<Elem = F>,
        S: Data<Elem = L>,
    {
        let (n_samples, n_features) = X.dim();
        if n_samples == 0 || n_features == 0 {
            return Err(NaiveBayesError::EmptyDataset);
        }
        if y.len() != n_samples {
            return Err(NaiveBayesError::LengthMismatch {
                samples: n_samples,
                targets: y.len(),
            });
        }
        check_finite(X.view())?;

        // BTreeMap keeps the labels sorted, which fixes the class indices.
        let mut rows_per_class: BTreeMap<&L, Vec<usize>> = BTreeMap::new();
        for (row, label) in y.iter().enumerate() {
            rows_per_class.entry(label).or_default().push(row);
        }

        let n_classes = rows_per_class.len();
        let mut classes = Vec::with_capacity(n_classes);
        let mut prior_counts = Array1::<usize>::zeros(n_classes);
        let mut means = Array2::<F>::zeros((n_classes, n_features));
        let mut variances = Array2::<F>::zeros((n_classes, n_features));

        for (i, (label, rows)) in rows_per_class.into_iter().enumerate() {
            let X_class = X.select(Axis(0), &rows);
            let (mean, variance) = column_moments(X_class.view());
            classes.push(label.clone());
            prior_counts[i] = rows.len();
            means.row_mut(i).assign(&mean);
            variances.row_mut(i).assign(&variance);
        }

        let epsilon = self.variance_floor(X.view());
        check_statistics(&means, &variances, epsilon)?;
        let n_degenerate = variances.iter().filter(|&&v| v == F::zero()).count();
        if n_degenerate > 0 {
            warn!(
                "{} class/feature pairs have zero variance, using the variance floor {}",
                n_degenerate, epsilon
            );
        }
        debug!(
            "fitted Gaussian naive Bayes on {} samples: {} classes, {} features, epsilon {}",
            n_samples, n_classes, n_features, epsilon
        );

        self.state = Some(FittedState {
            classes: Array1::from_vec(classes),
            prior_counts,
            means,
            variances,
            epsilon,
        });
        Ok(self)
    }

    /// `var_smoothing` times the largest feature variance of the training
    /// set, or `var_smoothing` alone when every feature is constant.
    fn variance_floor(&self, X: ArrayView2<F>) -> F {
        let var_smoothing = self.params.var_smoothing();
        let (_, variance) = column_moments(X);
        let max_variance = variance.fold(F::zero(), |max_val, &v| max_val.max(v));
        let epsilon = var_smoothing * max_variance;
        if epsilon > F::zero() {
            epsilon
        } else {
            var_smoothing
        }
    }

    /// Returns the unnormalized joint log-likelihood of every sample and
    /// class, that is `ln(prior_counts[i]) + ln(p(x | class i))` up to the
    /// constant `-D/2 * ln(2 pi)`. Shape is `n_samples x n_classes`.
    pub fn predict_joint_log_proba<D>(&self, X: &ArrayBase<D, Ix2>) -> Result<Array2<F>>
    where
        D: Data<Elem = F>,
    {
        let state = self.fitted()?;
        let n_features = state.means.ncols();
        if X.ncols() != n_features {
            return Err(NaiveBayesError::FeatureMismatch {
                expected: n_features,
                found: X.ncols(),
            });
        }
        check_finite(X.view())?;

        let half = F::cast(0.5);
        let smoothed = &state.variances + state.epsilon;
        let log_priors = state.prior_counts.mapv(|count| F::cast(count).ln());
        let log_dets = smoothed.map_axis(Axis(1), |var| var.iter().map(|v| v.ln()).sum::<F>());

        let n_classes = state.classes.len();
        let mut jll = Array2::<F>::zeros((X.nrows(), n_classes));
        for (x, mut jll_row) in X.rows().into_iter().zip(jll.rows_mut()) {
            for i in 0..n_classes {
                let distance = scaled_distance(x, state.means.row(i), smoothed.row(i));
                jll_row[i] = log_priors[i] - half * distance - half * log_dets[i];
            }
        }
        Ok(jll)
    }

    /// Returns the class scores of every sample, columns ordered like
    /// [`classes`](Self::classes).
    ///
    /// With `normalize`, each row is divided by its sum and is a probability
    /// distribution over the classes. If every class score of a row is zero
    /// even in log space, the row is uniform. Without `normalize`, rows hold
    /// the raw weighted likelihoods: they may underflow to zero, and scores
    /// above the largest finite value (many near-constant features) are
    /// clamped to `F::max_value()`. Use
    /// [`predict_joint_log_proba`](Self::predict_joint_log_proba) for exact
    /// magnitudes.
    pub fn predict_proba<D>(&self, X: &ArrayBase<D, Ix2>, normalize: bool) -> Result<Array2<F>>
    where
        D: Data<Elem = F>,
    {
        let mut scores = self.predict_joint_log_proba(X)?;
        if !normalize {
            let max_score = F::max_value();
            scores.mapv_inplace(|v| v.exp().min(max_score));
            return Ok(scores);
        }
        for mut row in scores.rows_mut() {
            softmax_inplace(&mut row);
        }
        Ok(scores)
    }

    /// Returns the logarithm of the normalized class probabilities.
    pub fn predict_log_proba<D>(&self, X: &ArrayBase<D, Ix2>) -> Result<Array2<F>>
    where
        D: Data<Elem = F>,
    {
        let mut scores = self.predict_joint_log_proba(X)?;
        for mut row in scores.rows_mut() {
            log_softmax_inplace(&mut row);
        }
        Ok(scores)
    }

    /// Predicts the label of every sample. The class with the highest score
    /// wins, ties going to the class that comes first in sorted order.
    pub fn predict<D>(&self, X: &ArrayBase<D, Ix2>) -> Result<Array1<L>>
    where
        D: Data<Elem = F>,
    {
        let jll = self.predict_joint_log_proba(X)?;
        let classes = &self.fitted()?.classes;
        Ok(jll
            .rows()
            .into_iter()
            .map(|row| classes[argmax_first(&row).unwrap_or(0)].clone())
            .collect())
    }

    /// Mean accuracy of the predictions on `X` against the true labels `y`.
    pub fn score<D, S>(&self, X: &ArrayBase<D, Ix2>, y: &ArrayBase<S, Ix1>) -> Result<F>
    where
        D: Data<Elem = F>,
        S: Data<Elem = L>,
    {
        if y.len() != X.nrows() {
            return Err(NaiveBayesError::LengthMismatch {
                samples: X.nrows(),
                targets: y.len(),
            });
        }
        let y_pred = self.predict(X)?;
        accuracy(y.view(), y_pred.view())
    }

    /// The sorted, distinct labels seen during training.
    pub fn classes(&self) -> Result<ArrayView1<'_, L>> {
        Ok(self.fitted()?.classes.view())
    }

    /// Number of training samples of each class.
    pub fn prior_counts(&self) -> Result<ArrayView1<'_, usize>> {
        Ok(self.fitted()?.prior_counts.view())
    }

    /// Per-class feature means, `n_classes x n_features`.
    pub fn means(&self) -> Result<ArrayView2<'_, F>> {
        Ok(self.fitted()?.means.view())
    }

    /// Per-class population variances before smoothing,
    /// `n_classes x n_features`.
    pub fn variances(&self) -> Result<ArrayView2<'_, F>> {
        Ok(self.fitted()?.variances.view())
    }

    /// The variance floor added to every per-class variance when scoring.
    pub fn epsilon(&self) -> Result<F> {
        Ok(self.fitted()?.epsilon)
    }

    pub fn n_features(&self) -> Result<usize> {
        Ok(self.fitted()?.means.ncols())
    }

    pub fn n_classes(&self) -> Result<usize> {
        Ok(self.fitted()?.classes.len())
    }

    fn fitted(&self) -> Result<&FittedState<F, L>> {
        self.state.as_ref().ok_or(NaiveBayesError::NotFitted)
    }
}

/// `sum_j (x_j - mean_j)^2 / var_j`
fn scaled_distance<F: Float>(x: ArrayView1<F>, mean: ArrayView1<F>, var: ArrayView1<F>) -> F {
    x.iter()
        .zip(mean.iter())
        .zip(var.iter())
        .map(|((&xj, &mu), &v)| (xj - mu).powi(2) / v)
        .sum()
}

/// Every mean and smoothed variance must be finite, otherwise the scores
/// turn into NaN.
fn check_statistics<F: Float>(means: &Array2<F>, variances: &Array2<F>, epsilon: F) -> Result<()> {
    let means_finite = means.iter().all(|v| v.is_finite());
    let variances_finite = variances.iter().all(|&v| (v + epsilon).is_finite());
    if means_finite && variances_finite {
        Ok(())
    } else {
        Err(NaiveBayesError::NonFiniteStatistics)
    }
}

fn check_finite<F: Float>(X: ArrayView2<F>) -> Result<()> {
    if X.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(NaiveBayesError::NonFiniteInput)
    }
}

/// This implements the fitting of a [`GaussianNaiveBayes`] classifier on a
/// dense dataset.
impl<F, L, D, S> Fit<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>, NaiveBayesError>
    for GaussianNbValidParams<F>
where
    F: Float,
    L: Ord + Clone,
    D: Data<Elem = F>,
    S: Data<Elem = L>,
{
    /// If successful, the output is a fitted [`GaussianNaiveBayes`].
    type Object = GaussianNaiveBayes<F, L>;

    fn fit(
        &self,
        dataset: &DatasetBase<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>>,
    ) -> Result<Self::Object> {
        dataset.check_consistency()?;
        let mut model = GaussianNaiveBayes::with_params(self.clone());
        model.fit(dataset.design_matrix(), dataset.targets())?;
        Ok(model)
    }
}
