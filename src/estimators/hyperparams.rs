use super::error::{NaiveBayesError, Result};
use super::param_guard::ParamGuard;
use crate::Float;

/// A verified hyperparameter set ready for the fitting of a Gaussian naive
/// Bayes classifier
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianNbValidParams<F> {
    var_smoothing: F,
}

impl<F: Float> GaussianNbValidParams<F> {
    pub fn var_smoothing(&self) -> F {
        self.var_smoothing
    }
}

impl<F: Float> Default for GaussianNbValidParams<F> {
    fn default() -> Self {
        Self {
            var_smoothing: F::cast(1e-9),
        }
    }
}

/// A hyper-parameter set during construction
///
/// The only hyperparameter is the variance floor. At fit time every per-class
/// variance is smoothed with
/// ```ignore
/// epsilon = var_smoothing * max_j Var(X[:, j])
/// ```
/// falling back to `var_smoothing` itself when every feature is constant.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianNbParams<F>(GaussianNbValidParams<F>);

impl<F: Float> Default for GaussianNbParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit a Gaussian naive Bayes model
impl<F: Float> GaussianNbParams<F> {
    /// Create default Gaussian naive Bayes hyper parameters
    pub fn new() -> GaussianNbParams<F> {
        Self(GaussianNbValidParams::default())
    }

    /// Set the portion of the largest feature variance added to every
    /// per-class variance. Keeps scores finite on features that are constant
    /// within a class.
    /// Defaults to `1e-9` if not set.
    pub fn var_smoothing(mut self, var_smoothing: F) -> Self {
        self.0.var_smoothing = var_smoothing;
        self
    }
}

impl<F: Float> ParamGuard for GaussianNbParams<F> {
    type Checked = GaussianNbValidParams<F>;
    type Error = NaiveBayesError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        let var_smoothing = self.0.var_smoothing;
        if !var_smoothing.is_finite() || var_smoothing <= F::zero() {
            Err(NaiveBayesError::InvalidVarSmoothing(
                var_smoothing.to_f32().unwrap_or(f32::NAN),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
