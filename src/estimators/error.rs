use thiserror::Error;

/// Simplified `Result` using [`NaiveBayesError`](crate::NaiveBayesError) as error type
pub type Result<T> = std::result::Result<T, NaiveBayesError>;

/// Error variants from hyperparameter validation, model estimation and
/// prediction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NaiveBayesError {
    /// A prediction was requested before any successful call to `fit`
    #[error("the model has not been fitted, call `fit` first")]
    NotFitted,
    /// The design matrix and the targets disagree on the number of samples
    #[error("found {samples} samples in the design matrix but {targets} targets")]
    LengthMismatch { samples: usize, targets: usize },
    /// The input has a different number of features than the training data
    #[error("X must have {expected} features, found {found}")]
    FeatureMismatch { expected: usize, found: usize },
    /// The input has no samples or no features
    #[error("the design matrix must have at least one sample and one feature")]
    EmptyDataset,
    #[error("the design matrix contains NaN or infinite values")]
    NonFiniteInput,
    /// The training values are too large for their means or variances to be
    /// represented
    #[error("the per-class means or variances overflow, rescale the features")]
    NonFiniteStatistics,
    #[error("invalid var_smoothing {0}, expected a finite positive value")]
    InvalidVarSmoothing(f32),
}

impl NaiveBayesError {
    /// Returns `true` for the errors caused by malformed inputs or
    /// hyperparameters, as opposed to calling the model in the wrong state.
    pub fn is_validation(&self) -> bool {
        !matches!(self, NaiveBayesError::NotFitted)
    }
}
