use super::traits::Fit;
use crate::datasets::{DatasetBase, DesignMatrix, Targets};
use std::error::Error;

/// Hyperparameters that still have to be validated, such as a
/// [`GaussianNbParams`](crate::GaussianNbParams) whose `var_smoothing` may be
/// zero, negative or NaN. Validation yields the `Checked` counterpart
/// ([`GaussianNbValidParams`](crate::GaussianNbValidParams)), the only type a
/// classifier can be built from.
///
/// `check_ref()` and `check()` run the same validation.
pub trait ParamGuard {
    /// The checked hyperparameters
    type Checked;
    /// Error type resulting from failed hyperparameter checking
    type Error: Error;

    /// Validates in place and borrows the checked hyperparameters
    fn check_ref(&self) -> Result<&Self::Checked, Self::Error>;

    /// Validates and converts into the checked hyperparameters
    fn check(self) -> Result<Self::Checked, Self::Error>;

    /// Calls `check()` and panics on invalid hyperparameters. Meant for
    /// literals known to be valid.
    fn check_unwrap(self) -> Self::Checked
    where
        Self: Sized,
    {
        self.check().unwrap()
    }
}

/// Lets `GaussianNbParams::new().var_smoothing(..).fit(&dataset)` be called
/// without an explicit `check()`: the hyperparameters are validated first and
/// a validation failure is returned as the fitting error.
impl<DM: DesignMatrix, T: Targets, E, P: ParamGuard> Fit<DM, T, E> for P
where
    P::Checked: Fit<DM, T, E>,
    E: Error + From<P::Error>,
{
    type Object = <<P as ParamGuard>::Checked as Fit<DM, T, E>>::Object;

    fn fit(&self, dataset: &DatasetBase<DM, T>) -> Result<Self::Object, E> {
        let checked = self.check_ref()?;
        checked.fit(dataset)
    }
}
