use super::{DatasetBase, DesignMatrix, Targets};
use crate::estimators::error::{NaiveBayesError, Result};
use ndarray::{ArrayBase, Data, Ix1, Ix2};

/// This implementation block provides a method for the creation of datasets
/// from dense matrices and label arrays.
impl<F, L, D, S> From<(ArrayBase<D, Ix2>, ArrayBase<S, Ix1>)>
    for DatasetBase<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>>
where
    D: Data<Elem = F>,
    S: Data<Elem = L>,
{
    fn from(data: (ArrayBase<D, Ix2>, ArrayBase<S, Ix1>)) -> Self {
        DatasetBase {
            design_matrix: data.0,
            targets: data.1,
        }
    }
}

/// This implementation block provides methods to get record and target objects
/// from the dataset.
impl<DM: DesignMatrix, T: Targets> DatasetBase<DM, T> {
    /// This method instantiates a new dataset from a design matrix and targets.
    pub fn new(design_matrix: DM, targets: T) -> DatasetBase<DM, T> {
        DatasetBase {
            design_matrix,
            targets,
        }
    }

    /// This method is a getter for the targets.
    pub fn targets(&self) -> &T {
        &self.targets
    }

    /// This method is a getter for the design matrix.
    pub fn design_matrix(&self) -> &DM {
        &self.design_matrix
    }

    /// Number of observations, taken from the design matrix.
    pub fn n_samples(&self) -> usize {
        self.design_matrix.n_samples()
    }

    /// Number of features per observation.
    pub fn n_features(&self) -> usize {
        self.design_matrix.n_features()
    }

    /// Checks that there is exactly one label per row of the design matrix.
    pub fn check_consistency(&self) -> Result<()> {
        let samples = self.design_matrix.n_samples();
        let targets = self.targets.n_samples();
        if samples != targets {
            return Err(NaiveBayesError::LengthMismatch { samples, targets });
        }
        Ok(())
    }
}
