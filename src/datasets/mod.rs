use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

mod impl_datasets;
mod impl_design_matrix;
mod impl_targets;


/// A labeled dataset: a design matrix whose rows are observations, paired
/// with one class label per row.
pub struct DatasetBase<DM, T>
where
    DM: DesignMatrix,
    T: Targets,
{
    pub design_matrix: DM,
    pub targets: T,
}

pub type DenseDataset<F, L> = DatasetBase<Array2<F>, Array1<L>>;
pub type DenseDatasetView<'a, F, L> = DatasetBase<ArrayView2<'a, F>, ArrayView1<'a, L>>;

/// A dense matrix of observations, one row per sample and one column per
/// feature.
pub trait DesignMatrix: Sized {
    type Elem;

    fn n_samples(&self) -> usize;
    fn n_features(&self) -> usize;
    fn as_records(&self) -> ArrayView2<'_, Self::Elem>;
}

/// A one-dimensional sequence of class labels.
pub trait Targets: Sized {
    type Elem;

    fn n_samples(&self) -> usize;
    fn as_labels(&self) -> ArrayView1<'_, Self::Elem>;
}
