use super::Targets;
use ndarray::{ArrayBase, ArrayView1, Axis, Data, Ix1};

impl<L, S: Data<Elem = L>> Targets for ArrayBase<S, Ix1> {
    type Elem = L;

    fn n_samples(&self) -> usize {
        self.len_of(Axis(0))
    }

    fn as_labels(&self) -> ArrayView1<'_, L> {
        self.view()
    }
}

impl<T: Targets> Targets for &T {
    type Elem = T::Elem;

    fn n_samples(&self) -> usize {
        (*self).n_samples()
    }

    fn as_labels(&self) -> ArrayView1<'_, Self::Elem> {
        (*self).as_labels()
    }
}
