#[cfg(test)]
mod tests;

/// This module implements the small numeric routines the classifier is built
/// on: per-column moments, first-occurrence argmax and max-shifted softmax.
pub mod stats {
    use crate::Float;
    use ndarray::{Array1, ArrayBase, ArrayView2, Axis, Data, DataMut, Ix1};

    /// This function computes the arithmetic mean and the population
    /// variance (sum of squared deviations divided by the count) of every
    /// column of `X`. `X` must have at least one row.
    pub fn column_moments<F: Float>(X: ArrayView2<F>) -> (Array1<F>, Array1<F>) {
        let n_samples = F::cast(X.nrows());
        let mean = X.sum_axis(Axis(0)) / n_samples;
        let centered = &X - &mean;
        let variance = centered.mapv(|v| v * v).sum_axis(Axis(0)) / n_samples;
        (mean, variance)
    }

    /// Index of the largest value, ties going to the lowest index. NaN
    /// entries are skipped. Returns `None` when no entry is comparable.
    pub fn argmax_first<F, S>(arr: &ArrayBase<S, Ix1>) -> Option<usize>
    where
        F: Float,
        S: Data<Elem = F>,
    {
        let mut best: Option<(usize, F)> = None;
        for (idx, &value) in arr.iter().enumerate() {
            if value.is_nan() {
                continue;
            }
            match best {
                Some((_, max_val)) if value <= max_val => {}
                _ => best = Some((idx, value)),
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Rescales `arr` in place to `exp(v - max) / sum(exp(v - max))`. The
    /// largest entry becomes `exp(0)`, so equal entries stay exactly equal
    /// whatever their magnitude. A row with no entry above `-inf` becomes
    /// uniform.
    pub fn softmax_inplace<F, S>(arr: &mut ArrayBase<S, Ix1>)
    where
        F: Float,
        S: DataMut<Elem = F>,
    {
        let max_val = arr.fold(F::neg_infinity(), |acc, &v| acc.max(v));
        if max_val == F::neg_infinity() {
            let uniform = F::one() / F::cast(arr.len());
            arr.fill(uniform);
            return;
        }
        arr.mapv_inplace(|v| (v - max_val).exp());
        let sum = arr.sum();
        arr.mapv_inplace(|v| v / sum);
    }

    /// Log counterpart of [`softmax_inplace`]: `(v - max) - ln(sum(exp(v - max)))`.
    pub fn log_softmax_inplace<F, S>(arr: &mut ArrayBase<S, Ix1>)
    where
        F: Float,
        S: DataMut<Elem = F>,
    {
        let max_val = arr.fold(F::neg_infinity(), |acc, &v| acc.max(v));
        if max_val == F::neg_infinity() {
            let log_uniform = -F::cast(arr.len()).ln();
            arr.fill(log_uniform);
            return;
        }
        arr.mapv_inplace(|v| v - max_val);
        let log_sum = arr.iter().map(|&v| v.exp()).sum::<F>().ln();
        arr.mapv_inplace(|v| v - log_sum);
    }
}

/// This module contains helpers functions to efficiently write tests.
pub mod test_helpers {
    use crate::Float;
    use approx::AbsDiffEq;
    use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    pub fn assert_array_all_close<F>(x: ArrayView1<F>, y: ArrayView1<F>, delta: F)
    where
        F: Float + AbsDiffEq<Epsilon = F>,
    {
        assert_eq!(x.len(), y.len());
        for i in 0..x.len() {
            if x[i].abs_diff_ne(&y[i], delta) {
                panic!("x: {}, y: {} ; with precision level {}", x[i], y[i], delta);
            }
        }
    }

    pub fn assert_array2d_all_close<F>(x: ArrayView2<F>, y: ArrayView2<F>, delta: F)
    where
        F: Float + AbsDiffEq<Epsilon = F>,
    {
        assert_eq!(x.shape()[0], y.shape()[0]);
        assert_eq!(x.shape()[1], y.shape()[1]);
        for i in 0..x.shape()[0] {
            for j in 0..x.shape()[1] {
                if x[[i, j]].abs_diff_ne(&y[[i, j]], delta) {
                    panic!(
                        "x: {}, y: {} ; with precision level {}",
                        x[[i, j]],
                        y[[i, j]],
                        delta
                    );
                }
            }
        }
    }

    /// Draws `n_per_class` points around each row of `centers` with an
    /// isotropic normal noise of standard deviation `std`. The label of a
    /// point is the index of its center. Samples are laid out class after
    /// class.
    pub fn generate_gaussian_blobs(
        centers: ArrayView2<f64>,
        std: f64,
        n_per_class: usize,
        seed: u64,
    ) -> (Array2<f64>, Array1<usize>) {
        let mut r = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0., std).unwrap();

        let (n_classes, n_features) = centers.dim();
        let n_samples = n_classes * n_per_class;
        let mut X = Array2::<f64>::zeros((n_samples, n_features));
        let mut y = Array1::<usize>::zeros(n_samples);
        for (k, center) in centers.rows().into_iter().enumerate() {
            for s in 0..n_per_class {
                let i = k * n_per_class + s;
                y[i] = k;
                for j in 0..n_features {
                    X[[i, j]] = center[j] + normal.sample(&mut r);
                }
            }
        }
        (X, y)
    }
}
