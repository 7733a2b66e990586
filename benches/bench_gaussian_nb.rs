use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gaussnb::datasets::DenseDataset;
use gaussnb::helpers::test_helpers::generate_gaussian_blobs;
use gaussnb::{Fit, GaussianNaiveBayes, GaussianNbParams};
use ndarray::Array2;

fn centers(n_classes: usize, n_features: usize) -> Array2<f64> {
    Array2::from_shape_fn((n_classes, n_features), |(k, j)| {
        (3 * k + j % (k + 1)) as f64
    })
}

fn bench_gaussian_nb(c: &mut Criterion) {
    let mut group = c.benchmark_group("gaussian_nb");
    group.sample_size(10);

    for n_per_class in [100, 1000] {
        for n_features in [2, 50] {
            for n_classes in [2, 10] {
                let (x, y) =
                    generate_gaussian_blobs(centers(n_classes, n_features).view(), 1., n_per_class, 0);
                let dataset = DenseDataset::from((x.clone(), y));
                let params = GaussianNbParams::new();
                let config = (n_per_class, n_features, n_classes);
                let config_string = format!("{}, {}, {}", n_per_class, n_features, n_classes);

                group.bench_with_input(
                    BenchmarkId::new("fit", &config_string),
                    &config,
                    |b, _| b.iter(|| params.fit(&dataset).unwrap()),
                );

                let model: GaussianNaiveBayes<f64, usize> = params.fit(&dataset).unwrap();
                group.bench_with_input(
                    BenchmarkId::new("predict_proba", &config_string),
                    &config,
                    |b, _| b.iter(|| model.predict_proba(&x, true).unwrap()),
                );
            }
        }
    }

    group.finish();
}

criterion_group!(benches, bench_gaussian_nb);
criterion_main!(benches);
