extern crate gaussnb;

use gaussnb::helpers::test_helpers::generate_gaussian_blobs;
use gaussnb::GaussianNaiveBayes;
use ndarray::{array, s, Axis};

fn main() -> gaussnb::Result<()> {
    // Two synthetic problems: well separated clusters, then overlapping ones.
    let problems = [
        ("separated", array![[-2., -2.], [2., 2.]], 1.),
        ("overlapping", array![[-1., 0.], [1., 0.]], 1.5),
    ];
    let (n_per_class, train_size) = (1000, 150);

    for (name, centers, std) in problems.iter() {
        let (x, y) = generate_gaussian_blobs(centers.view(), *std, n_per_class, 0);

        // Interleave classes so that the training prefix sees both of them.
        let order: Vec<usize> = (0..n_per_class)
            .flat_map(|i| [i, n_per_class + i])
            .collect();
        let x = x.select(Axis(0), &order);
        let y = y.select(Axis(0), &order);

        let mut model = GaussianNaiveBayes::new();
        model.fit(&x.slice(s![..train_size, ..]), &y.slice(s![..train_size]))?;

        let accuracy: f64 = model.score(&x.slice(s![train_size.., ..]), &y.slice(s![train_size..]))?;
        println!("{}", name);
        println!("Accuracy = {:.6}", accuracy);
        println!("Class counts = {}", model.prior_counts()?);
        println!("Means =\n{}", model.means()?);
    }

    Ok(())
}
