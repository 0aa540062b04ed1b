use linfa::Dataset;
use ndarray::{Axis, Ix1};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::{ClassifierErr, Result};

/// Labelled samples: one feature row per sample, one class label per row.
pub type Samples = Dataset<f64, usize, Ix1>;

/// The two disjoint partitions a dataset is split into.
pub struct Split {
    pub train: Samples,
    pub test: Samples,
}

/// Loads the Iris reference dataset: 150 samples, 4 features, 3 classes.
pub fn load_iris() -> Samples {
    linfa_datasets::iris()
}

/// Splits a dataset into a training and a test partition.
///
/// The samples are permuted with a generator seeded by `seed`, so the same
/// seed always yields the same partitions.
///
/// # Arguments
/// * `dataset` - The full dataset.
/// * `test_ratio` - The share of samples that goes to the test partition.
/// * `seed` - The seed for the permutation.
///
/// # Returns
/// The partitions or `ClassifierErr::InvalidSplit` if either would be empty.
pub fn split(dataset: &Samples, test_ratio: f32, seed: u64) -> Result<Split> {
    let samples = dataset.records().nrows();
    let invalid = || ClassifierErr::InvalidSplit {
        ratio: test_ratio,
        samples,
    };

    if !(test_ratio > 0.0 && test_ratio < 1.0) {
        return Err(invalid());
    }

    let train_len = (samples as f32 * (1.0 - test_ratio)).round() as usize;
    if train_len == 0 || train_len == samples {
        return Err(invalid());
    }

    let mut indices: Vec<usize> = (0..samples).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let (train, test) = indices.split_at(train_len);
    Ok(Split {
        train: select(dataset, train),
        test: select(dataset, test),
    })
}

fn select(dataset: &Samples, indices: &[usize]) -> Samples {
    let records = dataset.records().select(Axis(0), indices);
    let targets = dataset.targets().select(Axis(0), indices);
    Dataset::new(records, targets)
}
