use std::{
    num::NonZeroU64,
    path::{Path, PathBuf},
};

use linfa::traits::Fit;
use linfa_logistic::MultiLogisticRegression;
use log::info;

use crate::{
    IrisModel, Result, TrainConfig, artifact,
    dataset::{self, Samples},
};

/// Summary of a finished training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    pub train_len: usize,
    pub test_len: usize,
    pub accuracy: f64,
    pub model_path: PathBuf,
}

/// Fits a multinomial logistic regression on `train`.
///
/// # Arguments
/// * `train` - The training partition.
/// * `max_iterations` - Upper bound on solver iterations.
///
/// # Returns
/// The fitted model or the solver's error.
pub fn fit(train: &Samples, max_iterations: NonZeroU64) -> Result<IrisModel> {
    let fitted = MultiLogisticRegression::default()
        .max_iterations(max_iterations.get())
        .fit(train)?;

    Ok(IrisModel::new(fitted))
}

/// Returns the share of rows in `dataset` that `model` labels correctly.
pub fn accuracy(model: &IrisModel, dataset: &Samples) -> Result<f64> {
    let predicted = model.predict_batch(dataset.records().view())?;
    let targets = dataset.targets();

    if targets.is_empty() {
        return Ok(0.0);
    }

    let hits = predicted
        .iter()
        .zip(targets.iter())
        .filter(|(p, t)| p == t)
        .count();

    Ok(hits as f64 / targets.len() as f64)
}

/// Runs the whole training pipeline: load, split, fit, evaluate and save.
///
/// # Arguments
/// * `config` - The run's parameters.
///
/// # Returns
/// A report of the run or the first error met; nothing is written on failure.
pub fn run(config: &TrainConfig) -> Result<TrainReport> {
    let iris = dataset::load_iris();
    info!("loaded iris dataset: {} samples", iris.records().nrows());

    let split = dataset::split(&iris, config.test_ratio, config.seed)?;
    let train_len = split.train.records().nrows();
    let test_len = split.test.records().nrows();
    info!(
        "split with seed {}: train={train_len} test={test_len}",
        config.seed
    );

    let model = fit(&split.train, config.max_iterations)?;
    info!(
        "fitted model: {} features, {} classes",
        model.n_features(),
        model.n_classes()
    );

    let accuracy = accuracy(&model, &split.test)?;
    info!("test accuracy: {accuracy:.4}");

    artifact::save(&model, &config.model_path)?;

    Ok(TrainReport {
        train_len,
        test_len,
        accuracy,
        model_path: config.model_path.clone(),
    })
}

/// Fits a model with the default configuration and writes it to `path`.
pub fn train_to(path: &Path) -> Result<TrainReport> {
    let config = TrainConfig {
        model_path: path.to_path_buf(),
        ..TrainConfig::default()
    };

    run(&config)
}
