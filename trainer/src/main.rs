use std::io;

use classifier::{TrainConfig, training};
use log::info;

fn main() -> io::Result<()> {
    env_logger::init();

    let config = TrainConfig::from_env().map_err(classifier::ClassifierErr::from)?;
    info!(
        "training with seed={} test_ratio={} max_iterations={}",
        config.seed, config.test_ratio, config.max_iterations
    );

    let report = training::run(&config)?;
    info!(
        accuracy = report.accuracy,
        train = report.train_len,
        test = report.test_len;
        "training finished"
    );

    println!("Model trained and saved as {}", report.model_path.display());
    Ok(())
}
