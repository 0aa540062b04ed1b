pub mod artifact;
pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
mod predictor;
pub mod training;

pub use config::{ConfigErr, DEFAULT_MODEL_PATH, TrainConfig};
pub use error::{ClassifierErr, Result};
pub use model::IrisModel;
pub use predictor::Predictor;
