use std::path::Path;

use log::info;

use crate::{IrisModel, Result, artifact};

/// The prediction service: owns a loaded model for the lifetime of a process.
///
/// It is built once, before any request is served, and handed to whoever needs
/// it. Prediction only reads the fitted parameters.
pub struct Predictor {
    model: IrisModel,
}

impl Predictor {
    /// Creates a new `Predictor` around an already fitted model.
    pub fn new(model: IrisModel) -> Self {
        Self { model }
    }

    /// Loads the artifact at `path` and builds a `Predictor` from it.
    ///
    /// # Arguments
    /// * `path` - The artifact written by the training procedure.
    ///
    /// # Returns
    /// The service, or an error if the artifact is missing or unreadable.
    pub fn from_artifact(path: &Path) -> Result<Self> {
        let model = artifact::load(path)?;
        info!(
            "loaded model from {}: {} features, {} classes",
            path.display(),
            model.n_features(),
            model.n_classes()
        );

        Ok(Self::new(model))
    }

    /// Returns the amount of features a request must carry.
    pub fn n_features(&self) -> usize {
        self.model.n_features()
    }

    /// Classifies a single feature vector.
    pub fn predict(&self, features: &[f64]) -> Result<usize> {
        self.model.predict_one(features)
    }
}
