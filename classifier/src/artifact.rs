use std::{fs, path::Path};

use log::{debug, info};

use crate::{ClassifierErr, IrisModel, Result, model::Fitted};

/// Writes `model` to `path`, replacing whatever was there.
///
/// Missing parent directories are created. The encoding is opaque: only
/// `load` is expected to read it back.
///
/// # Arguments
/// * `model` - The fitted model.
/// * `path` - Where to write the artifact.
pub fn save(model: &IrisModel, path: &Path) -> Result<()> {
    let bytes = bincode::serialize(model.inner()).map_err(ClassifierErr::Encode)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, &bytes)?;
    info!(bytes = bytes.len(); "saved model artifact to {}", path.display());
    Ok(())
}

/// Reads a model previously written by `save`.
///
/// # Arguments
/// * `path` - The artifact's location.
///
/// # Returns
/// The model, or an error if the file is missing, truncated or not an artifact.
pub fn load(path: &Path) -> Result<IrisModel> {
    let bytes = fs::read(path)?;
    debug!(bytes = bytes.len(); "read model artifact from {}", path.display());

    let fitted: Fitted = bincode::deserialize(&bytes).map_err(ClassifierErr::Decode)?;
    let model = IrisModel::new(fitted);

    ensure_non_empty(model.n_features(), model.n_classes())?;
    Ok(model)
}

fn ensure_non_empty(features: usize, classes: usize) -> Result<()> {
    if features == 0 || classes == 0 {
        return Err(ClassifierErr::EmptyArtifact);
    }

    Ok(())
}
