use axum::{Json, body::Bytes, extract::State};
use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::{
    AppState,
    error::{ApiError, PredictErr},
};

pub const WELCOME: &str = "Welcome to the Iris Classifier API!";

#[derive(Serialize)]
pub struct Welcome {
    message: &'static str,
}

#[derive(Serialize)]
pub struct Prediction {
    prediction: usize,
}

pub async fn home() -> Json<Welcome> {
    Json(Welcome { message: WELCOME })
}

pub async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Prediction>, ApiError> {
    let features = parse_features(&body).map_err(|e| state.reject(e))?;
    let label = state
        .predictor()
        .predict(&features)
        .map_err(|e| state.reject(e.into()))?;

    debug!("predicted class {label} for {features:?}");
    Ok(Json(Prediction { prediction: label }))
}

/// Reads a feature vector out of a request body.
///
/// Accepts a bare list (`[5.1, 3.5, 1.4, 0.2]`) or an object carrying it under
/// `features`.
fn parse_features(body: &[u8]) -> Result<Vec<f64>, PredictErr> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| PredictErr::MalformedBody(e.to_string()))?;

    let list = match value {
        Value::Object(mut obj) => obj.remove("features").ok_or_else(|| {
            PredictErr::MalformedBody("expected a list of numbers or a `features` list".into())
        })?,
        other => other,
    };

    serde_json::from_value(list).map_err(|e| PredictErr::MalformedBody(e.to_string()))
}
