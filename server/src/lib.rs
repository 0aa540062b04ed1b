pub mod config;
pub mod error;
mod routes;

use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use classifier::Predictor;
use log::{info, warn};
use tokio::{net::TcpListener, signal};

pub use config::{ErrorStatus, ServeConfig};
pub use error::{ApiError, PredictErr, ServerErr};
pub use routes::WELCOME;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    predictor: Arc<Predictor>,
    error_status: StatusCode,
}

impl AppState {
    /// Creates a new `AppState`.
    ///
    /// # Arguments
    /// * `predictor` - The loaded prediction service.
    /// * `error_status` - The status rejected predictions are answered with.
    pub fn new(predictor: Predictor, error_status: ErrorStatus) -> Self {
        Self {
            predictor: Arc::new(predictor),
            error_status: error_status.status_code(),
        }
    }

    pub fn predictor(&self) -> &Predictor {
        &self.predictor
    }

    fn reject(&self, err: PredictErr) -> ApiError {
        warn!("rejected prediction request: {err}");
        ApiError {
            status: self.error_status,
            err,
        }
    }
}

/// Builds the router serving `/` and `/predict/`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/predict/", post(routes::predict))
        .with_state(state)
}

/// Loads the model, binds the listener and serves until Ctrl-C.
///
/// # Arguments
/// * `config` - The server's startup parameters.
///
/// # Returns
/// An error if the artifact cannot be loaded or the address cannot be bound;
/// nothing is served in that case.
pub async fn serve(config: ServeConfig) -> Result<(), ServerErr> {
    let predictor = Predictor::from_artifact(&config.model_path)?;
    let state = AppState::new(predictor, config.error_status);

    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        "listening at {addr}, rejected predictions answer {}",
        config.error_status
    );

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown())
        .await?;

    info!("wrapping up, model unloaded");
    Ok(())
}

async fn shutdown() {
    match signal::ctrl_c().await {
        Ok(()) => info!("received ctrl-c"),
        Err(e) => {
            warn!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    }
}
