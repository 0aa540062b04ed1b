use std::{error::Error, fmt, io};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use classifier::{ClassifierErr, ConfigErr};
use serde::Serialize;

/// Fatal failures while bringing the server up or running it.
#[derive(Debug)]
pub enum ServerErr {
    Config(ConfigErr),
    Model(ClassifierErr),
    Io(io::Error),
}

impl fmt::Display for ServerErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerErr::Config(e) => write!(f, "config error: {e}"),
            ServerErr::Model(e) => write!(f, "model unavailable: {e}"),
            ServerErr::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl Error for ServerErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ServerErr::Config(e) => Some(e),
            ServerErr::Model(e) => Some(e),
            ServerErr::Io(e) => Some(e),
        }
    }
}

impl From<ConfigErr> for ServerErr {
    fn from(value: ConfigErr) -> Self {
        Self::Config(value)
    }
}

impl From<ClassifierErr> for ServerErr {
    fn from(value: ClassifierErr) -> Self {
        Self::Model(value)
    }
}

impl From<io::Error> for ServerErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Boundary conversion for the binary.
impl From<ServerErr> for io::Error {
    fn from(value: ServerErr) -> Self {
        match value {
            ServerErr::Io(e) => e,
            other => io::Error::other(other),
        }
    }
}

/// Why a single prediction request could not be answered.
#[derive(Debug)]
pub enum PredictErr {
    /// The body is not a JSON list of numbers.
    MalformedBody(String),
    /// The model refused the feature vector.
    Rejected(ClassifierErr),
}

impl fmt::Display for PredictErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictErr::MalformedBody(msg) => write!(f, "malformed body: {msg}"),
            PredictErr::Rejected(e) => write!(f, "{e}"),
        }
    }
}

impl Error for PredictErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PredictErr::Rejected(e) => Some(e),
            PredictErr::MalformedBody(_) => None,
        }
    }
}

impl From<ClassifierErr> for PredictErr {
    fn from(value: ClassifierErr) -> Self {
        Self::Rejected(value)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// A `PredictErr` paired with the status it is answered with.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub err: PredictErr,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.err.to_string(),
        };

        (self.status, Json(body)).into_response()
    }
}
