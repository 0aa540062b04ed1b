use std::{env, fmt, path::PathBuf, str::FromStr};

use axum::http::StatusCode;
use classifier::{
    ConfigErr, DEFAULT_MODEL_PATH,
    config::var_or,
};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

/// The status a rejected prediction is answered with.
///
/// `Client` is the default. `Ok` keeps the legacy contract of this API:
/// errors are answered with 200 and recognized only by the `error` key in the
/// body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorStatus {
    /// `422 Unprocessable Entity`.
    #[default]
    Client,
    /// `200 OK`, with the error carried only in the body.
    Ok,
}

impl ErrorStatus {
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorStatus::Client => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorStatus::Ok => StatusCode::OK,
        }
    }
}

impl FromStr for ErrorStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "client" => Ok(Self::Client),
            "ok" => Ok(Self::Ok),
            other => Err(format!("unknown error status: {other}")),
        }
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorStatus::Client => write!(f, "client"),
            ErrorStatus::Ok => write!(f, "ok"),
        }
    }
}

/// Immutable startup parameters of the prediction server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServeConfig {
    pub model_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub error_status: ErrorStatus,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            error_status: ErrorStatus::default(),
        }
    }
}

impl ServeConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigErr> {
        Self::from_vars(|var| env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// * `lookup` - Resolves `MODEL_PATH`, `HOST`, `PORT` and `ERROR_STATUS`.
    ///
    /// # Returns
    /// The configuration, with defaults for every unset variable.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigErr>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            model_path: var_or(&lookup, "MODEL_PATH", defaults.model_path)?,
            host: var_or(&lookup, "HOST", defaults.host)?,
            port: var_or(&lookup, "PORT", defaults.port)?,
            error_status: var_or(&lookup, "ERROR_STATUS", defaults.error_status)?,
        })
    }

    /// Returns the `host:port` pair to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
