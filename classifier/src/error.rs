use std::{error::Error, fmt, io};

use crate::config::ConfigErr;

/// The result type used in the entire classifier crate.
pub type Result<T> = std::result::Result<T, ClassifierErr>;

/// The classifier crate's error type.
#[derive(Debug)]
pub enum ClassifierErr {
    Io(io::Error),
    Config(ConfigErr),
    Encode(bincode::Error),
    Decode(bincode::Error),
    Fit(linfa_logistic::error::Error),
    EmptyArtifact,
    InvalidSplit {
        ratio: f32,
        samples: usize,
    },
    FeatureCount {
        got: usize,
        expected: usize,
    },
}

impl fmt::Display for ClassifierErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifierErr::Io(e) => write!(f, "io error: {e}"),
            ClassifierErr::Config(e) => write!(f, "config error: {e}"),
            ClassifierErr::Encode(e) => write!(f, "failed to encode model: {e}"),
            ClassifierErr::Decode(e) => write!(f, "failed to decode model: {e}"),
            ClassifierErr::Fit(e) => write!(f, "failed to fit model: {e}"),
            ClassifierErr::EmptyArtifact => {
                write!(f, "artifact holds an empty parameter matrix")
            }
            ClassifierErr::InvalidSplit { ratio, samples } => write!(
                f,
                "test ratio {ratio} leaves an empty partition out of {samples} samples"
            ),
            ClassifierErr::FeatureCount { got, expected } => {
                write!(f, "got {got} features, but the model expects {expected}")
            }
        }
    }
}

impl Error for ClassifierErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClassifierErr::Io(e) => Some(e),
            ClassifierErr::Config(e) => Some(e),
            ClassifierErr::Encode(e) | ClassifierErr::Decode(e) => Some(e),
            ClassifierErr::Fit(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ClassifierErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ConfigErr> for ClassifierErr {
    fn from(value: ConfigErr) -> Self {
        Self::Config(value)
    }
}

impl From<linfa_logistic::error::Error> for ClassifierErr {
    fn from(value: linfa_logistic::error::Error) -> Self {
        Self::Fit(value)
    }
}

/// Boundary conversion for binaries.
impl From<ClassifierErr> for io::Error {
    fn from(value: ClassifierErr) -> Self {
        match value {
            ClassifierErr::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
