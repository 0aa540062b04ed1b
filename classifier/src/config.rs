use std::{env, error::Error, fmt, num::NonZeroU64, path::PathBuf, str::FromStr};

/// Where the trainer writes the artifact and the server reads it from.
pub const DEFAULT_MODEL_PATH: &str = "model/model.pkl";

const DEFAULT_SEED: u64 = 42;
const DEFAULT_TEST_RATIO: f32 = 0.2;
const DEFAULT_MAX_ITERATIONS: NonZeroU64 = NonZeroU64::new(200).unwrap();

/// A configuration variable was set to something that does not parse.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigErr {
    Invalid { var: &'static str, value: String },
}

impl fmt::Display for ConfigErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErr::Invalid { var, value } => write!(f, "invalid value for {var}: {value:?}"),
        }
    }
}

impl Error for ConfigErr {}

/// Reads `var` through `lookup`, falling back to `default` when it is unset.
///
/// # Arguments
/// * `lookup` - Resolves a variable name to its value, if any.
/// * `var` - The variable name.
/// * `default` - The value used when the variable is unset.
///
/// # Returns
/// The parsed value or a `ConfigErr` if the variable is set but malformed.
pub fn var_or<T, F>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigErr>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigErr::Invalid { var, value }),
        None => Ok(default),
    }
}

/// Immutable parameters of a training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub model_path: PathBuf,
    pub seed: u64,
    pub test_ratio: f32,
    pub max_iterations: NonZeroU64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            seed: DEFAULT_SEED,
            test_ratio: DEFAULT_TEST_RATIO,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl TrainConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigErr> {
        Self::from_vars(|var| env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// * `lookup` - Resolves `MODEL_PATH`, `SEED`, `TEST_RATIO` and `MAX_ITERATIONS`.
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
            seed: var_or(&lookup, "SEED", defaults.seed)?,
            test_ratio: var_or(&lookup, "TEST_RATIO", defaults.test_ratio)?,
            max_iterations: var_or(&lookup, "MAX_ITERATIONS", defaults.max_iterations)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |var| vars.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = TrainConfig::from_vars(lookup(&[])).unwrap();
        assert_eq!(config.model_path, PathBuf::from("model/model.pkl"));
        assert_eq!(config.seed, 42);
        assert_eq!(config.test_ratio, 0.2);
        assert_eq!(config.max_iterations.get(), 200);
    }

    #[test]
    fn overrides_from_vars() {
        let config = TrainConfig::from_vars(lookup(&[
            ("MODEL_PATH", "/tmp/iris.bin"),
            ("SEED", "7"),
            ("MAX_ITERATIONS", " 50 "),
        ]))
        .unwrap();

        assert_eq!(config.model_path, PathBuf::from("/tmp/iris.bin"));
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_iterations.get(), 50);
    }

    #[test]
    fn malformed_var_is_an_error() {
        let err = TrainConfig::from_vars(lookup(&[("MAX_ITERATIONS", "0")])).unwrap_err();
        assert_eq!(
            err,
            ConfigErr::Invalid {
                var: "MAX_ITERATIONS",
                value: "0".to_string()
            }
        );
    }
}
