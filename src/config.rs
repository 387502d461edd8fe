// src/config.rs
use crate::application::queries::report::DEFAULT_TOP_N;
use std::{
    env,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Settings read from the environment.
///
/// `REPORT_TOP_N` is kept raw and only parsed by [`AppConfig::report_top_n`],
/// so commands that never build a report are unaffected by a bad value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    input_path: PathBuf,
    report_top_n: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_input_path() -> PathBuf {
    PathBuf::from("articles.input.json")
}

fn parse_top_n(raw: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| {
            ConfigError::Invalid(format!(
                "REPORT_TOP_N must be a positive integer, got {raw:?}"
            ))
        })
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let input_path = lookup("ARTICLES_INPUT_PATH")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(default_input_path, PathBuf::from);

        Self {
            input_path,
            report_top_n: lookup("REPORT_TOP_N"),
        }
    }

    #[must_use]
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `REPORT_TOP_N` is set but is not
    /// a positive integer.
    pub fn report_top_n(&self) -> Result<usize, ConfigError> {
        self.report_top_n
            .as_deref()
            .map_or(Ok(DEFAULT_TOP_N), parse_top_n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.input_path(), Path::new("articles.input.json"));
        assert_eq!(config.report_top_n().unwrap(), 3);
    }

    #[test]
    fn values_are_read_from_lookup() {
        let config = config_from(&[("ARTICLES_INPUT_PATH", "data/a.json"), ("REPORT_TOP_N", " 5 ")]);
        assert_eq!(config.input_path(), Path::new("data/a.json"));
        assert_eq!(config.report_top_n().unwrap(), 5);
    }

    #[test]
    fn zero_or_garbage_top_n_is_rejected() {
        assert!(config_from(&[("REPORT_TOP_N", "0")]).report_top_n().is_err());
        assert!(config_from(&[("REPORT_TOP_N", "many")]).report_top_n().is_err());
    }

    #[test]
    fn bad_top_n_leaves_input_path_usable() {
        let config = config_from(&[("ARTICLES_INPUT_PATH", "data/a.json"), ("REPORT_TOP_N", "0")]);
        assert_eq!(config.input_path(), Path::new("data/a.json"));
        let err = config.report_top_n().unwrap_err();
        assert!(err.to_string().contains("REPORT_TOP_N"));
    }
}
