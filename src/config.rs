//! Process configuration from environment variables.

use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::engine::SessionOptions;

pub const SEED_VAR: &str = "WASTEDRIS_SEED";
pub const LOG_PATH_VAR: &str = "WASTEDRIS_LOG_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Fixed RNG seed; entropy when unset
    pub seed: Option<u64>,
    /// Log file; logging stays off when unset since the screen belongs to the game
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from any key lookup. Unparseable or blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(SEED_VAR).and_then(|s| s.trim().parse().ok());
        let log_path = lookup(LOG_PATH_VAR)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });
        Self { seed, log_path }
    }

    pub fn session_options(&self) -> SessionOptions {
        match self.seed {
            Some(seed) => SessionOptions::new().with_seed(seed),
            None => SessionOptions::new(),
        }
    }

    /// Route `log` output to the configured file. Returns whether logging is on.
    pub fn init_logging(&self) -> Result<bool> {
        let Some(path) = &self.log_path else {
            return Ok(false);
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init()
            .context("initialising logger")?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert!(!config.init_logging().unwrap());
    }

    #[test]
    fn parses_seed_and_path() {
        let config =
            AppConfig::from_lookup(lookup(&[(SEED_VAR, " 42 "), (LOG_PATH_VAR, "/tmp/w.log")]));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/w.log")));
        assert_eq!(config.session_options().seed, Some(42));
    }

    #[test]
    fn bad_values_are_ignored() {
        let config = AppConfig::from_lookup(lookup(&[(SEED_VAR, "abc"), (LOG_PATH_VAR, "  ")]));
        assert_eq!(config, AppConfig::default());
    }
}
