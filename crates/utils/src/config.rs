//! Runtime settings read from the environment or JSON.

use serde::{Deserialize, Serialize};
use underbar_core::{Error, Result, DEFAULT_LOG_FILTER, UNDERBAR_LOG_VAR, UNDERBAR_SEED_VAR};

/// Settings for the ambient parts of the library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Seed for the random source; `None` uses the thread RNG
    pub shuffle_seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            shuffle_seed: None,
        }
    }
}

impl Settings {
    /// Read `UNDERBAR_LOG` and `UNDERBAR_SEED` from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(filter) = lookup(UNDERBAR_LOG_VAR) {
            let filter = filter.trim();
            if !filter.is_empty() {
                settings.log_filter = filter.to_string();
            }
        }

        if let Some(seed) = lookup(UNDERBAR_SEED_VAR) {
            let parsed = seed.trim().parse::<u64>().map_err(|e| {
                Error::configuration(format!(
                    "{UNDERBAR_SEED_VAR} must be an unsigned integer, got '{seed}': {e}"
                ))
            })?;
            settings.shuffle_seed = Some(parsed);
        }

        Ok(settings)
    }

    /// Parse settings from a JSON document; missing fields take defaults
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.log_filter, "warn");
    }

    #[test]
    fn test_reads_filter_and_seed() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("UNDERBAR_LOG", "underbar=trace"),
            ("UNDERBAR_SEED", " 42 "),
        ]))
        .unwrap();
        assert_eq!(settings.log_filter, "underbar=trace");
        assert_eq!(settings.shuffle_seed, Some(42));
    }

    #[test]
    fn test_invalid_seed_is_a_configuration_error() {
        let result = Settings::from_lookup(lookup_from(&[("UNDERBAR_SEED", "soon")]));
        let error = result.unwrap_err();
        assert!(matches!(error, Error::Configuration { .. }));
        assert!(error.to_string().contains("UNDERBAR_SEED"));
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let settings = Settings::from_json(r#"{"shuffle_seed": 7}"#).unwrap();
        assert_eq!(settings.shuffle_seed, Some(7));
        assert_eq!(settings.log_filter, "warn");

        assert!(matches!(
            Settings::from_json("{not json"),
            Err(Error::Json { .. })
        ));
    }
}
