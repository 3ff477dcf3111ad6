//! Search engine configuration.
//!
//! Options resolve in layers:
//! 1. Built-in defaults
//! 2. JSON options file (host-provided path)
//! 3. Environment variables (highest priority)
//!
//! Invalid values fail fast at engine construction; nothing is silently
//! clamped.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Tunable options for the palette search engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Debounce delay before a search runs, in milliseconds. Zero disables
    /// debouncing entirely.
    pub debounce_ms: u64,
    /// Queries shorter than this short-circuit to the browse view.
    pub min_query_length: usize,
    /// Upper bound on the number of returned results. Must be at least 1.
    pub max_results: usize,
    /// Memoize ranked result lists per normalized query.
    pub enable_caching: bool,
    /// Apply usage/recency bonuses when ordering results.
    pub enable_ranking: bool,
    /// Match case-sensitively instead of lower-casing the query.
    pub case_sensitive: bool,
    /// Minimum normalized Levenshtein similarity for a fuzzy match.
    /// Must lie in `[0, 1]`.
    pub fuzzy_threshold: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            debounce_ms: 150,
            min_query_length: 0,
            max_results: 50,
            enable_caching: true,
            enable_ranking: true,
            case_sensitive: false,
            fuzzy_threshold: 0.3,
        }
    }
}

impl SearchOptions {
    /// Check option values, failing fast on anything out of range.
    pub fn validate(&self) -> Result<()> {
        if self.max_results < 1 {
            return Err(Error::Config(format!(
                "max_results must be at least 1, got {}",
                self.max_results
            )));
        }
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(Error::Config(format!(
                "fuzzy_threshold must lie in [0, 1], got {}",
                self.fuzzy_threshold
            )));
        }
        Ok(())
    }
}

/// Load options from a JSON file, apply environment overrides and validate.
pub fn load_options(path: &Path) -> Result<SearchOptions> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "Failed to read options file {}: {}",
            path.display(),
            e
        ))
    })?;
    let mut options: SearchOptions = serde_json::from_str(&content).map_err(|e| {
        Error::Config(format!(
            "Failed to parse options file {}: {}",
            path.display(),
            e
        ))
    })?;
    apply_env_overrides(&mut options);
    options.validate()?;
    Ok(options)
}

fn apply_env_overrides(options: &mut SearchOptions) {
    if let Ok(val) = std::env::var("INKDOWN_DEBOUNCE_MS") {
        if let Ok(n) = val.parse() {
            options.debounce_ms = n;
        }
    }
    if let Ok(val) = std::env::var("INKDOWN_MAX_RESULTS") {
        if let Ok(n) = val.parse() {
            options.max_results = n;
        }
    }
    if let Ok(val) = std::env::var("INKDOWN_FUZZY_THRESHOLD") {
        if let Ok(n) = val.parse() {
            options.fuzzy_threshold = n;
        }
    }
    if let Ok(val) = std::env::var("INKDOWN_CASE_SENSITIVE") {
        options.case_sensitive = matches!(val.as_str(), "1" | "true");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_valid() {
        let options = SearchOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.debounce_ms, 150);
        assert_eq!(options.max_results, 50);
        assert!((options.fuzzy_threshold - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_max_results_is_rejected() {
        let options = SearchOptions {
            max_results: 0,
            ..SearchOptions::default()
        };
        assert!(matches!(options.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let options = SearchOptions {
            fuzzy_threshold: 1.5,
            ..SearchOptions::default()
        };
        assert!(matches!(options.validate(), Err(Error::Config(_))));

        let options = SearchOptions {
            fuzzy_threshold: -0.1,
            ..SearchOptions::default()
        };
        assert!(matches!(options.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let options: SearchOptions = serde_json::from_str(r#"{"max_results": 10}"#).unwrap();
        assert_eq!(options.max_results, 10);
        assert_eq!(options.debounce_ms, 150);
        assert!(options.enable_caching);
    }

    #[test]
    fn load_options_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.json");
        std::fs::write(&path, r#"{"debounce_ms": 0, "case_sensitive": true}"#).unwrap();
        let options = load_options(&path).unwrap();
        assert_eq!(options.debounce_ms, 0);
        assert!(options.case_sensitive);
    }

    #[test]
    fn load_options_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.json");
        std::fs::write(&path, r#"{"max_results": 0}"#).unwrap();
        assert!(load_options(&path).is_err());
    }
}
