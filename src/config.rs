// =====================================================================
// File: config.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Record Manager Project
// Date: Oct. 14, 2026
//
// Description:
//   Runtime settings for a record store. Defaults are compiled in;
//   the binary can override them from the environment at start-up.
// =====================================================================
use tracing::warn;

/// How many change log entries are kept when nothing else is configured.
pub const DEFAULT_CHANGE_LOG_DEPTH: usize = 10;

/// Environment variable read by [`StoreConfig::from_env`].
pub const CHANGE_LOG_DEPTH_VAR: &str = "RECORDSTORE_CHANGE_LOG_DEPTH";

/// Settings applied when a [`RecordStore`](crate::RecordStore) is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of entries in the change log. Oldest entries are
    /// dropped first; 0 disables the log.
    pub change_log_depth: usize,
}


impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            change_log_depth: DEFAULT_CHANGE_LOG_DEPTH,
        }
    }
}


impl StoreConfig {
    /// Builds a config from the process environment.
    ///
    /// A missing variable keeps the default. A value that is not a
    /// non-negative integer is logged and also keeps the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable lookup.
    ///
    /// # Example
    /// ```
    /// use recordstore::StoreConfig;
    /// let config = StoreConfig::from_lookup(|_| Some("3".to_string()));
    /// assert_eq!(config.change_log_depth, 3);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(CHANGE_LOG_DEPTH_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(depth) => config.change_log_depth = depth,
                Err(_) => warn!(
                    variable = CHANGE_LOG_DEPTH_VAR,
                    value = %raw,
                    "ignoring invalid change log depth, using {}",
                    DEFAULT_CHANGE_LOG_DEPTH
                ),
            }
        }
        config
    }
}


// =====================================================================
// Unit Tests for StoreConfig
// =====================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_depth() {
        assert_eq!(StoreConfig::default().change_log_depth, DEFAULT_CHANGE_LOG_DEPTH);
    }

    #[test]
    fn test_lookup_missing_variable_keeps_default() {
        let config = StoreConfig::from_lookup(|_| None);
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_lookup_reads_depth() {
        let config = StoreConfig::from_lookup(|name| {
            (name == CHANGE_LOG_DEPTH_VAR).then(|| " 25 ".to_string())
        });
        assert_eq!(config.change_log_depth, 25);
    }

    #[test]
    fn test_lookup_invalid_depth_falls_back() {
        let config = StoreConfig::from_lookup(|_| Some("lots".to_string()));
        assert_eq!(config.change_log_depth, DEFAULT_CHANGE_LOG_DEPTH);

        let config = StoreConfig::from_lookup(|_| Some("-4".to_string()));
        assert_eq!(config.change_log_depth, DEFAULT_CHANGE_LOG_DEPTH);
    }
}
