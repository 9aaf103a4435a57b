//! Application configuration
//!
//! Settings come from environment variables with sensible defaults.

use std::env;

/// Default base URL of the agents API
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Default number of lines kept in the activity log
pub const DEFAULT_ACTIVITY_LOG_LINES: usize = 500;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Agents API configuration
    pub api: ApiConfig,
    /// Window and panel configuration
    pub ui: UiConfig,
}

/// Agents API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL requests are resolved against (e.g. `http://localhost:3000`)
    pub base_url: String,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Lines of scrollback in the activity log (0 = unlimited)
    pub activity_log_lines: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_API_URL.to_string(),
            },
            ui: UiConfig {
                activity_log_lines: DEFAULT_ACTIVITY_LOG_LINES,
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api: ApiConfig {
                base_url: lookup("AIM_API_URL")
                    .map(|url| url.trim().to_string())
                    .filter(|url| !url.is_empty())
                    .unwrap_or(defaults.api.base_url),
            },
            ui: UiConfig {
                activity_log_lines: lookup("AIM_ACTIVITY_LOG_LINES")
                    .and_then(|n| n.trim().parse().ok())
                    .unwrap_or(defaults.ui.activity_log_lines),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.ui.activity_log_lines, 500);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("AIM_API_URL", "http://10.0.0.5:4000/"),
            ("AIM_ACTIVITY_LOG_LINES", "50"),
        ]));
        assert_eq!(config.api.base_url, "http://10.0.0.5:4000/");
        assert_eq!(config.ui.activity_log_lines, 50);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("AIM_API_URL", "   "),
            ("AIM_ACTIVITY_LOG_LINES", "lots"),
        ]));
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(config.ui.activity_log_lines, DEFAULT_ACTIVITY_LOG_LINES);
    }

    #[test]
    #[serial]
    fn test_from_env() {
        env::set_var("AIM_API_URL", "http://agents.local:3000");
        let config = Config::from_env();
        env::remove_var("AIM_API_URL");
        assert_eq!(config.api.base_url, "http://agents.local:3000");
    }
}
