use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

pub const DEFAULT_UPDATES_PATH: &str = "data/updates.json";
pub const DEFAULT_RECENCY_WINDOW_DAYS: i64 = 2;
/// Upper bound for `RECENCY_WINDOW_DAYS`, roughly a century.
pub const MAX_RECENCY_WINDOW_DAYS: i64 = 36_500;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` leaves the classifier disabled for the whole run.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub temperature: Option<f32>,
    pub updates_path: PathBuf,
    pub window_days: i64,
    pub sources_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            temperature: None,
            updates_path: PathBuf::from(DEFAULT_UPDATES_PATH),
            window_days: DEFAULT_RECENCY_WINDOW_DAYS,
            sources_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, so tests don't touch the real environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            api_key: non_empty("GOOGLE_API_KEY"),
            model: non_empty("GEMINI_MODEL").unwrap_or(defaults.model),
            base_url: non_empty("GEMINI_BASE_URL").unwrap_or(defaults.base_url),
            temperature: non_empty("LLM_TEMPERATURE").and_then(|v| parse_or_warn("LLM_TEMPERATURE", &v)),
            updates_path: non_empty("UPDATES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.updates_path),
            window_days: non_empty("RECENCY_WINDOW_DAYS")
                .and_then(|v| parse_window_days(&v))
                .unwrap_or(defaults.window_days),
            sources_path: non_empty("FEED_SOURCES_PATH").map(PathBuf::from),
        }
    }
}

fn parse_or_warn<T: FromStr>(var: &str, value: &str) -> Option<T> {
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("Ignoring invalid value for {}: {:?}", var, value);
            None
        }
    }
}

fn parse_window_days(value: &str) -> Option<i64> {
    let days: i64 = parse_or_warn("RECENCY_WINDOW_DAYS", value)?;
    if (1..=MAX_RECENCY_WINDOW_DAYS).contains(&days) {
        Some(days)
    } else {
        warn!(
            "Ignoring RECENCY_WINDOW_DAYS={}: must be between 1 and {}",
            days, MAX_RECENCY_WINDOW_DAYS
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]);
        assert!(config.api_key.is_none());
        assert_eq!(config.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.updates_path, PathBuf::from("data/updates.json"));
        assert_eq!(config.window_days, 2);
        assert!(config.temperature.is_none());
        assert!(config.sources_path.is_none());
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = config_from(&[("GOOGLE_API_KEY", "   ")]);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("GOOGLE_API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("RECENCY_WINDOW_DAYS", "7"),
            ("LLM_TEMPERATURE", "0.2"),
            ("UPDATES_PATH", "/tmp/out.json"),
            ("FEED_SOURCES_PATH", "feeds.json"),
        ]);
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.window_days, 7);
        assert_eq!(config.temperature, Some(0.2));
        assert_eq!(config.updates_path, PathBuf::from("/tmp/out.json"));
        assert_eq!(config.sources_path, Some(PathBuf::from("feeds.json")));
    }

    #[test]
    fn test_invalid_window_falls_back() {
        let config = config_from(&[("RECENCY_WINDOW_DAYS", "two")]);
        assert_eq!(config.window_days, DEFAULT_RECENCY_WINDOW_DAYS);
    }

    #[test]
    fn test_out_of_range_window_falls_back() {
        for value in ["0", "-3", "200000000", "9223372036854775807"] {
            let config = config_from(&[("RECENCY_WINDOW_DAYS", value)]);
            assert_eq!(config.window_days, DEFAULT_RECENCY_WINDOW_DAYS, "value {}", value);
        }
        let config = config_from(&[("RECENCY_WINDOW_DAYS", "36500")]);
        assert_eq!(config.window_days, MAX_RECENCY_WINDOW_DAYS);
    }
}
