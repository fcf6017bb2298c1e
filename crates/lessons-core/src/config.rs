//! Configuration utilities

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub log_level: String,
    /// Độ trễ giả lập khi proxy tải video (ms)
    pub proxy_delay_ms: u64,
    /// Số video tối đa proxy giữ trong cache
    pub proxy_capacity: usize,
    /// Có chạy cả phần "bad example" của mỗi lesson không
    pub show_bad: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            proxy_delay_ms: 1000,
            proxy_capacity: 16,
            show_bad: true,
        }
    }
}

impl AppConfig {
    /// Load config từ environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load config từ một nguồn key/value bất kỳ
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            log_level: lookup("LESSONS_LOG_LEVEL").unwrap_or(defaults.log_level),
            proxy_delay_ms: lookup("LESSONS_PROXY_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.proxy_delay_ms),
            proxy_capacity: lookup("LESSONS_PROXY_CAPACITY")
                .and_then(|v| v.parse().ok())
                .filter(|capacity| *capacity > 0)
                .unwrap_or(defaults.proxy_capacity),
            show_bad: lookup("LESSONS_SHOW_BAD")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.show_bad),
        }
    }

    /// Config cho test: không delay
    pub fn quiet() -> Self {
        Self {
            proxy_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn proxy_load_delay(&self) -> Duration {
        Duration::from_millis(self.proxy_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.proxy_delay_ms, 1000);
        assert_eq!(config.proxy_capacity, 16);
        assert!(config.show_bad);
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("LESSONS_PROXY_DELAY_MS", "0"),
            ("LESSONS_PROXY_CAPACITY", "2"),
            ("LESSONS_SHOW_BAD", "false"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.proxy_load_delay(), Duration::ZERO);
        assert_eq!(config.proxy_capacity, 2);
        assert!(!config.show_bad);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_lookup(|key| match key {
            "LESSONS_PROXY_DELAY_MS" => Some("soon".to_string()),
            "LESSONS_PROXY_CAPACITY" => Some("0".to_string()),
            _ => None,
        });
        assert_eq!(config, AppConfig::default());
    }
}
