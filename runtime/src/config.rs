//! Runtime configuration with environment overrides.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Hosts the redirect expander may contact, matched with their subdomains.
pub const DEFAULT_ALLOWED_DOMAINS: &[&str] =
    &["google.com", "google.co.jp", "goo.gl", "googleusercontent.com"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidEnv {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Tunables for the search pipeline and its host integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    /// Delay before a forwarded address search is executed.
    pub forward_delay_ms: u64,
    /// Timeout for the whole redirect expansion request.
    pub expand_timeout_ms: u64,
    pub max_redirects: usize,
    pub allowed_domains: Vec<String>,
    /// Cancel a pending expansion when a newer search arrives.
    pub cancel_stale: bool,
    pub user_agent: String,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            forward_delay_ms: 10,
            expand_timeout_ms: 5_000,
            max_redirects: 10,
            allowed_domains: DEFAULT_ALLOWED_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
            cancel_stale: false,
            user_agent: format!("gmaps-locate/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl LocatorConfig {
    /// Defaults overlaid with any `GMAPS_LOCATE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().overlay(|var| std::env::var(var).ok())
    }

    fn overlay(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(v) = parse_var(&lookup, "GMAPS_LOCATE_FORWARD_DELAY_MS")? {
            self.forward_delay_ms = v;
        }
        if let Some(v) = parse_var(&lookup, "GMAPS_LOCATE_EXPAND_TIMEOUT_MS")? {
            self.expand_timeout_ms = v;
        }
        if let Some(v) = parse_var(&lookup, "GMAPS_LOCATE_MAX_REDIRECTS")? {
            self.max_redirects = v;
        }
        if let Some(v) = parse_var(&lookup, "GMAPS_LOCATE_CANCEL_STALE")? {
            self.cancel_stale = v;
        }
        if let Some(v) = lookup("GMAPS_LOCATE_USER_AGENT") {
            self.user_agent = v;
        }
        Ok(self)
    }

    pub fn forward_delay(&self) -> Duration {
        Duration::from_millis(self.forward_delay_ms)
    }

    pub fn expand_timeout(&self) -> Duration {
        Duration::from_millis(self.expand_timeout_ms)
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = lookup(var) else {
        return Ok(None);
    };
    match value.trim().parse::<T>() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => Err(ConfigError::InvalidEnv {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn overlay(vars: &[(&str, &str)]) -> Result<LocatorConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LocatorConfig::default().overlay(|k| map.get(k).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = LocatorConfig::default();
        assert_eq!(config.forward_delay(), Duration::from_millis(10));
        assert!(!config.cancel_stale);
        assert!(config.allowed_domains.iter().any(|d| d == "goo.gl"));
    }

    #[test]
    fn test_env_overlay() {
        let config = overlay(&[
            ("GMAPS_LOCATE_MAX_REDIRECTS", "3"),
            ("GMAPS_LOCATE_CANCEL_STALE", "true"),
            ("GMAPS_LOCATE_USER_AGENT", "test-agent"),
        ])
        .unwrap();
        assert_eq!(config.max_redirects, 3);
        assert!(config.cancel_stale);
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.forward_delay_ms, 10);
    }

    #[test]
    fn test_invalid_env_value() {
        let err = overlay(&[("GMAPS_LOCATE_FORWARD_DELAY_MS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("GMAPS_LOCATE_FORWARD_DELAY_MS"));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: LocatorConfig = serde_json::from_str(r#"{"forward_delay_ms": 25}"#).unwrap();
        assert_eq!(config.forward_delay_ms, 25);
        assert_eq!(config.expand_timeout_ms, 5_000);
    }
}
