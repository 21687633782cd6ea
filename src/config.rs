use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when `REVIEWS_CONFIG` is unset
const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Application configuration, resolved once at startup
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub ratings: RatingsConfig,
    pub reviews: ReviewsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where and how to reach the downstream ratings service
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RatingsConfig {
    pub enabled: bool,
    pub hostname: String,
    pub services_domain: String,
    pub port: u16,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReviewsConfig {
    pub star_color: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9080,
        }
    }
}

impl Default for RatingsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            hostname: "ratings".to_string(),
            services_domain: String::new(),
            port: 9080,
            timeout_secs: 10,
        }
    }
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            star_color: "black".to_string(),
        }
    }
}

impl AppConfig {
    /// Load defaults, then the optional TOML file, then environment overrides.
    ///
    /// A file named by `REVIEWS_CONFIG` must exist; the fallback `config.toml`
    /// is only read when present.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var("REVIEWS_CONFIG") {
            Ok(path) if !path.is_empty() => Self::from_file(Path::new(&path))?,
            _ => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::from_file(path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Apply overrides from `lookup`. Unset and empty values leave the current
    /// setting untouched.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(color) = get("STAR_COLOR") {
            self.reviews.star_color = color;
        }
        if let Some(domain) = get("SERVICES_DOMAIN") {
            self.ratings.services_domain = domain;
        }
        if let Some(hostname) = get("RATINGS_HOSTNAME") {
            self.ratings.hostname = hostname;
        }
        if let Some(enabled) = get("RATINGS_ENABLED") {
            self.ratings.enabled = enabled
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "RATINGS_ENABLED",
                    value: enabled,
                })?;
        }
        if let Some(port) = get("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: port,
            })?;
        }

        Ok(())
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl RatingsConfig {
    /// Base URL of the ratings endpoint, without the product id segment
    pub fn service_url(&self) -> String {
        let domain = if self.services_domain.is_empty() {
            String::new()
        } else {
            format!(".{}", self.services_domain)
        };
        format!("http://{}{}:{}/ratings", self.hostname, domain, self.port)
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
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_match_the_deployed_service() {
        let config = AppConfig::default();

        assert_eq!(config.server.bind_address(), "0.0.0.0:9080");
        assert!(config.ratings.enabled);
        assert_eq!(config.ratings.service_url(), "http://ratings:9080/ratings");
        assert_eq!(config.reviews.star_color, "black");
    }

    #[test]
    fn services_domain_is_appended_to_hostname() {
        let mut config = AppConfig::default();
        config
            .apply_overrides(lookup_from(&[
                ("RATINGS_HOSTNAME", "ratings-v2"),
                ("SERVICES_DOMAIN", "bookinfo.svc.cluster.local"),
            ]))
            .unwrap();

        assert_eq!(
            config.ratings.service_url(),
            "http://ratings-v2.bookinfo.svc.cluster.local:9080/ratings"
        );
    }

    #[test]
    fn empty_overrides_keep_defaults() {
        let mut config = AppConfig::default();
        config
            .apply_overrides(lookup_from(&[
                ("STAR_COLOR", ""),
                ("RATINGS_HOSTNAME", ""),
                ("SERVICES_DOMAIN", ""),
            ]))
            .unwrap();

        assert_eq!(config.reviews.star_color, "black");
        assert_eq!(config.ratings.service_url(), "http://ratings:9080/ratings");
    }

    #[test]
    fn overrides_win_over_file_values() {
        let mut config = AppConfig::from_toml(
            r#"
            [reviews]
            star_color = "red"

            [ratings]
            enabled = true
            timeout_secs = 3
            "#,
        )
        .unwrap();
        config
            .apply_overrides(lookup_from(&[
                ("STAR_COLOR", "blue"),
                ("RATINGS_ENABLED", "false"),
                ("PORT", "8081"),
            ]))
            .unwrap();

        assert_eq!(config.reviews.star_color, "blue");
        assert!(!config.ratings.enabled);
        assert_eq!(config.ratings.timeout_secs, 3);
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = AppConfig::from_toml("[server]\nport = 9999\n").unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9999);
        assert_eq!(config.ratings.hostname, "ratings");
    }

    #[test]
    fn invalid_typed_override_is_rejected() {
        let mut config = AppConfig::default();
        let err = config
            .apply_overrides(lookup_from(&[("PORT", "not-a-port")]))
            .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let err = AppConfig::from_toml("[server\nport = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = AppConfig::from_file(Path::new("/nonexistent/reviews.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
