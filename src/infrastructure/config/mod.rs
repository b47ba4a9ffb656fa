use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

pub const CONFIG_PATH_VAR: &str = "CASEGEN_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "casegen.toml";
const ENV_PREFIX: &str = "CASEGEN_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Text field used when a scenario resolves to no fields; empty disables it.
    pub fallback_text_field: String,
    pub log_filter: String,
    /// Entries kept by the in-memory activity log.
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            fallback_text_field: "input".to_string(),
            log_filter: "info".to_string(),
            log_capacity: 100,
        }
    }
}

impl AppConfig {
    pub fn fallback_text_field(&self) -> Option<String> {
        let name = self.fallback_text_field.trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }

    fn validate(self) -> Result<Self> {
        if self.port == 0 {
            return Err(AppError::ConfigError("port must be non-zero".to_string()));
        }
        if self.log_capacity == 0 {
            return Err(AppError::ConfigError(
                "log_capacity must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}

pub struct ConfigService {
    figment: Figment,
}

impl ConfigService {
    /// Defaults, then the TOML file, then `CASEGEN_*` environment variables.
    pub fn new() -> Self {
        let path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::from_figment(
            Figment::from(Serialized::defaults(AppConfig::default()))
                .merge(Toml::file(path))
                .merge(Env::prefixed(ENV_PREFIX).ignore(&["config"])),
        )
    }

    pub fn from_figment(figment: Figment) -> Self {
        Self { figment }
    }

    pub fn load(&self) -> Result<AppConfig> {
        let config: AppConfig = self.figment.extract()?;
        config.validate()
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
    }

    #[test]
    fn test_defaults_load() {
        let config = ConfigService::from_figment(defaults()).load().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.fallback_text_field(), Some("input".to_string()));
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let figment = defaults().merge(Toml::string(
            r#"
            port = 9100
            fallback_text_field = ""
            "#,
        ));
        let config = ConfigService::from_figment(figment).load().unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.fallback_text_field(), None);
    }

    #[test]
    fn test_zero_port_is_rejected() {
        let figment = defaults().merge(Toml::string("port = 0"));
        let err = ConfigService::from_figment(figment).load().unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn test_bad_type_surfaces_config_error() {
        let figment = defaults().merge(Toml::string("port = \"eighty\""));
        let err = ConfigService::from_figment(figment).load().unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
