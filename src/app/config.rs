use super::keymap::KeyConfig;
use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const TOKEN_ENV_VAR: &str = "TICKR_API_TOKEN";
pub const LOG_ENV_VAR: &str = "TICKR_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("no API token configured; set {TOKEN_ENV_VAR} or api_token in the config file")]
    MissingToken,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub api_token: Option<String>,
    pub quote_base_url: String,
    pub logo_base_url: String,
    pub request_timeout_secs: Option<u64>,
    /// Surface quote payloads that parse badly as errors instead of
    /// logging and leaving the placeholders up.
    pub report_malformed_quotes: bool,
    pub theme: PaletteType,
    pub keys: KeyConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            quote_base_url: "https://cloud.iexapis.com/stable".to_string(),
            logo_base_url: "https://storage.googleapis.com/iex/api".to_string(),
            request_timeout_secs: None,
            report_malformed_quotes: false,
            theme: PaletteType::CatppuccinMocha,
            keys: KeyConfig::default(),
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("tickr");
        path
    })
}

impl AppConfig {
    /// Loads `~/.config/tickr/config.toml` (defaults when absent), then
    /// applies environment overrides and validates.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match config_dir().map(|dir| dir.join("config.toml")) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_env_token(std::env::var(TOKEN_ENV_VAR).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_env_token(&mut self, token: Option<String>) {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.api_token = Some(token);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.api_token {
            Some(token) if !token.trim().is_empty() => Ok(()),
            _ => Err(ConfigError::MissingToken),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
api_token = "pk_file"
request_timeout_secs = 5
theme = "nord"
"#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.api_token.as_deref(), Some("pk_file"));
        assert_eq!(config.request_timeout_secs, Some(5));
        assert_eq!(config.theme, PaletteType::Nord);
        assert_eq!(config.quote_base_url, AppConfig::default().quote_base_url);
        assert!(!config.report_malformed_quotes);
    }

    #[test]
    fn test_parse_error_names_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_token = [").unwrap();

        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_env_token_overrides_file() {
        let mut config = AppConfig {
            api_token: Some("pk_file".to_string()),
            ..AppConfig::default()
        };
        config.apply_env_token(Some("pk_env".to_string()));
        assert_eq!(config.api_token.as_deref(), Some("pk_env"));

        config.apply_env_token(Some("  ".to_string()));
        assert_eq!(config.api_token.as_deref(), Some("pk_env"));

        config.apply_env_token(None);
        assert_eq!(config.api_token.as_deref(), Some("pk_env"));
    }

    #[test]
    fn test_missing_token_fails_validation() {
        assert!(matches!(
            AppConfig::default().validate(),
            Err(ConfigError::MissingToken)
        ));

        let blank = AppConfig {
            api_token: Some(String::new()),
            ..AppConfig::default()
        };
        assert!(blank.validate().is_err());

        let ok = AppConfig {
            api_token: Some("pk_test".to_string()),
            ..AppConfig::default()
        };
        assert!(ok.validate().is_ok());
    }
}
