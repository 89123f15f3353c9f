use crate::errors::DashboardError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ROSTER_URL: &str = "https://api.maxplayer.tv/v3/api/public/users";
pub const DEFAULT_EXPORT_PATH: &str = "maxplayer_users.csv";

pub const TOKEN_ENV: &str = "API_TOKEN";
pub const ROSTER_URL_ENV: &str = "ROSTER_URL";

fn default_roster_url() -> String {
    DEFAULT_ROSTER_URL.to_string()
}

fn default_export_path() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_PATH)
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default = "default_roster_url")]
    pub roster_url: String,
    #[serde(default = "default_export_path")]
    pub export_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            roster_url: default_roster_url(),
            export_path: default_export_path(),
        }
    }
}

impl AppConfig {
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("tv", "maxplayer", "maxplayer-roster")
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load config.json (if any), then apply `.env` and environment overrides
    pub fn load() -> Result<Self, anyhow::Error> {
        let _ = dotenvy::dotenv();

        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => AppConfig::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self, DashboardError> {
        let content = fs::read_to_string(path)
            .map_err(|e| DashboardError::Config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| DashboardError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Environment values win over the file; blank values are ignored
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(token) = non_blank(TOKEN_ENV) {
            self.api_token = Some(token);
        }
        if let Some(url) = non_blank(ROSTER_URL_ENV) {
            self.roster_url = url;
        }
    }

    pub fn save(&self) -> Result<(), anyhow::Error> {
        if let Some(proj_dirs) = Self::project_dirs() {
            let config_dir = proj_dirs.config_dir();
            fs::create_dir_all(config_dir)?;
            let content = serde_json::to_string_pretty(self)?;
            fs::write(config_dir.join("config.json"), content)?;
        }
        Ok(())
    }

    /// The roster token; its absence is fatal for the dashboard
    pub fn token(&self) -> Result<&str, DashboardError> {
        self.api_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(DashboardError::MissingToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: AppConfig = serde_json::from_str(r#"{"api_token":"abc"}"#).unwrap();
        assert_eq!(config.roster_url, DEFAULT_ROSTER_URL);
        assert_eq!(config.export_path, PathBuf::from(DEFAULT_EXPORT_PATH));
        assert_eq!(config.token(), Ok("abc"));
    }

    #[test]
    fn test_env_overrides_file() {
        let env: HashMap<&str, &str> = [(TOKEN_ENV, "from-env"), (ROSTER_URL_ENV, "http://localhost:9/users")]
            .into_iter()
            .collect();
        let mut config = AppConfig {
            api_token: Some("from-file".into()),
            ..Default::default()
        };
        config.apply_env(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.token(), Ok("from-env"));
        assert_eq!(config.roster_url, "http://localhost:9/users");
    }

    #[test]
    fn test_blank_token_is_missing() {
        let mut config = AppConfig::default();
        config.apply_env(|_| Some("   ".to_string()));
        assert_eq!(config.token(), Err(DashboardError::MissingToken));
        config.api_token = Some(" ".into());
        assert_eq!(config.token(), Err(DashboardError::MissingToken));
    }

    #[test]
    fn test_load_from_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ nope").unwrap();
        assert!(matches!(AppConfig::load_from(&path), Err(DashboardError::Config(_))));
    }
}
