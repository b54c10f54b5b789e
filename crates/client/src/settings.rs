//! Endpoint and storage configuration.
//!
//! Every value has a default matching a local development setup and can be
//! overridden through the environment (`BACKOFFICE_*`) or explicitly by the
//! console flags.

use std::path::PathBuf;
use std::time::Duration;

pub const AUTH_URL_VAR: &str = "BACKOFFICE_AUTH_URL";
pub const API_URL_VAR: &str = "BACKOFFICE_API_URL";
pub const STORAGE_PATH_VAR: &str = "BACKOFFICE_STORAGE_PATH";
pub const TIMEOUT_VAR: &str = "BACKOFFICE_TIMEOUT_SECS";

pub const DEFAULT_AUTH_URL: &str = "http://localhost:8080/api/auth";
pub const DEFAULT_API_URL: &str = "http://localhost:9082/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Base URL of the identity service (`.../api/auth`).
    pub auth_url: String,
    /// Base URL of the RRHH REST service (`.../api`).
    pub api_url: String,
    /// Where the session is persisted between runs.
    pub storage_path: PathBuf,
    pub timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            storage_path: default_storage_path(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_blank(AUTH_URL_VAR) {
            settings.auth_url = url;
        }
        if let Some(url) = non_blank(API_URL_VAR) {
            settings.api_url = url;
        }
        if let Some(path) = non_blank(STORAGE_PATH_VAR) {
            settings.storage_path = PathBuf::from(path);
        }
        if let Some(secs) = non_blank(TIMEOUT_VAR).and_then(|v| v.trim().parse::<u64>().ok()) {
            settings.timeout = Duration::from_secs(secs);
        }
        settings
    }

    pub fn with_auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = url.into();
        self
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = path.into();
        self
    }

    /// `<auth_url>/<path>`
    pub fn auth_endpoint(&self, path: &str) -> String {
        join(&self.auth_url, path)
    }

    /// `<api_url>/<path>`
    pub fn api_endpoint(&self, path: &str) -> String {
        join(&self.api_url, path)
    }
}

fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn default_storage_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("backoffice")
        .join("storage.json")
}
