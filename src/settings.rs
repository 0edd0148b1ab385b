use crate::airline_api::DEFAULT_API_URL;
use crate::airline_search::DEFAULT_MAX_RESULTS;
use crate::app_restart::DEFAULT_OPEN_CMD;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Airline search endpoint. The query is appended as `?query=`.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Maximum number of airlines kept from a single response.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Optional request timeout in seconds. `None` leaves it to the HTTP client.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file receiving log output in addition to stderr.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Show toast notifications.
    #[serde(default = "default_toasts")]
    pub enable_toasts: bool,
    /// Append every toast to this file when set.
    #[serde(default)]
    pub toast_log: Option<PathBuf>,
    /// Application reopened by the `reopen` command.
    #[serde(default = "default_reopen_app")]
    pub reopen_app: String,
    /// Process name checked before reopening. Defaults to the app name.
    #[serde(default)]
    pub reopen_process: Option<String>,
    /// Command used to open an application, the app name is appended.
    #[serde(default = "default_open_command")]
    pub open_command: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_toasts() -> bool {
    true
}

fn default_reopen_app() -> String {
    "Finder".to_string()
}

fn default_open_command() -> String {
    DEFAULT_OPEN_CMD.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            max_results: default_max_results(),
            request_timeout_secs: None,
            debug_logging: false,
            log_file: None,
            enable_toasts: default_toasts(),
            toast_log: None,
            reopen_app: default_reopen_app(),
            reopen_process: None,
            open_command: default_open_command(),
        }
    }
}

impl Settings {
    /// Default location: `<config dir>/launcher_extensions/settings.json`,
    /// falling back to the working directory.
    pub fn default_path() -> PathBuf {
        dirs_next::config_dir()
            .map(|d| d.join("launcher_extensions").join(SETTINGS_FILE))
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
    }

    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn reopen_process(&self) -> &str {
        self.reopen_process.as_deref().unwrap_or(&self.reopen_app)
    }
}
