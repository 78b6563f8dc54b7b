//! Runtime configuration.
//!
//! The API key is injected through the environment; nothing secret is
//! compiled into the binary.
//!
//! ```ignore
//! use jokecard::config::AppConfig;
//!
//! let config = AppConfig::new("sk-...")
//!     .with_model("deepseek-chat")
//!     .with_output_dir("/tmp/cards");
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::completion::{DEFAULT_BASE_URL, DEFAULT_MODEL};

pub const ENV_API_KEY: &str = "JOKECARD_API_KEY";
pub const ENV_API_KEY_FALLBACK: &str = "DEEPSEEK_API_KEY";
pub const ENV_BASE_URL: &str = "JOKECARD_BASE_URL";
pub const ENV_MODEL: &str = "JOKECARD_MODEL";
pub const ENV_OUTPUT_DIR: &str = "JOKECARD_OUTPUT_DIR";
pub const ENV_FILE_LABEL: &str = "JOKECARD_FILE_LABEL";
pub const ENV_FONT: &str = "JOKECARD_FONT";
pub const ENV_TIMEOUT_SECS: &str = "JOKECARD_TIMEOUT_SECS";
pub const ENV_LOG_DIR: &str = "JOKECARD_LOG_DIR";

/// Default prefix of exported image file names.
pub const DEFAULT_FILE_LABEL: &str = "冷笑话";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing API key: set JOKECARD_API_KEY (or DEEPSEEK_API_KEY)")]
    MissingApiKey,

    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// Directory exported PNGs are written to.
    pub output_dir: PathBuf,
    /// File name prefix: `<label>_<epoch-millis>.png`.
    pub file_label: String,
    /// Explicit font for card export; `None` searches system fonts.
    pub font_path: Option<PathBuf>,
    /// `None` waits on the API indefinitely.
    pub request_timeout: Option<Duration>,
    /// `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("output_dir", &self.output_dir)
            .field("file_label", &self.file_label)
            .field("font_path", &self.font_path)
            .field("request_timeout", &self.request_timeout)
            .field("log_dir", &self.log_dir)
            .finish()
    }
}

impl AppConfig {
    /// Config with defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            output_dir: PathBuf::from("."),
            file_label: DEFAULT_FILE_LABEL.to_string(),
            font_path: None,
            request_timeout: None,
            log_dir: default_log_dir(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_file_label(mut self, label: impl Into<String>) -> Self {
        self.file_label = label.into();
        self
    }

    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_log_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.log_dir = dir;
        self
    }

    /// Build the config from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = get(ENV_API_KEY)
            .or_else(|| get(ENV_API_KEY_FALLBACK))
            .ok_or(ConfigError::MissingApiKey)?;

        let mut config = Self::new(api_key);

        if let Some(url) = get(ENV_BASE_URL) {
            config = config.with_base_url(url);
        }
        if let Some(model) = get(ENV_MODEL) {
            config = config.with_model(model);
        }
        if let Some(dir) = get(ENV_OUTPUT_DIR) {
            config = config.with_output_dir(dir);
        }
        if let Some(label) = get(ENV_FILE_LABEL) {
            config = config.with_file_label(label);
        }
        if let Some(font) = get(ENV_FONT) {
            config = config.with_font_path(font);
        }
        if let Some(secs) = get(ENV_TIMEOUT_SECS) {
            let parsed: u64 = secs.parse().map_err(|_| ConfigError::InvalidValue {
                name: ENV_TIMEOUT_SECS,
                value: secs.clone(),
            })?;
            config = config.with_request_timeout(Some(Duration::from_secs(parsed)));
        }
        if let Some(dir) = get(ENV_LOG_DIR) {
            config = config.with_log_dir(Some(PathBuf::from(dir)));
        }

        Ok(config)
    }
}

/// `~/.jokecard/logs`, if a home directory exists.
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".jokecard").join("logs"))
}
