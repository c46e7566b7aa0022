//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::{path::PathBuf, str::FromStr, time::Duration};

use catalog_admin_types::Language;
use config::{Config, Environment, File};
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

mod cli;

pub use cli::GlobalOverrides;

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "catalog-admin";
const ENV_PREFIX: &str = "CATALOG_ADMIN";
pub const DEFAULT_API_BASE_URL: &str = "https://tokenized.pythonanywhere.com/api/";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_TOKEN_PATH: &str = ".catalog-admin/session-token";
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub logging: LoggingSettings,
    pub session: SessionSettings,
    pub auth: AuthSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Always ends with `/` so relative endpoint paths join beneath it.
    pub base_url: Url,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub token_path: PathBuf,
}

/// Placeholder credential pair checked locally by the auth guard.
#[derive(Clone)]
pub struct AuthSettings {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSettings")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DisplaySettings {
    pub language: Language,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

pub fn load(overrides: &GlobalOverrides) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = overrides.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_overrides(overrides);

    Settings::from_raw(raw)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    api: RawApiSettings,
    logging: RawLoggingSettings,
    session: RawSessionSettings,
    auth: RawAuthSettings,
    display: RawDisplaySettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawApiSettings {
    base_url: Option<String>,
    timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSessionSettings {
    token_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawAuthSettings {
    username: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawDisplaySettings {
    language: Option<String>,
}

impl RawSettings {
    fn apply_overrides(&mut self, overrides: &GlobalOverrides) {
        if let Some(url) = overrides.api_url.as_ref() {
            self.api.base_url = Some(url.clone());
        }
        if let Some(seconds) = overrides.timeout_seconds {
            self.api.timeout_seconds = Some(seconds);
        }
        if let Some(path) = overrides.token_file.as_ref() {
            self.session.token_path = Some(path.clone());
        }
        if let Some(language) = overrides.language.as_ref() {
            self.display.language = Some(language.clone());
        }
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            api,
            logging,
            session,
            auth,
            display,
        } = raw;

        Ok(Self {
            api: build_api_settings(api)?,
            logging: build_logging_settings(logging)?,
            session: build_session_settings(session)?,
            auth: build_auth_settings(auth)?,
            display: build_display_settings(display)?,
        })
    }
}

fn build_api_settings(api: RawApiSettings) -> Result<ApiSettings, LoadError> {
    let raw_url = api
        .base_url
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let base_url = normalize_base_url(&raw_url)
        .map_err(|reason| LoadError::invalid("api.base_url", reason))?;

    let timeout_secs = api.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS);
    if timeout_secs == 0 {
        return Err(LoadError::invalid(
            "api.timeout_seconds",
            "must be greater than zero",
        ));
    }

    Ok(ApiSettings {
        base_url,
        timeout: Duration::from_secs(timeout_secs),
    })
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::WARN,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_session_settings(session: RawSessionSettings) -> Result<SessionSettings, LoadError> {
    let token_path = session
        .token_path
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TOKEN_PATH));
    if token_path.as_os_str().is_empty() {
        return Err(LoadError::invalid("session.token_path", "must not be empty"));
    }
    Ok(SessionSettings { token_path })
}

fn build_auth_settings(auth: RawAuthSettings) -> Result<AuthSettings, LoadError> {
    let username = auth
        .username
        .unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string());
    if username.trim().is_empty() {
        return Err(LoadError::invalid("auth.username", "must not be blank"));
    }
    let password = auth
        .password
        .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string());
    if password.is_empty() {
        return Err(LoadError::invalid("auth.password", "must not be empty"));
    }
    Ok(AuthSettings { username, password })
}

fn build_display_settings(display: RawDisplaySettings) -> Result<DisplaySettings, LoadError> {
    let language = match display.language {
        Some(value) => value
            .parse::<Language>()
            .map_err(|err| LoadError::invalid("display.language", err.to_string()))?,
        None => Language::default(),
    };
    Ok(DisplaySettings { language })
}

fn normalize_base_url(raw: &str) -> Result<Url, String> {
    let mut url = Url::parse(raw).map_err(|err| format!("failed to parse: {err}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme `{}`", url.scheme()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
