use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use phonecast_core::{DEFAULT_SAMPLE_LIMIT, MAX_SAMPLE_LIMIT};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "phonecast";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_BASE_URL: &str = "https://web.whatsapp.com";
pub const MAX_DELAY_SECS: u64 = 600;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sample_limit: usize,
    pub send: SendConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendConfig {
    pub base_url: String,
    pub opener: Option<String>,
    pub startup_secs: u64,
    pub between_secs: u64,
    pub after_failure_secs: u64,
    pub final_settle_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sample_limit: DEFAULT_SAMPLE_LIMIT,
            send: SendConfig::default(),
        }
    }
}

impl Default for SendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            opener: None,
            startup_secs: 5,
            between_secs: 8,
            after_failure_secs: 5,
            final_settle_secs: 8,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid sample_limit value: {0}")]
    InvalidSampleLimit(usize),
    #[error("invalid send.{field} value: {value}")]
    InvalidDelay { field: &'static str, value: u64 },
    #[error("invalid send.base_url value: {0}")]
    InvalidBaseUrl(String),
    #[error("invalid send.opener value: must not be empty")]
    EmptyOpener,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    sample_limit: Option<usize>,
    send: Option<SendFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SendFile {
    base_url: Option<String>,
    opener: Option<String>,
    startup_secs: Option<u64>,
    between_secs: Option<u64>,
    after_failure_secs: Option<u64>,
    final_settle_secs: Option<u64>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(limit) = parsed.sample_limit {
        if limit == 0 || limit > MAX_SAMPLE_LIMIT {
            return Err(ConfigError::InvalidSampleLimit(limit));
        }
        config.sample_limit = limit;
    }

    let send = parsed.send.unwrap_or_default();
    if let Some(base_url) = send.base_url {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }
        config.send.base_url = trimmed.to_string();
    }
    if let Some(opener) = send.opener {
        if opener.trim().is_empty() {
            return Err(ConfigError::EmptyOpener);
        }
        config.send.opener = Some(opener.trim().to_string());
    }

    let delays = [
        ("startup_secs", send.startup_secs, &mut config.send.startup_secs),
        ("between_secs", send.between_secs, &mut config.send.between_secs),
        (
            "after_failure_secs",
            send.after_failure_secs,
            &mut config.send.after_failure_secs,
        ),
        (
            "final_settle_secs",
            send.final_settle_secs,
            &mut config.send.final_settle_secs,
        ),
    ];
    for (field, value, slot) in delays {
        if let Some(value) = value {
            if value > MAX_DELAY_SECS {
                return Err(ConfigError::InvalidDelay { field, value });
            }
            *slot = value;
        }
    }

    Ok(config)
}
