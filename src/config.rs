//! Connection settings resolution.
//!
//! Precedence: `--connect "user/password@dsn"` override, then the
//! `ORAQ_USER`/`ORAQ_PASSWORD`/`ORAQ_DSN` environment (a `.env` file is
//! loaded at startup), then the saved profile at `~/.oraq/connection.json`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const ENV_USER: &str = "ORAQ_USER";
pub const ENV_PASSWORD: &str = "ORAQ_PASSWORD";
pub const ENV_DSN: &str = "ORAQ_DSN";
pub const ENV_SQLPLUS: &str = "ORAQ_SQLPLUS";

const PROFILE_FILE: &str = "connection.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionSettings {
    pub user: String,
    pub password: String,
    /// Data source name: `host:port/service_name` or a TNS alias.
    pub dsn: String,
    #[serde(default = "default_sqlplus_path")]
    pub sqlplus_path: String,
}

fn default_sqlplus_path() -> String {
    "sqlplus".to_string()
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("invalid connect string '{0}'; expected 'user/password@dsn'")]
    BadConnectString(String),
    #[error("failed to read connection profile {path}: {reason}")]
    Profile { path: String, reason: String },
    #[error(
        "no connection settings found; pass --connect, set ORAQ_USER/ORAQ_PASSWORD/ORAQ_DSN, or create ~/.oraq/connection.json"
    )]
    Missing,
}

static CONNECT_STRING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^/]+)/([^@]+)@(.+)$").expect("connect string regex"));

/// Parses a SQL*Plus-style `user/password@dsn` string.
pub fn parse_connect_string(raw: &str) -> Result<ConnectionSettings, SettingsError> {
    let caps = CONNECT_STRING_RE
        .captures(raw.trim())
        .ok_or_else(|| SettingsError::BadConnectString(raw.trim().to_string()))?;
    let settings = ConnectionSettings {
        user: caps[1].to_string(),
        password: caps[2].to_string(),
        dsn: caps[3].to_string(),
        sqlplus_path: default_sqlplus_path(),
    };
    log::info!(
        "parsed connect string: user='{}', dsn='{}'",
        settings.user,
        settings.dsn
    );
    Ok(settings)
}

fn profile_path() -> PathBuf {
    if let Some(mut home) = dirs::home_dir() {
        home.push(".oraq");
        home.push(PROFILE_FILE);
        home
    } else {
        PathBuf::from(PROFILE_FILE)
    }
}

fn load_profile() -> Result<Option<ConnectionSettings>, SettingsError> {
    let path = profile_path();
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path).map_err(|e| SettingsError::Profile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let settings = serde_json::from_str(&content).map_err(|e| SettingsError::Profile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    log::info!("loaded connection profile from {}", path.display());
    Ok(Some(settings))
}

fn from_env() -> Option<ConnectionSettings> {
    let user = std::env::var(ENV_USER).ok()?;
    let password = std::env::var(ENV_PASSWORD).ok()?;
    let dsn = std::env::var(ENV_DSN).ok()?;
    Some(ConnectionSettings {
        user,
        password,
        dsn,
        sqlplus_path: default_sqlplus_path(),
    })
}

/// Resolves connection settings from CLI override, environment, or profile.
pub fn resolve(
    connect: Option<&str>,
    sqlplus_path: Option<&str>,
) -> Result<ConnectionSettings, SettingsError> {
    let mut settings = if let Some(raw) = connect {
        let parsed = parse_connect_string(raw)?;
        log::info!("using connection details from --connect");
        parsed
    } else if let Some(env_settings) = from_env() {
        log::info!("using connection details from environment");
        env_settings
    } else if let Some(profile) = load_profile()? {
        profile
    } else {
        return Err(SettingsError::Missing);
    };

    if let Some(path) = sqlplus_path {
        settings.sqlplus_path = path.to_string();
    } else if let Ok(path) = std::env::var(ENV_SQLPLUS) {
        settings.sqlplus_path = path;
    }
    Ok(settings)
}
