// Process configuration read from the environment.
//
// Responsibilities
// - Resolve the document database connection string, falling back to the local instance.
// - Place the generated schema file in the working directory.
// - Parse listener and explorer settings.
//
// Boundaries
// - Loading `.env` happens in the binary. This module only reads key/value pairs.

use axum::http::HeaderValue;
use std::ffi::OsString;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MONGODB_URI_VAR: &str = "MONGODB_URI";
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/transcription";
pub const SCHEMA_FILE_NAME: &str = "schema.gql";

const PLAYGROUND_VAR: &str = "GRAPHQL_PLAYGROUND";
const HOST_VAR: &str = "HOST";
const PORT_VAR: &str = "PORT";
const CORS_ORIGIN_VAR: &str = "CORS_ORIGIN";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("cannot determine working directory: {0}")]
    WorkingDirectory(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mongodb_uri: String,
    pub schema_file: PathBuf,
    pub playground: bool,
    pub listen_addr: SocketAddr,
    pub cors_origin: Option<HeaderValue>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let working_dir = std::env::current_dir()?;
        Self::from_os_lookup(|key| std::env::var_os(key), working_dir)
    }

    /// Resolves from raw OS values. A set value that is not valid UTF-8 is an error, never unset.
    pub fn from_os_lookup<F>(lookup: F, working_dir: impl AsRef<Path>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        Self::resolve(
            |key| match lookup(key) {
                Some(raw) => raw
                    .into_string()
                    .map(Some)
                    .map_err(|raw| ConfigError::InvalidValue {
                        key,
                        value: raw.to_string_lossy().into_owned(),
                        reason: "not valid UTF-8".to_string(),
                    }),
                None => Ok(None),
            },
            working_dir,
        )
    }

    pub fn from_lookup<F>(lookup: F, working_dir: impl AsRef<Path>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::resolve(|key| Ok(lookup(key)), working_dir)
    }

    fn resolve<F>(lookup: F, working_dir: impl AsRef<Path>) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<Option<String>, ConfigError>,
    {
        let playground = match lookup(PLAYGROUND_VAR)? {
            Some(value) => parse_bool(PLAYGROUND_VAR, value)?,
            None => true,
        };

        let host = lookup(HOST_VAR)?.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::InvalidValue {
                key: HOST_VAR,
                value: host.clone(),
                reason: e.to_string(),
            }
        })?;

        let port = match lookup(PORT_VAR)? {
            Some(value) => value.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                key: PORT_VAR,
                value: value.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let cors_origin = match lookup(CORS_ORIGIN_VAR)?.filter(|origin| !origin.is_empty()) {
            Some(origin) => Some(HeaderValue::from_str(&origin).map_err(|e| {
                ConfigError::InvalidValue {
                    key: CORS_ORIGIN_VAR,
                    value: origin.clone(),
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            mongodb_uri: resolve_mongodb_uri(lookup(MONGODB_URI_VAR)?),
            schema_file: working_dir.as_ref().join(SCHEMA_FILE_NAME),
            playground,
            listen_addr: SocketAddr::new(host, port),
            cors_origin,
        })
    }
}

/// An empty value counts as unset. Anything else is used verbatim.
pub fn resolve_mongodb_uri(value: Option<String>) -> String {
    match value {
        Some(uri) if !uri.is_empty() => uri,
        _ => DEFAULT_MONGODB_URI.to_string(),
    }
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value,
            reason: "expected true, false, 1 or 0".to_string(),
        }),
    }
}
