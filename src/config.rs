// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Default session lifetime (30 days).
const DEFAULT_SESSION_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the local key-value store files
    pub data_dir: PathBuf,
    /// Base URL of the remote API
    pub api_base_url: String,
    /// Key used to sign session tokens (raw bytes)
    pub session_signing_key: Vec<u8>,
    /// Lifetime of an issued session token
    pub session_ttl_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let session_ttl_secs = match env::var("FITJOURNEY_SESSION_TTL_SECS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("FITJOURNEY_SESSION_TTL_SECS"))?,
            Err(_) => DEFAULT_SESSION_TTL_SECS,
        };

        Ok(Self {
            data_dir: env::var("FITJOURNEY_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            api_base_url: env::var("FITJOURNEY_API_BASE_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "https://api.fitjourney.com".to_string()),
            session_signing_key: env::var("FITJOURNEY_SESSION_KEY")
                .map_err(|_| ConfigError::Missing("FITJOURNEY_SESSION_KEY"))?
                .into_bytes(),
            session_ttl_secs,
        })
    }

    /// Config for tests only.
    pub fn test_default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            api_base_url: "http://localhost:8080".to_string(),
            session_signing_key: b"test_session_key_32_bytes_long!!".to_vec(),
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
