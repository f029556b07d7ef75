//! Configuration management for tracknotes.
//!
//! Values come from environment variables, optionally seeded from `.env`
//! files. Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (where applicable)
//!
//! Accessors never panic. Missing credentials are reported by the client when
//! it first needs a token; every other value has a default.

use std::{env, path::PathBuf, time::Duration};

use crate::{spotify::ClientOptions, types::Credentials};

pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";

/// Loads environment variables from `.env` files.
///
/// Reads `tracknotes/.env` from the platform-specific local data directory
/// and then `.env` from the working directory. Variables that are already set
/// are never overwritten, and missing files are skipped.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/tracknotes/.env`
/// - macOS: `~/Library/Application Support/tracknotes/.env`
/// - Windows: `%LOCALAPPDATA%/tracknotes/.env`
///
/// # Errors
///
/// Fails if the data directory cannot be created or an existing `.env` file
/// cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tracknotes/.env");
    path
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Returns `SPOTIFY_CLIENT_ID`, if set.
pub fn spotify_client_id() -> Option<String> {
    non_empty("SPOTIFY_CLIENT_ID")
}

/// Returns `SPOTIFY_CLIENT_SECRET`, if set.
///
/// The secret should never end up in logs.
pub fn spotify_client_secret() -> Option<String> {
    non_empty("SPOTIFY_CLIENT_SECRET")
}

pub fn credentials() -> Credentials {
    Credentials {
        client_id: spotify_client_id(),
        client_secret: spotify_client_secret(),
    }
}

/// Returns the token endpoint, e.g. `https://accounts.spotify.com/api/token`.
pub fn spotify_apitoken_url() -> String {
    non_empty("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the Web API base URL without a version segment,
/// e.g. `https://api.spotify.com`.
pub fn spotify_apiurl() -> String {
    non_empty("SPOTIFY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Timeout applied to every outbound request.
///
/// Unparsable or zero values fall back to the default.
pub fn request_timeout() -> Duration {
    let secs = non_empty("SPOTIFY_REQUEST_TIMEOUT_SECS")
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Bind address for the HTTP surface, e.g. `127.0.0.1:5000`.
pub fn server_addr() -> String {
    non_empty("SERVER_ADDRESS").unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string())
}

pub fn client_options() -> ClientOptions {
    ClientOptions {
        token_url: spotify_apitoken_url(),
        api_url: spotify_apiurl(),
        timeout: request_timeout(),
    }
}
