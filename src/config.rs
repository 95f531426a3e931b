//! Configuration management for the Discover Weekly transfer service.
//!
//! Values come from environment variables and optional `.env` files. They are
//! read exactly once at startup into a [`Config`] which is then passed by
//! reference to every component. Nothing else in the crate touches the
//! process environment.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{Error, Res};

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:5000";
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:5000/callback/spotify";
pub const DEFAULT_SCOPE: &str = "playlist-read-private";
pub const DEFAULT_SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_APPLE_MUSIC_API_URL: &str = "https://api.music.apple.com";
pub const DEFAULT_STOREFRONT: &str = "us";
pub const DEFAULT_PLAYLIST_NAME: &str = "Discover Weekly (Spotify)";
pub const DEFAULT_TRANSFER_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from `.env` files.
///
/// Looks in the working directory first and then in the platform-specific
/// local data directory under `dwsync/.env`. Both files are optional; values
/// already present in the environment are never overwritten.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/dwsync/.env`
/// - macOS: `~/Library/Application Support/dwsync/.env`
/// - Windows: `%LOCALAPPDATA%/dwsync/.env`
///
/// # Errors
///
/// Fails if the data directory cannot be created or if either file exists
/// but cannot be parsed.
pub async fn load_env() -> Res<()> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("dwsync/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    load_env_files(&[Path::new(".env"), path.as_path()])
}

/// Loads each `.env` file in order, skipping the ones that do not exist.
pub fn load_env_files(paths: &[&Path]) -> Res<()> {
    for path in paths {
        match dotenv::from_path(path) {
            Ok(()) => {}
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(Error::config(format!("cannot read {}: {}", path.display(), e)));
            }
        }
    }
    Ok(())
}

/// Runtime configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to (`SERVER_ADDRESS`).
    pub server_address: String,

    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    /// Must match the redirect URI registered with the Spotify application.
    pub spotify_redirect_uri: String,
    pub spotify_scope: String,
    pub spotify_auth_url: String,
    pub spotify_token_url: String,
    pub spotify_api_url: String,
    /// Long-lived user refresh token for scheduled runs. Without it the
    /// scheduler falls back to a client-credentials token.
    pub spotify_refresh_token: Option<String>,

    pub apple_music_key_id: String,
    /// PKCS#8 PEM, possibly with literal `\n` sequences instead of newlines.
    pub apple_music_private_key: String,
    pub apple_music_team_id: String,
    pub apple_music_api_url: String,
    pub apple_music_storefront: String,
    /// Music user token required by the library endpoints.
    pub apple_music_user_token: Option<String>,
    /// Name of the destination library playlist.
    pub apple_music_playlist_name: String,

    pub scheduler_enabled: bool,
    pub transfer_interval: Duration,
    /// Applied to every outbound HTTP request.
    pub http_timeout: Duration,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] naming the first missing required
    /// variable or the first value that cannot be parsed.
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as missing.
    pub fn from_lookup<F>(lookup: F) -> Res<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            get(key).ok_or_else(|| Error::config(format!("{} must be set", key)))
        };
        let or_default = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());
        let secs = |key: &str, default: u64| -> Res<Duration> {
            match get(key) {
                Some(raw) => raw
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|s| *s > 0)
                    .map(Duration::from_secs)
                    .ok_or_else(|| {
                        Error::config(format!("{} must be a positive number of seconds, got {:?}", key, raw))
                    }),
                None => Ok(Duration::from_secs(default)),
            }
        };

        let scheduler_enabled = match get("SCHEDULER_ENABLED") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                Error::config(format!("SCHEDULER_ENABLED must be true or false, got {:?}", raw))
            })?,
            None => true,
        };

        Ok(Config {
            server_address: or_default("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            spotify_client_id: required("SPOTIFY_CLIENT_ID")?,
            spotify_client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            spotify_redirect_uri: or_default("SPOTIFY_REDIRECT_URI", DEFAULT_REDIRECT_URI),
            spotify_scope: or_default("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE),
            spotify_auth_url: or_default("SPOTIFY_API_AUTH_URL", DEFAULT_SPOTIFY_AUTH_URL),
            spotify_token_url: or_default("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_TOKEN_URL),
            spotify_api_url: trim_slash(or_default("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)),
            spotify_refresh_token: get("SPOTIFY_REFRESH_TOKEN"),
            apple_music_key_id: required("APPLE_MUSIC_KEY_ID")?,
            apple_music_private_key: required("APPLE_MUSIC_PRIVATE_KEY")?,
            apple_music_team_id: required("APPLE_MUSIC_TEAM_ID")?,
            apple_music_api_url: trim_slash(or_default(
                "APPLE_MUSIC_API_URL",
                DEFAULT_APPLE_MUSIC_API_URL,
            )),
            apple_music_storefront: or_default("APPLE_MUSIC_STOREFRONT", DEFAULT_STOREFRONT),
            apple_music_user_token: get("APPLE_MUSIC_USER_TOKEN"),
            apple_music_playlist_name: or_default("APPLE_MUSIC_PLAYLIST_NAME", DEFAULT_PLAYLIST_NAME),
            scheduler_enabled,
            transfer_interval: secs("TRANSFER_INTERVAL_SECS", DEFAULT_TRANSFER_INTERVAL_SECS)?,
            http_timeout: secs("HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn trim_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
