use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use crate::{Error, Res, config::Config, types::DeveloperTokenClaims, utils};

/// Lifetime of a developer token in seconds, roughly six months. This is the
/// longest validity Apple accepts.
pub const DEVELOPER_TOKEN_TTL_SECS: i64 = 15_777_000;

/// Mints an Apple Music developer token valid from now.
pub fn mint_developer_token(config: &Config) -> Res<String> {
    mint_developer_token_at(config, Utc::now().timestamp())
}

/// Mints an Apple Music developer token issued at `now` (Unix seconds).
///
/// The token is an ES256 JWT with the configured key id in its header and
/// the team id as issuer. It expires exactly [`DEVELOPER_TOKEN_TTL_SECS`]
/// after `now`.
///
/// # Errors
///
/// Returns [`Error::Configuration`] if the key id, team id or private key is
/// empty, or if the private key is not a PKCS#8 EC PEM.
pub fn mint_developer_token_at(config: &Config, now: i64) -> Res<String> {
    if config.apple_music_key_id.trim().is_empty() {
        return Err(Error::config("APPLE_MUSIC_KEY_ID must be set"));
    }
    if config.apple_music_team_id.trim().is_empty() {
        return Err(Error::config("APPLE_MUSIC_TEAM_ID must be set"));
    }
    if config.apple_music_private_key.trim().is_empty() {
        return Err(Error::config("APPLE_MUSIC_PRIVATE_KEY must be set"));
    }

    let pem = utils::unescape_pem(&config.apple_music_private_key);
    let key = EncodingKey::from_ec_pem(pem.as_bytes())
        .map_err(|e| Error::config(format!("APPLE_MUSIC_PRIVATE_KEY is not a valid EC key: {}", e)))?;

    let mut header = Header::new(Algorithm::ES256);
    header.kid = Some(config.apple_music_key_id.clone());

    let claims = DeveloperTokenClaims {
        iss: config.apple_music_team_id.clone(),
        iat: now,
        exp: now + DEVELOPER_TOKEN_TTL_SECS,
    };

    encode(&header, &claims, &key)
        .map_err(|e| Error::config(format!("cannot sign developer token: {}", e)))
}
