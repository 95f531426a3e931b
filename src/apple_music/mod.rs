//! # Apple Music Module
//!
//! Destination side of a transfer. Playlist handling is expressed as the
//! [`AppleMusicLibrary`] capability so the orchestrator does not depend on a
//! concrete backend:
//!
//! - [`AppleMusicClient`] talks to the Apple Music API.
//! - Tests plug in in-memory implementations of the same trait.
//!
//! [`token`] mints the ES256 developer tokens every Apple Music request is
//! authorized with.
//!
//! ## Track Matching
//!
//! Spotify and Apple Music share no track identifiers. Tracks are matched
//! through their ISRC when Spotify reports one and otherwise through a
//! catalog search for `"{title} {first artist}"`, taking the top hit.
//! Tracks without any match are logged and left out.

use async_trait::async_trait;

use crate::{
    Res,
    types::{PlaylistRef, Track},
};

mod client;
pub mod token;

pub use client::AppleMusicClient;
pub use token::{DEVELOPER_TOKEN_TTL_SECS, mint_developer_token, mint_developer_token_at};

/// Playlist operations the transfer needs from a music library.
#[async_trait]
pub trait AppleMusicLibrary: Send + Sync {
    /// Returns the destination playlist, creating it if it does not exist.
    /// Calling it repeatedly yields the same playlist.
    async fn ensure_playlist(&self, token: &str) -> Res<PlaylistRef>;

    /// Makes sure every given track is in `playlist`. Tracks already present
    /// are not added twice. Returns `false` if the library refused the
    /// tracks without reporting an error.
    async fn add_tracks(&self, token: &str, playlist: &PlaylistRef, tracks: &[Track])
    -> Res<bool>;
}
