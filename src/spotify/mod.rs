//! # Spotify Integration Module
//!
//! This module wraps the two Spotify services the transfer needs: the
//! accounts service for OAuth tokens and the Web API for reading playlists.
//! It never writes to Spotify.
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Token provider for the accounts service:
//! - **Authorization URL**: Builds the redirect for the authorization-code flow
//! - **Code Exchange**: Trades the callback code for a user token
//! - **Client Credentials**: Application token for unattended runs
//! - **Refresh**: Renews a user token from a configured refresh token
//!
//! Token requests authenticate with HTTP Basic client credentials. A non-200
//! answer becomes [`crate::Error::UpstreamAuth`].
//!
//! ### Playlist Module
//!
//! [`playlists`] - Locates the "Discover Weekly" playlist and returns its
//! tracks with their metadata untouched.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Code exchange, client credentials and refresh grants
//! - `GET /me/playlists` - The current user's playlists (first page)
//! - `GET /playlists/{id}/tracks` - Tracks of one playlist (first page)
//!
//! ## Error Handling
//!
//! Nothing here retries. Rate limiting (429) surfaces as
//! [`crate::Error::Upstream`] like any other unexpected status.

pub mod auth;
pub mod playlists;

pub use auth::SpotifyAuth;
pub use playlists::{DISCOVER_WEEKLY, SpotifyClient};
