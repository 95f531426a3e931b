//! # API Module
//!
//! HTTP handlers of the transfer service. Each handler receives the shared
//! [`crate::state::AppState`] through an axum `Extension` and returns
//! `Res<Json<_>>`; the [`crate::Error`] side is turned into a status code and
//! a `{"detail": …}` body by the `IntoResponse` implementation in `error`.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`login_spotify`] - `GET /login/spotify`, returns the Spotify authorization URL
//! - [`spotify_callback`] - `GET /callback/spotify?code=…`, exchanges the code and
//!   returns Spotify's token JSON
//! - [`login_apple_music`] - `GET /login/apple-music`, returns a developer token
//!
//! ### Transfer
//!
//! - [`transfer_playlist`] - `POST /transfer`, copies Discover Weekly into
//!   Apple Music with the caller's tokens
//!
//! ### Monitoring
//!
//! - [`health`] - `GET /health`
//!
//! ## Status Codes
//!
//! | Error | Status |
//! |---|---|
//! | missing `code`, rejected token exchange | 400 |
//! | no Discover Weekly playlist | 404 |
//! | configuration, upstream and transfer failures | 500 |
//!
//! Stack traces and upstream bodies are logged, never returned.

mod callback;
mod error;
mod health;
mod login;
mod transfer;

pub use callback::spotify_callback;
pub use health::health;
pub use login::{login_apple_music, login_spotify};
pub use transfer::transfer_playlist;
