use std::sync::Arc;

use reqwest::Client;

use crate::{
    Res,
    apple_music::{AppleMusicClient, AppleMusicLibrary},
    config::Config,
    spotify::{SpotifyAuth, SpotifyClient},
    utils,
};

/// Everything a request handler or scheduled job needs. Immutable after
/// startup and cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub spotify_auth: SpotifyAuth,
    pub spotify: SpotifyClient,
    pub library: Arc<dyn AppleMusicLibrary>,
}

impl AppState {
    /// Wires the production components around one shared HTTP client.
    pub fn new(config: Config) -> Res<Self> {
        let config = Arc::new(config);
        let client = utils::http_client(config.http_timeout)?;
        let library = Arc::new(AppleMusicClient::new(Arc::clone(&config), client.clone()));
        Ok(Self::assemble(config, client, library))
    }

    /// Same as [`AppState::new`] with a caller-supplied music library.
    pub fn with_library(config: Arc<Config>, library: Arc<dyn AppleMusicLibrary>) -> Res<Self> {
        let client = utils::http_client(config.http_timeout)?;
        Ok(Self::assemble(config, client, library))
    }

    fn assemble(config: Arc<Config>, client: Client, library: Arc<dyn AppleMusicLibrary>) -> Self {
        Self {
            spotify_auth: SpotifyAuth::new(Arc::clone(&config), client.clone()),
            spotify: SpotifyClient::new(config.spotify_api_url.clone(), client),
            library,
            config,
        }
    }
}
