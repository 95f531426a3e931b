use reqwest::Client;

use crate::{
    Error, Res, info,
    types::{GetPlaylistTracksResponse, GetUserPlaylistsResponse, Track},
    utils, warning,
};

pub const DISCOVER_WEEKLY: &str = "Discover Weekly";

/// Read-only client for the Spotify Web API.
#[derive(Clone)]
pub struct SpotifyClient {
    api_url: String,
    client: Client,
}

impl SpotifyClient {
    pub fn new(api_url: impl Into<String>, client: Client) -> Self {
        Self {
            api_url: api_url.into(),
            client,
        }
    }

    /// Retrieves the tracks of the caller's "Discover Weekly" playlist.
    ///
    /// Lists the current user's playlists, picks the first one named exactly
    /// `Discover Weekly` (case-sensitive) and follows its `tracks.href`.
    /// Playlist items without a track object (local files, tracks that are no
    /// longer available) are skipped. The Spotify side is never modified.
    ///
    /// # Pagination
    ///
    /// Only the first page of the playlist listing (up to 50 playlists) and
    /// of the track listing is read. A Discover Weekly playlist always fits
    /// on one page of tracks; a user following more than 50 playlists may
    /// get a false [`Error::NotFound`].
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if no playlist matches; the tracks endpoint is not called
    /// - [`Error::Upstream`] if either call answers with a non-2xx status
    /// - [`Error::Http`] on network failures or malformed JSON
    pub async fn fetch_discover_weekly_tracks(&self, token: &str) -> Res<Vec<Track>> {
        let playlists_url = format!("{uri}/me/playlists?limit=50", uri = self.api_url);

        let response = self
            .client
            .get(&playlists_url)
            .bearer_auth(token)
            .send()
            .await?;
        let response = utils::ensure_success(response, "GET /me/playlists").await?;
        let playlists = response.json::<GetUserPlaylistsResponse>().await?;

        if playlists.next.is_some() {
            warning!("Playlist listing has more pages; only the first page is searched");
        }

        let Some(discover_weekly) = playlists
            .items
            .into_iter()
            .flatten()
            .find(|p| p.name == DISCOVER_WEEKLY)
        else {
            return Err(Error::NotFound(format!("{} playlist not found", DISCOVER_WEEKLY)));
        };

        let response = self
            .client
            .get(&discover_weekly.tracks.href)
            .bearer_auth(token)
            .send()
            .await?;
        let response = utils::ensure_success(response, "GET /playlists/{id}/tracks").await?;
        let tracks = response.json::<GetPlaylistTracksResponse>().await?;

        let total = tracks.items.len();
        let tracks: Vec<Track> = tracks.items.into_iter().filter_map(|i| i.track).collect();
        if tracks.len() < total {
            info!(
                "Skipped {} unavailable items in {}",
                total - tracks.len(),
                DISCOVER_WEEKLY
            );
        }

        Ok(tracks)
    }
}
