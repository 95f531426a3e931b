use std::{collections::HashSet, sync::Arc};

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    Error, Res,
    apple_music::AppleMusicLibrary,
    config::Config,
    info,
    types::{
        AddTracksToPlaylistRequest, CatalogSearchResponse, CatalogSong,
        CreateLibraryPlaylistAttributes, CreateLibraryPlaylistRequest, LibraryPlaylist,
        LibrarySong, PlaylistRef, ResourceList, SongResource, Track,
    },
    utils, warning,
};

/// Page size requested from library collections; Apple caps it at 100.
const PAGE_LIMIT: usize = 100;

/// HTTP-backed [`AppleMusicLibrary`] for the Apple Music API.
#[derive(Clone)]
pub struct AppleMusicClient {
    config: Arc<Config>,
    client: Client,
}

impl AppleMusicClient {
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self { config, client }
    }

    /// Resolves an API path. `next` links are usually relative, but absolute
    /// ones are used as they are.
    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.config.apple_music_api_url, path)
        }
    }

    /// Adds the developer token and, when configured, the music user token.
    fn authorize(&self, request: RequestBuilder, token: &str) -> RequestBuilder {
        let request = request.bearer_auth(token);
        match &self.config.apple_music_user_token {
            Some(user_token) => request.header("Music-User-Token", user_token),
            None => request,
        }
    }

    /// Fetches one page of a library collection. `path` is either the first
    /// page or the `next` link of the previous one.
    ///
    /// Empty collections answer 404 and come back as an empty page.
    async fn library_page<T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        endpoint: &str,
    ) -> Res<ResourceList<T>> {
        let response = self.authorize(self.client.get(self.url(path)), token).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(ResourceList {
                data: Vec::new(),
                next: None,
            });
        }

        let response = utils::ensure_success(response, endpoint).await?;
        Ok(response.json::<ResourceList<T>>().await?)
    }

    /// Walks the library playlists page by page until one has the configured name.
    async fn find_playlist(&self, token: &str) -> Res<Option<PlaylistRef>> {
        let name = &self.config.apple_music_playlist_name;
        let mut next = Some(format!("/v1/me/library/playlists?limit={}", PAGE_LIMIT));

        while let Some(path) = next.take() {
            let page = self
                .library_page::<LibraryPlaylist>(token, &path, "GET /v1/me/library/playlists")
                .await?;
            if let Some(found) = page
                .data
                .into_iter()
                .find(|p| p.attributes.as_ref().is_some_and(|a| &a.name == name))
            {
                return Ok(Some(PlaylistRef { id: found.id }));
            }
            next = page.next;
        }
        Ok(None)
    }

    async fn create_playlist(&self, token: &str) -> Res<PlaylistRef> {
        let body = CreateLibraryPlaylistRequest {
            attributes: CreateLibraryPlaylistAttributes {
                name: self.config.apple_music_playlist_name.clone(),
                description: "Tracks from Spotify Discover Weekly".to_string(),
            },
        };

        let request = self
            .client
            .post(self.url("/v1/me/library/playlists"))
            .json(&body);
        let response = self.authorize(request, token).send().await?;
        let response = utils::ensure_success(response, "POST /v1/me/library/playlists").await?;
        let created = response.json::<ResourceList<LibraryPlaylist>>().await?;

        match created.data.into_iter().next() {
            Some(p) => Ok(PlaylistRef { id: p.id }),
            None => Err(Error::Upstream {
                endpoint: "POST /v1/me/library/playlists".to_string(),
                status: 201,
                body: "response did not contain the created playlist".to_string(),
            }),
        }
    }

    /// Catalog ids of every song already in a library playlist, across all pages.
    async fn playlist_catalog_ids(&self, token: &str, playlist: &PlaylistRef) -> Res<HashSet<String>> {
        let mut ids = HashSet::new();
        let mut next = Some(format!(
            "/v1/me/library/playlists/{}/tracks?limit={}",
            playlist.id, PAGE_LIMIT
        ));

        while let Some(path) = next.take() {
            let page = self
                .library_page::<LibrarySong>(token, &path, "GET /v1/me/library/playlists/{id}/tracks")
                .await?;
            ids.extend(page.data.iter().filter_map(|s| s.catalog_id().map(str::to_string)));
            next = page.next;
        }
        Ok(ids)
    }

    /// Finds the catalog song for a Spotify track.
    async fn match_track(&self, token: &str, track: &Track) -> Res<Option<String>> {
        let storefront = &self.config.apple_music_storefront;

        if let Some(isrc) = track.isrc() {
            let request = self
                .client
                .get(self.url(&format!("/v1/catalog/{}/songs", storefront)))
                .query(&[("filter[isrc]", isrc)]);
            let response = self.authorize(request, token).send().await?;
            let response = utils::ensure_success(response, "GET /v1/catalog/{storefront}/songs").await?;
            let songs = response.json::<ResourceList<CatalogSong>>().await?;
            if let Some(song) = songs.data.into_iter().next() {
                return Ok(Some(song.id));
            }
        }

        let term = track.search_term();
        let request = self
            .client
            .get(self.url(&format!("/v1/catalog/{}/search", storefront)))
            .query(&[("types", "songs"), ("limit", "1"), ("term", term.as_str())]);
        let response = self.authorize(request, token).send().await?;
        let response = utils::ensure_success(response, "GET /v1/catalog/{storefront}/search").await?;
        let found = response.json::<CatalogSearchResponse>().await?;

        Ok(found
            .results
            .songs
            .and_then(|songs| songs.data.into_iter().next())
            .map(|song| song.id))
    }
}

#[async_trait]
impl AppleMusicLibrary for AppleMusicClient {
    async fn ensure_playlist(&self, token: &str) -> Res<PlaylistRef> {
        if let Some(existing) = self.find_playlist(token).await? {
            return Ok(existing);
        }

        let created = self.create_playlist(token).await?;
        info!(
            "Created Apple Music playlist {} ({})",
            self.config.apple_music_playlist_name, created.id
        );
        Ok(created)
    }

    async fn add_tracks(&self, token: &str, playlist: &PlaylistRef, tracks: &[Track]) -> Res<bool> {
        if tracks.is_empty() {
            return Ok(true);
        }

        let present = self.playlist_catalog_ids(token, playlist).await?;

        let mut matched = 0usize;
        let mut missing: Vec<SongResource> = Vec::new();
        for track in tracks {
            match self.match_track(token, track).await? {
                Some(id) => {
                    matched += 1;
                    if !present.contains(&id) && !missing.iter().any(|s| s.id == id) {
                        missing.push(SongResource {
                            id,
                            kind: "songs".to_string(),
                        });
                    }
                }
                None => warning!("No Apple Music match for {}", track.search_term()),
            }
        }

        if matched == 0 {
            warning!("None of the {} tracks exist in the Apple Music catalog", tracks.len());
            return Ok(false);
        }

        if missing.is_empty() {
            info!("Playlist {} is already up to date", playlist.id);
            return Ok(true);
        }

        let added = missing.len();
        let request = self
            .client
            .post(self.url(&format!("/v1/me/library/playlists/{}/tracks", playlist.id)))
            .json(&AddTracksToPlaylistRequest { data: missing });
        let response = self.authorize(request, token).send().await?;
        utils::ensure_success(response, "POST /v1/me/library/playlists/{id}/tracks").await?;

        info!("Added {} tracks to playlist {}", added, playlist.id);
        Ok(true)
    }
}
