use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /transfer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRequest {
    pub spotify_token: String,
    pub apple_music_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUrlResponse {
    pub auth_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
}

/// Claims of an Apple Music developer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeveloperTokenClaims {
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

// Spotify

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    /// Spotify occasionally lists `null` in place of a playlist.
    pub items: Vec<Option<Playlist>>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub tracks: PlaylistTracksRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksRef {
    pub href: String,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPlaylistTracksResponse {
    pub items: Vec<PlaylistItem>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// `null` for local files and tracks no longer available.
    pub track: Option<Track>,
}

/// A Spotify track. Fields not modelled here are kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalIds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isrc: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Track {
    pub fn isrc(&self) -> Option<&str> {
        self.external_ids.as_ref().and_then(|ids| ids.isrc.as_deref())
    }

    /// Search term used when a track has no ISRC.
    pub fn search_term(&self) -> String {
        match self.artists.first() {
            Some(artist) => format!("{} {}", self.name, artist.name),
            None => self.name.clone(),
        }
    }
}

// Apple Music

/// Reference to a playlist in the user's Apple Music library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRef {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceList<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryPlaylist {
    pub id: String,
    #[serde(default)]
    pub attributes: Option<LibraryPlaylistAttributes>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryPlaylistAttributes {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLibraryPlaylistRequest {
    pub attributes: CreateLibraryPlaylistAttributes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLibraryPlaylistAttributes {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibrarySong {
    pub id: String,
    #[serde(default)]
    pub attributes: Option<LibrarySongAttributes>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibrarySongAttributes {
    #[serde(rename = "playParams", default)]
    pub play_params: Option<PlayParams>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayParams {
    #[serde(rename = "catalogId", default)]
    pub catalog_id: Option<String>,
}

impl LibrarySong {
    pub fn catalog_id(&self) -> Option<&str> {
        self.attributes
            .as_ref()
            .and_then(|a| a.play_params.as_ref())
            .and_then(|p| p.catalog_id.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSong {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSearchResponse {
    pub results: CatalogSearchResults,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSearchResults {
    #[serde(default)]
    pub songs: Option<ResourceList<CatalogSong>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksToPlaylistRequest {
    pub data: Vec<SongResource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongResource {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}
