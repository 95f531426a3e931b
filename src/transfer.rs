//! One transfer of Discover Weekly into Apple Music.
//!
//! The steps run strictly in order and nothing is rolled back: a playlist
//! created by `ensure_playlist` stays even if adding tracks fails.

use crate::{
    Error, Res,
    apple_music::AppleMusicLibrary,
    spotify::SpotifyClient,
    types::PlaylistRef,
};

/// Outcome of a successful transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReport {
    pub playlist: PlaylistRef,
    pub tracks: usize,
}

/// Copies the caller's Discover Weekly tracks into the destination playlist.
///
/// Errors from reading Spotify ([`Error::NotFound`], [`Error::Upstream`],
/// [`Error::Http`]) are returned unchanged. Any failure on the Apple Music
/// side, including `add_tracks` reporting `false`, becomes
/// [`Error::TransferFailed`].
pub async fn transfer(
    spotify: &SpotifyClient,
    library: &dyn AppleMusicLibrary,
    spotify_token: &str,
    apple_music_token: &str,
) -> Res<TransferReport> {
    let tracks = spotify.fetch_discover_weekly_tracks(spotify_token).await?;

    let playlist = library
        .ensure_playlist(apple_music_token)
        .await
        .map_err(|e| Error::TransferFailed(format!("cannot prepare destination playlist: {}", e)))?;

    match library.add_tracks(apple_music_token, &playlist, &tracks).await {
        Ok(true) => Ok(TransferReport {
            playlist,
            tracks: tracks.len(),
        }),
        Ok(false) => Err(Error::TransferFailed(format!(
            "tracks were not added to playlist {}",
            playlist.id
        ))),
        Err(e) => Err(Error::TransferFailed(format!(
            "cannot add tracks to playlist {}: {}",
            playlist.id, e
        ))),
    }
}
