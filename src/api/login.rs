use axum::{Extension, response::Json};

use crate::{
    Res, apple_music, info,
    state::AppState,
    types::{AccessTokenResponse, AuthUrlResponse},
};

/// Returns the Spotify authorization URL the browser should navigate to.
pub async fn login_spotify(Extension(state): Extension<AppState>) -> Res<Json<AuthUrlResponse>> {
    let auth_url = state.spotify_auth.authorization_url()?;
    info!("Generated Spotify auth URL");
    Ok(Json(AuthUrlResponse { auth_url }))
}

/// Hands out a freshly minted Apple Music developer token.
///
/// There is no user sign-in on the Apple side; the browser uses this token
/// to authorize its own MusicKit session and passes it back on transfer.
pub async fn login_apple_music(
    Extension(state): Extension<AppState>,
) -> Res<Json<AccessTokenResponse>> {
    let access_token = apple_music::mint_developer_token(&state.config)?;
    info!("Issued Apple Music developer token");
    Ok(Json(AccessTokenResponse { access_token }))
}
