use axum::{Extension, extract::rejection::JsonRejection, response::Json};

use crate::{
    Error, Res,
    state::AppState,
    success, transfer,
    types::{MessageResponse, TransferRequest},
};

pub async fn transfer_playlist(
    Extension(state): Extension<AppState>,
    payload: Result<Json<TransferRequest>, JsonRejection>,
) -> Res<Json<MessageResponse>> {
    let Json(request) = payload.map_err(|e| Error::InvalidBody(e.body_text()))?;

    let report = transfer::transfer(
        &state.spotify,
        state.library.as_ref(),
        &request.spotify_token,
        &request.apple_music_token,
    )
    .await?;

    success!(
        "Transferred {} tracks into playlist {}",
        report.tracks, report.playlist.id
    );
    Ok(Json(MessageResponse {
        message: "Playlist transferred successfully".to_string(),
    }))
}
