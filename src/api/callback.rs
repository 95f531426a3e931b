use std::collections::HashMap;

use axum::{Extension, extract::Query, response::Json};
use serde_json::Value;

use crate::{Error, Res, state::AppState, success};

/// Completes the Spotify authorization-code flow.
///
/// Exchanges the `code` query parameter for a token and returns Spotify's
/// token JSON unchanged. A missing code or a rejected exchange answers 400.
pub async fn spotify_callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AppState>,
) -> Res<Json<Value>> {
    let Some(code) = params.get("code").filter(|c| !c.is_empty()) else {
        return Err(Error::MissingParameter("code"));
    };

    let token = state.spotify_auth.exchange_code_for_token(code).await?;
    success!("Obtained Spotify access token");
    Ok(Json(token))
}
