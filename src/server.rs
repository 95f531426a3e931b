use std::{net::SocketAddr, str::FromStr};

use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::{Error, Res, api, info, state::AppState};

/// Routes of the HTTP front door.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/login/spotify", get(api::login_spotify))
        .route("/login/apple-music", get(api::login_apple_music))
        .route("/callback/spotify", get(api::spotify_callback))
        .route("/transfer", post(api::transfer_playlist))
        .layer(Extension(state))
        .layer(CorsLayer::permissive())
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn start_api_server(state: AppState) -> Res<()> {
    let addr = SocketAddr::from_str(&state.config.server_address).map_err(|e| {
        Error::config(format!(
            "SERVER_ADDRESS {:?} is not a socket address: {}",
            state.config.server_address, e
        ))
    })?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; keep serving.
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
