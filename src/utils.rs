use std::time::Duration;

use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, Response};

use crate::{Error, Res};

/// Builds the shared HTTP client with an explicit request timeout.
pub fn http_client(timeout: Duration) -> Res<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(Error::from)
}

/// Value of an HTTP `Authorization: Basic` header for client credentials.
pub fn basic_credentials(client_id: &str, client_secret: &str) -> String {
    let encoded = STANDARD.encode(format!("{}:{}", client_id, client_secret));
    format!("Basic {}", encoded)
}

/// Restores newlines in a PEM that was stored on a single line.
pub fn unescape_pem(pem: &str) -> String {
    pem.replace("\\n", "\n")
}

/// Passes a 2xx response through and turns anything else into
/// [`Error::Upstream`] carrying the status and body.
pub async fn ensure_success(response: Response, endpoint: &str) -> Res<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Upstream {
        endpoint: endpoint.to_string(),
        status,
        body,
    })
}
