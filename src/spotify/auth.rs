use std::sync::Arc;

use reqwest::{Client, header::AUTHORIZATION};
use serde_json::Value;
use url::Url;

use crate::{Error, Res, config::Config, utils};

/// Token provider for the Spotify accounts service.
///
/// Holds the shared configuration and HTTP client; every call is a single
/// request against the token endpoint with no retry.
#[derive(Clone)]
pub struct SpotifyAuth {
    config: Arc<Config>,
    client: Client,
}

impl SpotifyAuth {
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self { config, client }
    }

    /// Builds the Spotify authorization URL the user is redirected to.
    ///
    /// The URL requests the configured scope, points back at the configured
    /// redirect URI and carries the fixed `state=spotify` marker that the
    /// browser client uses to recognise the callback. Query values are URL
    /// encoded. No I/O happens here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the configured authorization
    /// endpoint is not a valid URL.
    pub fn authorization_url(&self) -> Res<String> {
        let url = Url::parse_with_params(
            &self.config.spotify_auth_url,
            &[
                ("client_id", self.config.spotify_client_id.as_str()),
                ("response_type", "code"),
                ("redirect_uri", self.config.spotify_redirect_uri.as_str()),
                ("scope", self.config.spotify_scope.as_str()),
                ("state", "spotify"),
            ],
        )
        .map_err(|e| Error::config(format!("invalid SPOTIFY_API_AUTH_URL: {}", e)))?;

        Ok(url.to_string())
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// Authenticates with HTTP Basic client credentials and returns the token
    /// JSON exactly as Spotify sent it, so the browser client receives the
    /// access token, refresh token, scope and expiry unchanged.
    ///
    /// # Errors
    ///
    /// - [`Error::UpstreamAuth`] with Spotify's status and body on a non-200 answer
    /// - [`Error::Http`] on network failures or a body that is not JSON
    pub async fn exchange_code_for_token(&self, code: &str) -> Res<Value> {
        self.request_token(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.config.spotify_redirect_uri.as_str()),
        ])
        .await
    }

    /// Obtains an application token with the client-credentials grant.
    ///
    /// Used for scheduled runs where no user is present. Such a token cannot
    /// read private user data, which is why [`Self::refresh_access_token`]
    /// is preferred when a refresh token is configured.
    pub async fn client_credentials_token(&self) -> Res<Value> {
        self.request_token(&[("grant_type", "client_credentials")])
            .await
    }

    /// Refreshes a user access token from a long-lived refresh token.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Res<Value> {
        self.request_token(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .await
    }

    async fn request_token(&self, form: &[(&str, &str)]) -> Res<Value> {
        let res = self
            .client
            .post(&self.config.spotify_token_url)
            .header(
                AUTHORIZATION,
                utils::basic_credentials(
                    &self.config.spotify_client_id,
                    &self.config.spotify_client_secret,
                ),
            )
            .form(form)
            .send()
            .await?;

        let status = res.status();
        if status != reqwest::StatusCode::OK {
            let body = res.text().await.unwrap_or_default();
            return Err(Error::UpstreamAuth {
                status: status.as_u16(),
                body,
            });
        }

        Ok(res.json::<Value>().await?)
    }
}

/// Extracts the bearer string from a raw token response.
pub fn access_token(token: &Value) -> Res<String> {
    token["access_token"]
        .as_str()
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::UpstreamAuth {
            status: 200,
            body: "token response without access_token".to_string(),
        })
}
