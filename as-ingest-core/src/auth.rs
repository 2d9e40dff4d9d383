//! OAuth2 token exchange against the AlphaSense auth endpoint.

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::contract::{Authenticator, Token};
use crate::error::AuthError;

/// Password-grant client for the auth endpoint.
///
/// Holds the credential set from [`Config`]; one instance per process
/// invocation. Every request carries the account API key in `x-api-key`.
pub struct AuthClient {
    http: reqwest::Client,
    auth_url: String,
    api_key: String,
    username: String,
    password: String,
    client_id: String,
    client_secret: String,
}

impl AuthClient {
    pub fn new(config: &Config) -> AuthClient {
        AuthClient {
            http: reqwest::Client::new(),
            auth_url: config.auth_url.clone(),
            api_key: config.api_key.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        }
    }

    /// POST a grant form to the auth endpoint and parse the token response.
    async fn token_request(&self, form: &[(&str, &str)]) -> Result<Token, AuthError> {
        let response = self
            .http
            .post(&self.auth_url)
            .header("x-api-key", &self.api_key)
            .form(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                status = status.as_u16(),
                "Auth endpoint rejected token request"
            );
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let token: Token =
            serde_json::from_str(&body).map_err(|e| AuthError::MalformedResponse(e.to_string()))?;
        debug!(
            has_refresh = token.refresh_token.is_some(),
            expires_in = ?token.expires_in,
            "Parsed token response"
        );
        Ok(token)
    }
}

#[async_trait]
impl Authenticator for AuthClient {
    async fn authenticate(&self) -> Result<Token, AuthError> {
        info!(auth_url = %self.auth_url, username = %self.username, "Requesting access token");
        let form = [
            ("grant_type", "password"),
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];
        self.token_request(&form).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Token, AuthError> {
        info!(auth_url = %self.auth_url, "Refreshing access token");
        let form = [
            ("grant_type", "refresh_token"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("refresh_token", refresh_token),
        ];
        self.token_request(&form).await
    }
}
