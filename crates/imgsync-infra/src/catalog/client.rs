use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::config::CatalogCredentials;

/// Margin subtracted from the token lifetime so a token is refreshed
/// before the catalog starts rejecting it.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// HTTP client for the catalog API.
///
/// Holds the OAuth client-credentials token in a pass-shared cache; all
/// other state is per-request.
pub struct CatalogClient {
    pub(super) http: reqwest::Client,
    api_url: String,
    auth_url: String,
    project_key: String,
    client_id: String,
    client_secret: String,
    token: RwLock<Option<CachedToken>>,
}

struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

impl CatalogClient {
    pub fn new(credentials: CatalogCredentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: credentials.api_url.trim_end_matches('/').to_string(),
            auth_url: credentials.auth_url.trim_end_matches('/').to_string(),
            project_key: credentials.project_key,
            client_id: credentials.client_id,
            client_secret: credentials.client_secret,
            token: RwLock::new(None),
        }
    }

    /// Returns a valid bearer token, fetching a fresh one when the cached
    /// token is absent or about to expire.
    pub(super) async fn access_token(&self) -> Result<String> {
        if let Some(token) = self.token.read().await.as_ref() {
            if token.expires_at > Instant::now() {
                return Ok(token.access_token.clone());
            }
        }

        debug!("requesting catalog access token from {}", self.auth_url);
        let response = self
            .http
            .post(format!("{}/oauth/token", self.auth_url))
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .context("token request failed")?
            .error_for_status()
            .context("token request rejected")?;

        let token: TokenResponse = response
            .json()
            .await
            .context("malformed token response")?;

        let expires_at = Instant::now()
            + Duration::from_secs(token.expires_in).saturating_sub(TOKEN_EXPIRY_MARGIN);
        *self.token.write().await = Some(CachedToken {
            access_token: token.access_token.clone(),
            expires_at,
        });
        Ok(token.access_token)
    }

    pub(super) fn products_url(&self, product_id: &str) -> String {
        format!("{}/{}/products/{}", self.api_url, self.project_key, product_id)
    }

    pub(super) fn product_projections_url(&self, product_id: &str) -> String {
        format!(
            "{}/{}/product-projections/{}",
            self.api_url, self.project_key, product_id
        )
    }
}
