//! HTTP client for the SmartLearn API.
//!
//! One request per call, no retries. Non-2xx responses become
//! [`RemoteError::Rejected`] carrying the server's `detail`/`message`;
//! transport failures become [`RemoteError::Network`].

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use sl_core::auth::AccessToken;
use sl_core::onboarding::{OnboardingProfile, StoredPreferences};
use sl_core::ports::{AuthPort, OnboardingRemotePort, RemoteError};

use super::dto::{error_detail, InfoResponse};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(request: RequestBuilder) -> Result<Response, RemoteError> {
        let response = request
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "API request rejected");
        Err(RemoteError::rejected(status.as_u16(), error_detail(&body)))
    }

    async fn json<T: DeserializeOwned>(response: Response) -> Result<T, RemoteError> {
        response
            .json()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

#[async_trait]
impl OnboardingRemotePort for HttpApiClient {
    #[instrument(skip(self, token, profile))]
    async fn save_info(
        &self,
        token: Option<&str>,
        profile: &OnboardingProfile,
    ) -> Result<OnboardingProfile, RemoteError> {
        let request = self.client.post(self.url("/onboarding/me/info")).json(profile);
        let response = Self::send(Self::authorized(request, token)).await?;
        let saved: InfoResponse = Self::json(response).await?;
        debug!("step-1 record saved remotely");
        Ok(saved.into_profile().unwrap_or_else(|| profile.clone()))
    }

    #[instrument(skip(self, token))]
    async fn load_info(&self, token: Option<&str>) -> Result<Option<OnboardingProfile>, RemoteError> {
        let request = self.client.get(self.url("/onboarding/me/info"));
        let response = Self::send(Self::authorized(request, token)).await?;
        let info: InfoResponse = Self::json(response).await?;
        Ok(info.into_profile())
    }

    #[instrument(skip(self, token, preferences))]
    async fn save_preferences(
        &self,
        token: Option<&str>,
        preferences: &StoredPreferences,
    ) -> Result<StoredPreferences, RemoteError> {
        let request = self
            .client
            .post(self.url("/onboarding/me/step2"))
            .json(preferences);
        let response = Self::send(Self::authorized(request, token)).await?;
        Self::json(response).await
    }

    #[instrument(skip(self, token))]
    async fn load_preferences(&self, token: Option<&str>) -> Result<StoredPreferences, RemoteError> {
        let request = self.client.get(self.url("/onboarding/me/step2"));
        let response = Self::send(Self::authorized(request, token)).await?;
        Self::json(response).await
    }
}

#[async_trait]
impl AuthPort for HttpApiClient {
    #[instrument(skip(self, password))]
    async fn login(&self, email: &str, password: &str) -> Result<AccessToken, RemoteError> {
        let request = self
            .client
            .post(self.url("/auth/login"))
            .form(&[("username", email), ("password", password)]);
        let response = Self::send(request).await?;
        Self::json(response).await
    }

    #[instrument(skip(self, password))]
    async fn register(&self, email: &str, password: &str) -> Result<(), RemoteError> {
        let request = self
            .client
            .post(self.url("/auth/register"))
            .json(&serde_json::json!({ "email": email, "password": password }));
        Self::send(request).await?;
        Ok(())
    }
}
