use async_trait::async_trait;
use reqwest::{header, Response};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, ConfigError, Result};
use crate::traits::BaseAccountApi;
use crate::types::{
    ApiErrorBody, DeleteAck, LoginRequest, MentorProfileRead, MentorProfileUpdate,
    RegisterRequest, Session, UserRead,
};

/// HTTP client for the MentorConnect account API.
#[derive(Clone)]
pub struct MentorshipClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl MentorshipClient {
    /// Create a client from an explicit configuration.
    pub fn new(config: &ClientConfig) -> std::result::Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(ConfigError::HttpClient)?;

        Ok(Self {
            http_client,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Create from `API_BASE_URL` / `API_TIMEOUT_SECS`.
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        Self::new(&ClientConfig::from_env()?)
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /register/`
    pub async fn register(&self, request: &RegisterRequest) -> Result<serde_json::Value> {
        let url = format!("{}/register/", self.base_url);
        tracing::debug!(%url, is_mentor = request.is_mentor, "Submitting registration");

        let resp = self
            .http_client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        read_json(resp).await
    }

    /// `POST /login`
    pub async fn login(&self, request: &LoginRequest) -> Result<Session> {
        let url = format!("{}/login", self.base_url);
        tracing::debug!(%url, "Submitting login");

        let resp = self
            .http_client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        read_json(resp).await
    }

    /// `GET /users/`
    pub async fn list_users(&self) -> Result<Vec<UserRead>> {
        self.get_json(&format!("{}/users/", self.base_url)).await
    }

    /// `GET /users/{id}`
    pub async fn get_user(&self, user_id: i64) -> Result<UserRead> {
        self.get_json(&format!("{}/users/{}", self.base_url, user_id))
            .await
    }

    /// `GET /mentors/`
    pub async fn list_mentors(&self) -> Result<Vec<MentorProfileRead>> {
        self.get_json(&format!("{}/mentors/", self.base_url)).await
    }

    /// `GET /mentors/{id}`
    pub async fn get_mentor(&self, mentor_id: i64) -> Result<MentorProfileRead> {
        self.get_json(&format!("{}/mentors/{}", self.base_url, mentor_id))
            .await
    }

    /// `PUT /mentors/{id}`
    pub async fn update_mentor(
        &self,
        mentor_id: i64,
        profile: &MentorProfileUpdate,
    ) -> Result<MentorProfileRead> {
        let url = format!("{}/mentors/{}", self.base_url, mentor_id);
        tracing::debug!(%url, "Updating mentor profile");

        let resp = self
            .http_client
            .put(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(profile)
            .send()
            .await?;

        read_json(resp).await
    }

    /// `DELETE /mentors/{id}`
    pub async fn delete_mentor(&self, mentor_id: i64) -> Result<()> {
        let url = format!("{}/mentors/{}", self.base_url, mentor_id);
        tracing::debug!(%url, "Deleting mentor profile");

        let resp = self.http_client.delete(&url).send().await?;
        let ack: DeleteAck = read_json(resp).await?;
        if !ack.ok {
            return Err(ClientError::Parse(format!(
                "Deletion of mentor profile {} was not acknowledged",
                mentor_id
            )));
        }
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self.http_client.get(url).send().await?;
        read_json(resp).await
    }
}

#[async_trait]
impl BaseAccountApi for MentorshipClient {
    async fn register(&self, request: &RegisterRequest) -> Result<serde_json::Value> {
        MentorshipClient::register(self, request).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<Session> {
        MentorshipClient::login(self, request).await
    }
}

/// Read a JSON response body. A body that is not JSON is a parse error
/// whatever the status; a JSON body on a non-2xx status is an API error.
async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    let bytes = resp.bytes().await?;

    let value: serde_json::Value = serde_json::from_slice(&bytes).map_err(|e| {
        ClientError::Parse(format!("HTTP {}: response body is not JSON: {}", status, e))
    })?;

    if !status.is_success() {
        let body: ApiErrorBody = serde_json::from_value(value).unwrap_or_default();
        return Err(ClientError::Api {
            status: status.as_u16(),
            detail: body.message(),
        });
    }

    serde_json::from_value(value)
        .map_err(|e| ClientError::Parse(format!("Unexpected response shape: {}", e)))
}
