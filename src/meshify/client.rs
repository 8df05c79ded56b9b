use crate::app_config::AppConfig;
use crate::credentials::Credentials;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument, warn};

#[derive(Debug)]
pub struct MeshifyClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl MeshifyClient {
    pub fn new(config: &AppConfig, credentials: Credentials) -> Result<Self, MeshifyClientError> {
        let url = config.meshify().url();
        reqwest::Url::parse(url).map_err(|e| MeshifyClientError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let base_url = if url.ends_with('/') { url.to_string() } else { format!("{}/", url) };
        let client = Client::builder().build()?;

        Ok(MeshifyClient {
            client,
            base_url,
            credentials,
        })
    }

    /// Fetches a list, downgrading any non-200 response to an empty list.
    pub async fn query<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>, MeshifyClientError> {
        match self.try_query(endpoint).await {
            Err(MeshifyClientError::UnexpectedStatus { status, body }) => {
                warn!(status_code = %status, "⚠️ Query of '{}' failed, treating it as empty. Response: {}", endpoint, body);
                Ok(Vec::new())
            }
            result => result,
        }
    }

    #[instrument(skip(self))]
    pub async fn try_query<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>, MeshifyClientError> {
        let request = self.client.get(self.url_for(endpoint));
        let items = self.send(request).await?;
        debug!("Queried '{}'", endpoint);
        Ok(items)
    }

    /// Posts `payload`, returning the echoed record or `None` when the API answers with anything but 200.
    pub async fn post<B: Serialize>(&self, endpoint: &str, payload: &B) -> Result<Option<Value>, MeshifyClientError> {
        match self.try_post(endpoint, payload).await {
            Ok(value) => Ok(Some(value)),
            Err(MeshifyClientError::UnexpectedStatus { status, body }) => {
                warn!(status_code = %status, "⚠️ Post to '{}' failed. Response: {}", endpoint, body);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self, payload))]
    pub async fn try_post<B: Serialize>(&self, endpoint: &str, payload: &B) -> Result<Value, MeshifyClientError> {
        let request = self.client.post(self.url_for(endpoint)).json(payload);
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, MeshifyClientError> {
        let response = request
            .basic_auth(self.credentials.username(), Some(self.credentials.password()))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(MeshifyClientError::UnexpectedStatus { status, body });
        }

        Ok(response.json::<T>().await?)
    }

    fn url_for(&self, endpoint: &str) -> String {
        let endpoint = endpoint.strip_prefix('/').unwrap_or(endpoint);
        format!("{}{}", self.base_url, endpoint)
    }
}

#[derive(Error, Debug)]
pub enum MeshifyClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Meshify responded with status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error("invalid Meshify url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
