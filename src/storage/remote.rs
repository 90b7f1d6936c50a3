use super::kv::{KvStore, StoreError};
use super::protocol::{
    ENDPOINT_KV_DELETE, ENDPOINT_KV_GET, ENDPOINT_KV_PUT, ENDPOINT_KV_TAKE, KvPutRequest,
    KvValueResponse,
};

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use std::time::Duration;

/// Client for a store node reached over HTTP.
///
/// Transport failures are retried with exponential backoff and jitter; the
/// retry policy lives here so the note lifecycle never has to retry itself.
pub struct RemoteKvStore {
    http_client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    attempts: usize,
}

impl RemoteKvStore {
    pub fn new(base_url: &str, timeout: Duration, attempts: usize) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            attempts: attempts.max(1),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, StoreError> {
        Url::parse(&format!("{}{}", self.base_url, endpoint))
            .map_err(|e| StoreError::InvalidUrl(format!("{}: {}", self.base_url, e)))
    }

    /// Appends `key` as a single percent-encoded path segment, so `/`, `?`, `#`
    /// and `%` in a key never change which key the store node sees.
    fn key_url(&self, endpoint: &str, key: &str) -> Result<Url, StoreError> {
        let mut url = self.endpoint_url(endpoint)?;
        url.path_segments_mut()
            .map_err(|_| StoreError::InvalidUrl(self.base_url.clone()))?
            .push(key);
        Ok(url)
    }

    async fn send_with_retry<F>(&self, build: F, attempts: usize) -> Result<reqwest::Response, StoreError>
    where
        F: Fn(&reqwest::Client) -> reqwest::RequestBuilder,
    {
        let mut delay_ms = 150u64;
        let mut attempt = 1;

        loop {
            match build(&self.http_client).timeout(self.timeout).send().await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt >= attempts => return Err(StoreError::Transport(e)),
                Err(e) => {
                    tracing::warn!(
                        "Store request failed (attempt {}/{}): {}",
                        attempt,
                        attempts,
                        e
                    );
                    let jitter = rand::random::<u64>() % 50;
                    tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
                    delay_ms = (delay_ms * 2).min(1200);
                    attempt += 1;
                }
            }
        }
    }

    async fn read_value(response: reqwest::Response) -> Result<Option<String>, StoreError> {
        // Only the store node's own `{"value": null}` means absent. A bare 404
        // comes from a node without the /kv routes.
        if response.status() == StatusCode::NOT_FOUND {
            return match response.json::<KvValueResponse>().await {
                Ok(KvValueResponse { value: None }) => Ok(None),
                _ => Err(StoreError::Status(StatusCode::NOT_FOUND)),
            };
        }
        if !response.status().is_success() {
            return Err(StoreError::Status(response.status()));
        }
        let body: KvValueResponse = response.json().await?;
        Ok(body.value)
    }
}

#[async_trait]
impl KvStore for RemoteKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let url = self.key_url(ENDPOINT_KV_GET, key)?;
        let response = self
            .send_with_retry(|client| client.get(url.clone()), self.attempts)
            .await?;
        Self::read_value(response).await
    }

    async fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
        let url = self.endpoint_url(ENDPOINT_KV_PUT)?;
        let payload = KvPutRequest {
            key: key.to_string(),
            value,
        };
        let response = self
            .send_with_retry(|client| client.post(url.clone()).json(&payload), self.attempts)
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::Status(response.status()));
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let url = self.key_url(ENDPOINT_KV_DELETE, key)?;
        let response = self
            .send_with_retry(|client| client.delete(url.clone()), self.attempts)
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::Status(response.status()));
        }
        Ok(())
    }

    // Sent once: a retry after a lost response would report the key as absent.
    async fn take(&self, key: &str) -> Result<Option<String>, StoreError> {
        let url = self.key_url(ENDPOINT_KV_TAKE, key)?;
        let response = self
            .send_with_retry(|client| client.post(url.clone()), 1)
            .await?;
        Self::read_value(response).await
    }
}
