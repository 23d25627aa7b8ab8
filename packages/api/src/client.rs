//! # Authenticated HTTP client
//!
//! [`ApiClient`] is the only way the UI talks to the backend. It
//!
//! - reads the bearer token from durable storage at send time and attaches
//!   `Authorization: Bearer <token>` when one is present;
//! - turns a 401 into a session invalidation: both session keys are removed
//!   from storage, the invalidation counter published by
//!   [`ApiClient::session_events`] is bumped, and the call fails with
//!   [`ApiError::Unauthorized`];
//! - passes every other error status through as [`ApiError::Status`] with the
//!   server's `detail`.
//!
//! There is no retry, refresh-token flow or cancellation. The client never
//! navigates; the shell subscribes to [`ApiClient::session_events`] and
//! decides what to do.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::session::{TOKEN_KEY, USER_KEY};
use store::SharedStorage;
use tokio::sync::watch;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    storage: SharedStorage,
    invalidations: Arc<watch::Sender<u64>>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, storage: SharedStorage) -> Self {
        let (invalidations, _) = watch::channel(0);
        Self {
            http: reqwest::Client::new(),
            base_url: Arc::from(config.base_url.as_str()),
            storage,
            invalidations: Arc::new(invalidations),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Receiver that changes every time a 401 invalidates the session. The
    /// value is the number of invalidations so far.
    pub fn session_events(&self) -> watch::Receiver<u64> {
        self.invalidations.subscribe()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!("{} {}", method, path);
        let builder = self.http.request(method, self.url(path));
        match self.storage.get(TOKEN_KEY) {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn invalidate_session(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.invalidations.send_modify(|count| *count += 1);
        tracing::warn!("Session invalidated by 401 response");
    }

    /// Send a request and classify its status.
    async fn send(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.invalidate_session();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_status(status.as_u16(), &body);
            tracing::debug!("Request failed: {}", err);
            return Err(err);
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        self.send(builder)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send_json(self.request(Method::GET, path)).await
    }

    pub(crate) async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        self.send_json(self.request(Method::GET, path).query(query))
            .await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send_json(self.request(Method::POST, path).json(body))
            .await
    }

    pub(crate) async fn post_with<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> ApiResult<T> {
        self.send_json(self.request(Method::POST, path).query(query).json(body))
            .await
    }

    /// POST where the response body is irrelevant.
    pub(crate) async fn post_discard<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.send(self.request(Method::POST, path).json(body))
            .await
            .map(|_| ())
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ApiResult<T> {
        self.send_json(self.request(Method::POST, path).multipart(form))
            .await
    }

    pub(crate) async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send_json(self.request(Method::PATCH, path).json(body))
            .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send_json(self.request(Method::DELETE, path)).await
    }

    pub(crate) async fn delete_discard(&self, path: &str) -> ApiResult<()> {
        self.send(self.request(Method::DELETE, path))
            .await
            .map(|_| ())
    }
}
