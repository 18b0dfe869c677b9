//! HTTP adapter for the EduHub REST backend.
//!
//! One [`ApiClient`] is created at startup and shared by every page. It
//! owns the base URL and the underlying connection pool; pages never touch
//! `reqwest` directly. Every call returns `Result<_, AppError>` so the
//! presentation layer can surface failures and gate its submit controls.

pub mod admin;
pub mod auth;

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::AppError;

/// Shared client with a common base configuration.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Build a client rooted at `base_url` (e.g. `http://localhost:8080`).
    /// A trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let resp = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(transport_error)?;
        decode_json(path, resp).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        decode_json(path, resp).await
    }

    /// POST with a body where the response body is irrelevant.
    pub(crate) async fn post_ok<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), AppError> {
        let resp = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        expect_ok(path, resp).await
    }

    /// POST without a body (the path carries all parameters).
    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), AppError> {
        let resp = self
            .http
            .post(self.url(path))
            .send()
            .await
            .map_err(transport_error)?;
        expect_ok(path, resp).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), AppError> {
        let resp = self
            .http
            .delete(self.url(path))
            .send()
            .await
            .map_err(transport_error)?;
        expect_ok(path, resp).await
    }
}

fn transport_error(err: reqwest::Error) -> AppError {
    AppError::network(err.to_string())
}

/// Reject non-2xx responses, preferring the backend's own `message` field
/// when the error body is JSON.
async fn check_status(path: &str, resp: reqwest::Response) -> Result<reqwest::Response, AppError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = server_message(status.as_u16(), &body);
    tracing::warn!(path, status = status.as_u16(), "request rejected");
    Err(AppError::server(message))
}

fn server_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = value.get("message").and_then(|m| m.as_str()) {
            if !msg.is_empty() {
                return msg.to_string();
            }
        }
    }
    format!("request failed with status {status}")
}

async fn decode_json<T: DeserializeOwned>(
    path: &str,
    resp: reqwest::Response,
) -> Result<T, AppError> {
    let resp = check_status(path, resp).await?;
    let body = resp.text().await.map_err(transport_error)?;
    serde_json::from_str(&body).map_err(|err| {
        tracing::error!(path, %err, "response body failed validation");
        AppError::decode(format!("unexpected response from {path}: {err}"))
    })
}

async fn expect_ok(path: &str, resp: reqwest::Response) -> Result<(), AppError> {
    check_status(path, resp).await.map(|_| ())
}
