// SPDX-License-Identifier: MIT

//! JSON HTTP client wrapper for the backend services.
//!
//! Handles:
//! - Bearer-token injection from the session store on every request
//! - Centralized 401 handling (clear session, notify the controller)
//! - Error-body decoding for non-success statuses
//!
//! One instance exists per backend service, each with its own base URL.
//! There is no retry, no request queuing, and no timeout policy beyond
//! transport defaults.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::{ApiError, Result};
use crate::session::SessionStore;

/// Notifications emitted by the transport layer.
///
/// The transport never navigates by itself; it reports the expired session
/// and the top-level controller decides where to send the user.
pub trait SessionEvents: Send + Sync {
    /// Called after a 401 response has cleared the session store.
    fn session_expired(&self);
}

/// Handler for contexts with no navigation concern (tools, tests).
pub struct NoEvents;

impl SessionEvents for NoEvents {
    fn session_expired(&self) {}
}

/// JSON request client bound to one backend service.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
    events: Arc<dyn SessionEvents>,
}

impl ApiClient {
    /// Create a client for the service at `base_url`.
    pub fn new(
        base_url: &str,
        store: Arc<dyn SessionStore>,
        events: Arc<dyn SessionEvents>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
            events,
        }
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send_json(self.request(Method::GET, path)).await
    }

    /// GET a JSON resource with query parameters.
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send_json(self.request(Method::GET, path).query(query))
            .await
    }

    /// POST a JSON body, decoding a JSON response.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.request(Method::POST, path).json(body))
            .await
    }

    /// PUT a JSON body, decoding a JSON response.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.request(Method::PUT, path).json(body))
            .await
    }

    /// DELETE a resource, ignoring any response body.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let response = self.request(Method::DELETE, path).send().await?;
        self.check_response(response).await?;
        Ok(())
    }

    /// Build a request with JSON content type and, iff a session exists,
    /// the bearer token.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http
            .request(method, url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if let Some(session) = self.store.read() {
            request = request.bearer_auth(session.token);
        }

        request
    }

    async fn send_json<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let response = self.check_response(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Map non-success statuses to errors. 401 clears the session and fires
    /// the session-expired event before propagating.
    async fn check_response(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("Backend returned 401, clearing stored session");
            self.store.clear();
            self.events.session_expired();
            return Err(ApiError::Unauthorized);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Api {
            status: status.as_u16(),
            message: decode_error_message(&body),
        })
    }
}

/// Pull a human-readable message out of a backend error body.
///
/// The services respond with `{"message": ...}` or `{"error": ...}`; raw
/// non-JSON bodies are passed through as-is.
fn decode_error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(decoded) => decoded.message.or(decoded.error),
        Err(_) => {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_message_variants() {
        assert_eq!(
            decode_error_message(r#"{"message": "Profile already exists"}"#),
            Some("Profile already exists".to_string())
        );
        assert_eq!(
            decode_error_message(r#"{"error": "bad_request"}"#),
            Some("bad_request".to_string())
        );
        assert_eq!(
            decode_error_message("service unavailable"),
            Some("service unavailable".to_string())
        );
        assert_eq!(decode_error_message(""), None);
        assert_eq!(decode_error_message("{}"), None);
    }
}
