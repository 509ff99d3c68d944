// SPDX-License-Identifier: MIT

//! Authentication façade.
//!
//! Each operation is a single request/response round trip; the auth service
//! is the sole source of truth for credential validity. Successful login,
//! registration, and refresh persist the resulting session.

use std::sync::Arc;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::auth::{
    AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest, TokenValidation,
    TokenValidationRequest,
};
use crate::session::{Session, SessionStore};

#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
    store: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(client: ApiClient, store: Arc<dyn SessionStore>) -> Self {
        Self { client, store }
    }

    /// Sign in with username (or email) and password. On success the
    /// session is saved and returned.
    pub async fn login(&self, username_or_email: &str, password: &str) -> Result<Session> {
        let request = LoginRequest {
            username_or_email: username_or_email.to_string(),
            password: password.to_string(),
        };

        let response: AuthResponse = self.client.post("/api/auth/login", &request).await?;
        let session = response.into_session();
        self.store.save(&session)?;

        tracing::info!(username = %session.user.username, "Signed in");
        Ok(session)
    }

    /// Create an account. The backend signs the new user in immediately, so
    /// the response is saved as the current session.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Session> {
        let response: AuthResponse = self.client.post("/api/auth/register", request).await?;
        let session = response.into_session();
        self.store.save(&session)?;

        tracing::info!(username = %session.user.username, "Account registered");
        Ok(session)
    }

    /// Ask the auth service whether a token is still valid.
    pub async fn validate_token(&self, token: &str) -> Result<TokenValidation> {
        let request = TokenValidationRequest {
            token: token.to_string(),
        };
        self.client.post("/api/auth/validate", &request).await
    }

    /// Exchange a refresh token for a new session, replacing the stored one.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<Session> {
        let request = RefreshTokenRequest {
            refresh_token: refresh_token.to_string(),
        };

        let response: AuthResponse = self.client.post("/api/auth/refresh", &request).await?;
        let session = response.into_session();
        self.store.save(&session)?;

        tracing::debug!("Session token refreshed");
        Ok(session)
    }

    /// Sign out. Purely client-side: the stored session is discarded.
    pub fn logout(&self) {
        self.store.clear();
        tracing::info!("Signed out");
    }

    /// Session currently held by the store, if any.
    pub fn current_session(&self) -> Option<Session> {
        self.store.read()
    }
}
