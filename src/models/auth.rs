//! Authentication service request/response schemas.

use serde::{Deserialize, Serialize};

use crate::session::{Session, SessionUser};

/// POST /api/auth/login
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// The auth service accepts either the username or the email here
    pub username_or_email: String,
    pub password: String,
}

/// POST /api/auth/register
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Response to login, register, and refresh.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl AuthResponse {
    /// Build the session held client-side for this authentication.
    pub fn into_session(self) -> Session {
        Session {
            token: self.token,
            user: SessionUser {
                id: None,
                username: self.username,
                email: self.email,
                first_name: self.first_name,
                last_name: self.last_name,
                role: self.role,
            },
        }
    }
}

/// POST /api/auth/validate
#[derive(Debug, Clone, Serialize)]
pub struct TokenValidationRequest {
    pub token: String,
}

/// Validation verdict from the auth service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenValidation {
    pub valid: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// POST /api/auth/refresh
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}
