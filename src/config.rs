//! Client configuration loaded from environment variables.
//!
//! Every setting has a localhost default so the client runs against a local
//! development stack with no configuration at all.

use std::env;
use std::path::PathBuf;

/// Base addresses for the backend services plus the session storage location.
#[derive(Debug, Clone)]
pub struct Config {
    /// General API base URL (reserved for future service endpoints)
    pub api_base_url: String,
    /// Authentication service base URL
    pub auth_api_url: String,
    /// Profile service base URL
    pub profile_api_url: String,
    /// Directory holding the persisted session file
    pub session_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables, reading `.env` first
    /// if one is present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            api_base_url: env_or("NUTRILIFE_API_BASE_URL", "http://localhost:8080"),
            auth_api_url: env_or("NUTRILIFE_AUTH_API_URL", "http://localhost:8081"),
            profile_api_url: env_or("NUTRILIFE_PROFILE_API_URL", "http://localhost:8082"),
            session_dir: env::var("NUTRILIFE_SESSION_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            auth_api_url: "http://localhost:8081".to_string(),
            profile_api_url: "http://localhost:8082".to_string(),
            session_dir: PathBuf::from("."),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
