// SPDX-License-Identifier: MIT

//! Shared helpers: an app wired to a wiremock server with an in-memory
//! session store and a counting session-expired handler.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use nutrilife_client::client::SessionEvents;
use nutrilife_client::config::Config;
use nutrilife_client::session::{MemorySessionStore, Session, SessionStore, SessionUser};
use nutrilife_client::App;
use serde_json::json;
use wiremock::MockServer;

/// Counts session-expired notifications emitted by the transport.
#[derive(Default)]
pub struct ExpiredCounter(AtomicUsize);

impl SessionEvents for ExpiredCounter {
    fn session_expired(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

impl ExpiredCounter {
    #[allow(dead_code)]
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Session used by tests that start signed in.
#[allow(dead_code)]
pub fn test_session() -> Session {
    Session {
        token: "test-token".to_string(),
        user: SessionUser {
            id: None,
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role: Some("USER".to_string()),
        },
    }
}

/// Build an app with both backend services pointed at one mock server.
#[allow(dead_code)]
pub async fn test_app() -> (App, MockServer, Arc<MemorySessionStore>, Arc<ExpiredCounter>) {
    let server = MockServer::start().await;
    let store = Arc::new(MemorySessionStore::new());
    let events = Arc::new(ExpiredCounter::default());

    let config = Config {
        api_base_url: server.uri(),
        auth_api_url: server.uri(),
        profile_api_url: server.uri(),
        session_dir: PathBuf::from("."),
    };

    let app = App::new(config, store.clone(), events.clone());
    (app, server, store, events)
}

/// Put the standard test session into the store.
#[allow(dead_code)]
pub fn sign_in(store: &MemorySessionStore) {
    store.save(&test_session()).unwrap();
}

/// Auth service response for a successful login/register/refresh.
#[allow(dead_code)]
pub fn auth_response_json(token: &str) -> serde_json::Value {
    json!({
        "token": token,
        "refreshToken": "refresh-1",
        "username": "ada",
        "email": "ada@example.com",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "role": "USER"
    })
}

/// Profile service response body with server-computed metrics.
#[allow(dead_code)]
pub fn profile_json() -> serde_json::Value {
    json!({
        "id": 7,
        "userId": 42,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "birthDate": "1990-12-10",
        "gender": "FEMALE",
        "height": 170.0,
        "weight": 60.0,
        "activityLevel": "MODERATELY_ACTIVE",
        "goal": "GENERAL_HEALTH",
        "age": 35,
        "bmi": 20.8,
        "bmiCategory": "Normal",
        "bmr": 1346,
        "tdee": 2086,
        "createdAt": "2026-08-01T09:30:00"
    })
}
