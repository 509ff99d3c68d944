// SPDX-License-Identifier: MIT

//! NutriLife client: session and request lifecycle for the NutriLife
//! profile-management service.
//!
//! This crate wires a persistent session store, one JSON HTTP client per
//! backend service (auth and profile), typed façades over both services,
//! and explicit per-screen state machines. Authentication and profile
//! persistence live entirely in the backends; the client holds only the
//! session and transient screen state.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod ui;

use std::sync::Arc;

use client::{ApiClient, SessionEvents};
use config::Config;
use services::{AuthService, ProfileService};
use session::SessionStore;

/// Shared application wiring: configuration, the session store, and one
/// façade per backend service.
pub struct App {
    pub config: Config,
    pub store: Arc<dyn SessionStore>,
    pub auth: AuthService,
    pub profiles: ProfileService,
}

impl App {
    /// Build the clients and façades. The session store and the
    /// session-expired handler are injected so tests can substitute both.
    pub fn new(
        config: Config,
        store: Arc<dyn SessionStore>,
        events: Arc<dyn SessionEvents>,
    ) -> Self {
        let auth_client = ApiClient::new(&config.auth_api_url, store.clone(), events.clone());
        let profile_client = ApiClient::new(&config.profile_api_url, store.clone(), events);

        Self {
            auth: AuthService::new(auth_client, store.clone()),
            profiles: ProfileService::new(profile_client),
            store,
            config,
        }
    }
}
