// SPDX-License-Identifier: MIT

//! Profile façade: CRUD plus search against the profile service.
//!
//! The client does no validation beyond numeric form conversion; invalid
//! field values are rejected server-side and surface as `ApiError::Api`.

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::profile::{Profile, ProfileRequest, ProfileSearchQuery};

#[derive(Clone)]
pub struct ProfileService {
    client: ApiClient,
}

impl ProfileService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Whether the signed-in user already has a profile. Consulted before
    /// any `get` so the UI can distinguish "no profile yet" from a failure.
    pub async fn exists(&self) -> Result<bool> {
        self.client.get("/api/profiles/exists").await
    }

    /// Fetch the user's profile. Fails with 404 if none exists.
    pub async fn get(&self) -> Result<Profile> {
        self.client.get("/api/profiles").await
    }

    /// Create the profile. Fails if one already exists or server-side
    /// validation rejects a field.
    pub async fn create(&self, request: &ProfileRequest) -> Result<Profile> {
        let profile = self.client.post("/api/profiles", request).await?;
        tracing::info!("Profile created");
        Ok(profile)
    }

    /// Full replace of the editable fields.
    pub async fn update(&self, request: &ProfileRequest) -> Result<Profile> {
        let profile = self.client.put("/api/profiles", request).await?;
        tracing::info!("Profile updated");
        Ok(profile)
    }

    /// Delete the profile. The caller transitions the UI back to its
    /// "no profile" state afterward.
    pub async fn delete(&self) -> Result<()> {
        self.client.delete("/api/profiles").await?;
        tracing::info!("Profile deleted");
        Ok(())
    }

    /// Search profiles by name, goal, or activity level. No client-side
    /// filtering; blank parameters are omitted from the query string.
    pub async fn search(&self, query: &ProfileSearchQuery) -> Result<Vec<Profile>> {
        self.client.get_with_query("/api/profiles/search", query).await
    }
}
