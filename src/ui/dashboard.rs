// SPDX-License-Identifier: MIT

//! Profile screen state machine.
//!
//! States: Loading → NoProfile | HasProfile; HasProfile ⇄ Editing;
//! HasProfile → NoProfile on delete. A façade failure in a transient state
//! surfaces an inline error and returns to the last stable state. Requests
//! within one action are strictly sequential, and the busy flag rejects
//! overlapping submissions.

use crate::models::profile::Profile;
use crate::services::ProfileService;
use crate::ui::form::ProfileForm;

/// Current screen state. `Editing` keeps the underlying profile so a
/// cancelled or failed save can fall back to it.
#[derive(Debug)]
pub enum DashboardState {
    Loading,
    NoProfile,
    HasProfile(Profile),
    Editing {
        profile: Profile,
        form: ProfileForm,
    },
}

pub struct Dashboard {
    profiles: ProfileService,
    state: DashboardState,
    error: Option<String>,
    busy: bool,
}

impl Dashboard {
    pub fn new(profiles: ProfileService) -> Self {
        Self {
            profiles,
            state: DashboardState::Loading,
            error: None,
            busy: false,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Profile shown on the screen, in both view and edit mode.
    pub fn profile(&self) -> Option<&Profile> {
        match &self.state {
            DashboardState::HasProfile(profile) => Some(profile),
            DashboardState::Editing { profile, .. } => Some(profile),
            _ => None,
        }
    }

    /// Run the existence check and, only if a profile exists, fetch it.
    /// The two requests are sequential; `exists == false` means no fetch
    /// is ever attempted.
    pub async fn load(&mut self) {
        if self.busy {
            return;
        }
        self.busy = true;
        self.state = DashboardState::Loading;
        self.error = None;

        match self.profiles.exists().await {
            Ok(false) => self.state = DashboardState::NoProfile,
            Ok(true) => match self.profiles.get().await {
                Ok(profile) => self.state = DashboardState::HasProfile(profile),
                Err(e) => {
                    // Stay in Loading; the user can retry the whole load
                    self.error = Some(e.display_message("Could not load your profile"));
                }
            },
            Err(e) => {
                self.error = Some(e.display_message("Could not load your profile"));
            }
        }

        self.busy = false;
    }

    /// Submit the create form. On success the create response itself
    /// becomes the displayed profile; no follow-up fetch happens.
    pub async fn submit_create(&mut self, form: &ProfileForm) {
        if self.busy || !matches!(self.state, DashboardState::NoProfile) {
            return;
        }
        self.busy = true;
        self.error = None;

        match self.profiles.create(&form.to_request()).await {
            Ok(profile) => self.state = DashboardState::HasProfile(profile),
            Err(e) => {
                self.error = Some(e.display_message("Could not create the profile"));
            }
        }

        self.busy = false;
    }

    /// Switch to edit mode with a form prefilled from the current profile.
    pub fn begin_edit(&mut self) {
        if let DashboardState::HasProfile(profile) = &self.state {
            let profile = profile.clone();
            let form = ProfileForm::from_profile(&profile);
            self.error = None;
            self.state = DashboardState::Editing { profile, form };
        }
    }

    /// Leave edit mode without saving.
    pub fn cancel_edit(&mut self) {
        if !matches!(self.state, DashboardState::Editing { .. }) {
            return;
        }
        if let DashboardState::Editing { profile, .. } =
            std::mem::replace(&mut self.state, DashboardState::Loading)
        {
            self.error = None;
            self.state = DashboardState::HasProfile(profile);
        }
    }

    /// Mutable access to the edit form, when in edit mode.
    pub fn form_mut(&mut self) -> Option<&mut ProfileForm> {
        match &mut self.state {
            DashboardState::Editing { form, .. } => Some(form),
            _ => None,
        }
    }

    /// Save the edit form. Success shows the update response; failure
    /// keeps the screen in edit mode with an inline error.
    pub async fn save_edit(&mut self) {
        if self.busy {
            return;
        }
        let request = match &self.state {
            DashboardState::Editing { form, .. } => form.to_request(),
            _ => return,
        };
        self.busy = true;
        self.error = None;

        match self.profiles.update(&request).await {
            Ok(profile) => self.state = DashboardState::HasProfile(profile),
            Err(e) => {
                self.error = Some(e.display_message("Could not save the profile"));
            }
        }

        self.busy = false;
    }

    /// Delete the profile. Success returns the screen to NoProfile; no
    /// further fetch is attempted for the deleted profile.
    pub async fn delete(&mut self) {
        if self.busy || !matches!(self.state, DashboardState::HasProfile(_)) {
            return;
        }
        self.busy = true;
        self.error = None;

        match self.profiles.delete().await {
            Ok(()) => self.state = DashboardState::NoProfile,
            Err(e) => {
                self.error = Some(e.display_message("Could not delete the profile"));
            }
        }

        self.busy = false;
    }
}
