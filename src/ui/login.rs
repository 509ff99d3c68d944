// SPDX-License-Identifier: MIT

//! Login/registration screen controller.

use crate::models::auth::RegisterRequest;
use crate::services::AuthService;
use crate::session::Session;

/// Transient state for the sign-in screen. A successful submit returns the
/// new session; the caller decides where to navigate.
pub struct LoginScreen {
    auth: AuthService,
    busy: bool,
    error: Option<String>,
}

impl LoginScreen {
    pub fn new(auth: AuthService) -> Self {
        Self {
            auth,
            busy: false,
            error: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Submit credentials. While a request is outstanding further submits
    /// are ignored (the triggering control is disabled).
    pub async fn submit_login(&mut self, username_or_email: &str, password: &str) -> Option<Session> {
        if self.busy {
            return None;
        }
        self.busy = true;
        self.error = None;

        let result = self.auth.login(username_or_email, password).await;
        self.busy = false;

        match result {
            Ok(session) => Some(session),
            Err(e) => {
                // A 401 here means bad credentials, not an expired session
                let fallback = "Sign-in failed, check your credentials";
                self.error = Some(if e.is_unauthorized() {
                    fallback.to_string()
                } else {
                    e.display_message(fallback)
                });
                None
            }
        }
    }

    /// Submit the registration form; success signs the new account in.
    pub async fn submit_register(&mut self, request: &RegisterRequest) -> Option<Session> {
        if self.busy {
            return None;
        }
        self.busy = true;
        self.error = None;

        let result = self.auth.register(request).await;
        self.busy = false;

        match result {
            Ok(session) => Some(session),
            Err(e) => {
                self.error = Some(e.display_message("Registration failed"));
                None
            }
        }
    }
}
