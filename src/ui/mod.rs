// SPDX-License-Identifier: MIT

//! Screen controllers: explicit per-screen state machines.
//!
//! Controllers hold only transient UI state (busy flag, error message,
//! edit-mode form). Rendering is left to whatever front end drives them;
//! the shipped binary is a plain terminal loop.

pub mod dashboard;
pub mod form;
pub mod login;

pub use dashboard::{Dashboard, DashboardState};
pub use form::ProfileForm;
pub use login::LoginScreen;
