// SPDX-License-Identifier: MIT

//! Domain service façades over the HTTP clients.

pub mod auth;
pub mod profile;

pub use auth::AuthService;
pub use profile::ProfileService;
