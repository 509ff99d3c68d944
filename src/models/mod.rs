// SPDX-License-Identifier: MIT

//! Request/response schemas for the backend services.
//!
//! Each operation has an explicit typed schema so a malformed backend
//! response fails at decode time instead of propagating silently.

pub mod auth;
pub mod profile;

pub use auth::{
    AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest, TokenValidation,
    TokenValidationRequest,
};
pub use profile::{ActivityLevel, Gender, Goal, Profile, ProfileRequest, ProfileSearchQuery};
