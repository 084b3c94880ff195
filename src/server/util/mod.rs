//! Utility types shared by services and controllers.
//!
//! This module provides the credential primitives of the application: one-way password
//! hashing with bcrypt and signed, time-limited access tokens. Both are constructed once at
//! startup from [`Config`](crate::server::config::Config) and shared through
//! [`AppState`](crate::server::model::app::AppState).

pub mod password;
pub mod token;
