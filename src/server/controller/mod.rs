//! HTTP controller endpoints for the Haven web API.
//!
//! This module contains Axum handlers for authentication, staff users, shelters and the
//! records attached to them. Controllers extract and authenticate requests, delegate to
//! services and return JSON responses. Every handler is annotated with utoipa for the
//! OpenAPI document served at `/api/docs`.

pub mod alert;
pub mod auth;
pub mod dashboard;
pub mod event;
pub mod health;
pub mod research;
pub mod resident;
pub mod shelter;
pub mod user;
pub mod util;
