//! Data transfer objects exchanged over the HTTP API.
//!
//! Every request body and response body of the API is defined here, together with the
//! conversions from database models. None of these types carry secrets: password hashes
//! never leave the persistence layer.

pub mod alert;
pub mod api;
pub mod auth;
pub mod dashboard;
pub mod event;
pub mod research;
pub mod resident;
pub mod shelter;
pub mod user;
