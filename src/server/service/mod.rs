//! Service layer for business logic.
//!
//! This module contains the services that implement the business rules of the application:
//! credential checks and registration, creation invariants of shelters, residents and alerts,
//! validation of references between records, and dashboard aggregation. Services coordinate
//! repositories and convert database models into API DTOs.

pub mod alert;
pub mod auth;
pub mod dashboard;
pub mod event;
pub mod research;
pub mod resident;
pub mod shelter;
pub mod user;
