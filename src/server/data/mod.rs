//! Data access layer repositories.
//!
//! This module contains one repository per table. Repositories are generic over
//! [`sea_orm::ConnectionTrait`] so the same queries run on the connection pool or inside a
//! transaction opened by a service. Listings are returned in insertion order.

pub mod event;
pub mod research_data;
pub mod resident;
pub mod risk_alert;
pub mod shelter;
pub mod user;
