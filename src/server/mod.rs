//! Server application core modules.
//!
//! This module contains all server-side functionality for the Haven application: configuration,
//! HTTP routing, bearer token authentication, database access and the services implementing the
//! rules for shelters, residents, events, risk alerts and research records.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
