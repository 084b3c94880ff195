//! Utility types for controller request handling.
//!
//! This module provides the bearer token extractor used by every protected endpoint and the
//! body and path extractors that report malformed requests as JSON errors.

pub mod auth;
pub mod extract;
