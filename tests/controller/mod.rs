//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP controllers, calling
//! handlers directly with their extractors and verifying status codes and response bodies.

mod alert;
mod auth;
mod event;
mod research;
mod resident;
mod shelter;
mod user;

use haven::server::controller::util::extract::{ApiJson, ApiPath};
use haven_test_utils::prelude::*;

use crate::util::{authenticated, json_body, TestContextExt};
