//! Test fixture modules for database record creation.
//!
//! Each submodule provides fixtures for one table, reachable from a [`TestContext`](crate::TestContext)
//! through an accessor such as `test.user()` or `test.shelter()`:
//!
//! - `user` - staff accounts with hashed passwords
//! - `shelter` - shelters, optionally managed by a user
//! - `resident` - residents housed at a shelter
//! - `event` - shelter events
//! - `alert` - risk alerts raised by a user for a shelter
//! - `research` - research records tied to a shelter
//! - `factory` - in-memory models that never touch the database

pub mod alert;
pub mod event;
pub mod factory;
pub mod research;
pub mod resident;
pub mod shelter;
pub mod user;
