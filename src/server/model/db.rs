//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so signatures do not need to spell out the generated
//! `entity` crate paths.

/// Type alias for a staff user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `username` - Unique login name
/// - `email` / `full_name` - Optional contact details
/// - `role` - Staff classification
/// - `hashed_password` - bcrypt hash, never serialized
/// - `is_active` - Whether the user may log in
/// - `created_at` / `updated_at` - Record timestamps
pub type UserModel = entity::user::Model;

/// Type alias for a shelter database model.
///
/// `manager_id` optionally references the [`UserModel`] managing the shelter.
pub type ShelterModel = entity::shelter::Model;

/// Type alias for a resident database model.
pub type ResidentModel = entity::resident::Model;

/// Type alias for a shelter event database model.
pub type EventModel = entity::event::Model;

/// Type alias for a risk alert database model.
///
/// `resolved_at` is set exactly when `is_resolved` is true.
pub type RiskAlertModel = entity::risk_alert::Model;

pub type ResearchDataModel = entity::research_data::Model;
