//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main haven crate to keep fixture signatures short.

pub type UserModel = entity::user::Model;

pub type ShelterModel = entity::shelter::Model;

pub type ResidentModel = entity::resident::Model;

pub type EventModel = entity::event::Model;

pub type RiskAlertModel = entity::risk_alert::Model;

pub type ResearchDataModel = entity::research_data::Model;
