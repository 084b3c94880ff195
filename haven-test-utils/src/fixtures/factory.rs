//! Factory functions for generating mock database models.
//!
//! Provides pure functions for creating database models with standard test values. These are
//! in-memory model instances that don't require database interaction, suitable for unit tests
//! of conversions and invariants.

use chrono::Utc;
use entity::sea_orm_active_enums::{ResidentStatus, RiskLevel, UserRole};

use crate::model::{ResidentModel, RiskAlertModel, ShelterModel, UserModel};

/// Create a mock user database model for testing.
///
/// The password hash is not a valid bcrypt hash; use the user fixtures when a
/// verifiable password is required.
pub fn mock_user_model(id: i32, username: &str, role: UserRole) -> UserModel {
    let now = Utc::now().naive_utc();
    UserModel {
        id,
        username: username.to_string(),
        email: None,
        full_name: None,
        role,
        hashed_password: "not-a-bcrypt-hash".to_string(),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock shelter database model for testing.
pub fn mock_shelter_model(id: i32, capacity: i32, current_occupancy: i32) -> ShelterModel {
    let now = Utc::now().naive_utc();
    ShelterModel {
        id,
        name: format!("Shelter {}", id),
        location: "Test District".to_string(),
        capacity,
        current_occupancy,
        phone: "+1 555 0100".to_string(),
        email: "shelter@example.org".to_string(),
        address: "1 Test Street".to_string(),
        manager_id: None,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock resident database model for testing.
pub fn mock_resident_model(id: i32, shelter_id: i32) -> ResidentModel {
    ResidentModel {
        id,
        name: "Test Resident".to_string(),
        age: 34,
        gender: "female".to_string(),
        phone: None,
        shelter_id,
        status: ResidentStatus::Active,
        check_in_date: Utc::now().naive_utc(),
        check_out_date: None,
    }
}

/// Create a mock risk alert database model for testing.
pub fn mock_alert_model(id: i32, shelter_id: i32, created_by_id: i32) -> RiskAlertModel {
    RiskAlertModel {
        id,
        title: "Flooding".to_string(),
        description: "Water in the basement".to_string(),
        risk_level: RiskLevel::High,
        shelter_id,
        is_resolved: false,
        created_by_id,
        created_at: Utc::now().naive_utc(),
        resolved_at: None,
    }
}
