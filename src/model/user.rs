use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Staff classification recorded on every user.
///
/// Roles are carried in access tokens but no endpoint restricts access by role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Director,
    #[default]
    Volunteer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Director => "director",
            Self::Volunteer => "volunteer",
        }
    }

    /// Parses the lowercase role name used in tokens, `None` for unknown roles.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Self::Admin),
            "director" => Some(Self::Director),
            "volunteer" => Some(Self::Volunteer),
            _ => None,
        }
    }
}

impl From<entity::sea_orm_active_enums::UserRole> for UserRole {
    fn from(role: entity::sea_orm_active_enums::UserRole) -> Self {
        use entity::sea_orm_active_enums::UserRole as Db;

        match role {
            Db::Admin => Self::Admin,
            Db::Director => Self::Director,
            Db::Volunteer => Self::Volunteer,
        }
    }
}

impl From<UserRole> for entity::sea_orm_active_enums::UserRole {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => Self::Admin,
            UserRole::Director => Self::Director,
            UserRole::Volunteer => Self::Volunteer,
        }
    }
}

/// A staff user as exposed by the API, without the password hash
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            role: user.role.into(),
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}
