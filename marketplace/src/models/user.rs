//! User model.

use access::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Pending,
    Active,
    Suspended,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Pending => "pending",
            UserStatus::Active => "active",
            UserStatus::Suspended => "suspended",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "active" => UserStatus::Active,
            "suspended" => UserStatus::Suspended,
            _ => UserStatus::Pending,
        }
    }
}

/// Platform account record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
    pub status: UserStatus,
    pub created_utc: DateTime<Utc>,
    pub updated_utc: DateTime<Utc>,
}

impl User {
    /// Create a new account in pending state.
    pub fn new(full_name: String, email: String, phone: Option<String>, role: Role) -> Self {
        let now = Utc::now();
        Self {
            user_id: Uuid::new_v4(),
            full_name,
            email,
            phone,
            role,
            status: UserStatus::Pending,
            created_utc: now,
            updated_utc: now,
        }
    }
}

/// Input for creating a user.
#[derive(Debug, Clone, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "full name must not be empty"))]
    pub full_name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
}

/// Input for updating a user. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
}
