//! Role model.

use serde::{Deserialize, Serialize};

/// Platform role. Permissions attach to roles, never to individual users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Sender,
    Transporter,
    Admin,
    Superadmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Sender => "sender",
            Role::Transporter => "transporter",
            Role::Admin => "admin",
            Role::Superadmin => "superadmin",
        }
    }

    /// Unknown labels fall back to the least-privileged role.
    pub fn from_string(s: &str) -> Self {
        match s {
            "transporter" => Role::Transporter,
            "admin" => Role::Admin,
            "superadmin" => Role::Superadmin,
            _ => Role::Sender,
        }
    }
}
