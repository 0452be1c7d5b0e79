//! access: role-based permission resolution for the colisend marketplace.
pub mod models;
pub mod services;

pub use models::{Permission, Role};
pub use services::{
    can_manage_user, has_all_permissions, has_any_permission, has_permission,
    permissions_for_role,
};
