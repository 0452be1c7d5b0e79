//! Services module for access.

pub mod permissions;

pub use permissions::{
    can_manage_user, has_all_permissions, has_any_permission, has_permission,
    permissions_for_role,
};
