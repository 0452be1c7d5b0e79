//! Role-based permission resolution.
//!
//! The role-to-permission mapping is static and total: every role resolves
//! to a fixed set, permissions are never granted per user, and a failed
//! check is just `false`.

use crate::models::{Permission, Role};
use once_cell::sync::Lazy;
use std::collections::HashSet;

static ALL_PERMISSIONS: Lazy<HashSet<Permission>> =
    Lazy::new(|| Permission::ALL.into_iter().collect());

static ADMIN_PERMISSIONS: Lazy<HashSet<Permission>> = Lazy::new(|| {
    Permission::ALL
        .into_iter()
        .filter(|permission| !permission.is_admin_management())
        .collect()
});

static NO_PERMISSIONS: Lazy<HashSet<Permission>> = Lazy::new(HashSet::new);

/// The fixed permission set for a role. Total over `Role`.
pub fn permissions_for_role(role: Role) -> &'static HashSet<Permission> {
    match role {
        Role::Sender | Role::Transporter => &NO_PERMISSIONS,
        Role::Admin => &ADMIN_PERMISSIONS,
        Role::Superadmin => &ALL_PERMISSIONS,
    }
}

/// Whether the role holds a single permission.
pub fn has_permission(role: Role, permission: Permission) -> bool {
    permissions_for_role(role).contains(&permission)
}

/// Whether the role holds at least one of the requested permissions.
pub fn has_any_permission(role: Role, permissions: &[Permission]) -> bool {
    let granted = permissions_for_role(role);
    permissions.iter().any(|permission| granted.contains(permission))
}

/// Whether the role holds every requested permission.
pub fn has_all_permissions(role: Role, permissions: &[Permission]) -> bool {
    let granted = permissions_for_role(role);
    permissions.iter().all(|permission| granted.contains(permission))
}

/// Whether `actor` may administer the account of `target`.
///
/// Admins manage marketplace accounts only; touching another admin account
/// takes a superadmin.
pub fn can_manage_user(actor: Role, target: Role) -> bool {
    match actor {
        Role::Superadmin => true,
        Role::Admin => matches!(target, Role::Sender | Role::Transporter),
        Role::Sender | Role::Transporter => false,
    }
}
