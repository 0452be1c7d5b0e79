//! Permission resolution tests for access.

use access::{
    can_manage_user, has_all_permissions, has_any_permission, has_permission,
    permissions_for_role, Permission, Role,
};

#[test]
fn superadmin_set_is_superset_of_admin_set() {
    let admin = permissions_for_role(Role::Admin);
    let superadmin = permissions_for_role(Role::Superadmin);

    assert!(admin.is_subset(superadmin));
    assert!(admin.len() < superadmin.len());
}

#[test]
fn admin_set_is_superset_of_empty_marketplace_sets() {
    let admin = permissions_for_role(Role::Admin);

    assert!(permissions_for_role(Role::Sender).is_subset(admin));
    assert!(permissions_for_role(Role::Transporter).is_subset(admin));
    assert!(permissions_for_role(Role::Sender).is_empty());
    assert!(permissions_for_role(Role::Transporter).is_empty());
}

#[test]
fn superadmin_holds_every_capability() {
    let superadmin = permissions_for_role(Role::Superadmin);
    assert_eq!(superadmin.len(), Permission::ALL.len());
    for permission in Permission::ALL {
        assert!(has_permission(Role::Superadmin, permission));
    }
}

#[test]
fn admin_holds_everything_but_admin_management() {
    for permission in Permission::ALL {
        assert_eq!(
            has_permission(Role::Admin, permission),
            !permission.is_admin_management(),
            "admin grant wrong for {permission:?}"
        );
    }
}

#[test]
fn resolution_is_stable_across_calls() {
    assert_eq!(
        permissions_for_role(Role::Admin),
        permissions_for_role(Role::Admin)
    );
}

#[test]
fn has_any_requires_one_match() {
    let wanted = [Permission::ViewAdmins, Permission::ViewUsers];

    assert!(has_any_permission(Role::Admin, &wanted));
    assert!(has_any_permission(Role::Superadmin, &wanted));
    assert!(!has_any_permission(Role::Sender, &wanted));
}

#[test]
fn has_all_requires_every_match() {
    let wanted = [Permission::ViewAdmins, Permission::ViewUsers];

    assert!(!has_all_permissions(Role::Admin, &wanted));
    assert!(has_all_permissions(Role::Superadmin, &wanted));
    assert!(has_all_permissions(
        Role::Admin,
        &[Permission::ViewUsers, Permission::EditUser]
    ));
}

#[test]
fn empty_requests_resolve_vacuously() {
    // No permission requested: nothing can match, everything holds.
    assert!(!has_any_permission(Role::Superadmin, &[]));
    assert!(has_all_permissions(Role::Sender, &[]));
}

#[test]
fn user_management_matrix() {
    assert!(can_manage_user(Role::Superadmin, Role::Admin));
    assert!(can_manage_user(Role::Superadmin, Role::Superadmin));
    assert!(can_manage_user(Role::Admin, Role::Sender));
    assert!(!can_manage_user(Role::Admin, Role::Admin));
    assert!(!can_manage_user(Role::Transporter, Role::Sender));
    assert!(!can_manage_user(Role::Sender, Role::Sender));
}
