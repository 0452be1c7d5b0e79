//! Permission model - the closed set of back-office capabilities.

use serde::{Deserialize, Serialize};

/// A back-office capability. Roles map to fixed subsets of this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    // User administration
    ViewUsers,
    CreateUser,
    EditUser,
    SuspendUser,
    DeleteUser,
    // Package oversight
    ViewAllPackages,
    CreatePackage,
    EditPackage,
    DeletePackage,
    // Route oversight
    ViewAllRoutes,
    CreateRoute,
    EditRoute,
    DeleteRoute,
    // Messaging moderation
    ViewAllConversations,
    ModerateMessages,
    DeleteMessage,
    // Review moderation
    ViewAllReviews,
    ModerateReviews,
    DeleteReview,
    // Statistics
    ViewStatistics,
    ViewRevenue,
    ExportReports,
    // Platform settings
    ViewSettings,
    EditSettings,
    ManageTariffs,
    // Admin management
    ViewAdmins,
    CreateAdmin,
    EditAdmin,
    DeleteAdmin,
    ManagePermissions,
}

impl Permission {
    /// Every capability, in declaration order.
    pub const ALL: [Permission; 30] = [
        Permission::ViewUsers,
        Permission::CreateUser,
        Permission::EditUser,
        Permission::SuspendUser,
        Permission::DeleteUser,
        Permission::ViewAllPackages,
        Permission::CreatePackage,
        Permission::EditPackage,
        Permission::DeletePackage,
        Permission::ViewAllRoutes,
        Permission::CreateRoute,
        Permission::EditRoute,
        Permission::DeleteRoute,
        Permission::ViewAllConversations,
        Permission::ModerateMessages,
        Permission::DeleteMessage,
        Permission::ViewAllReviews,
        Permission::ModerateReviews,
        Permission::DeleteReview,
        Permission::ViewStatistics,
        Permission::ViewRevenue,
        Permission::ExportReports,
        Permission::ViewSettings,
        Permission::EditSettings,
        Permission::ManageTariffs,
        Permission::ViewAdmins,
        Permission::CreateAdmin,
        Permission::EditAdmin,
        Permission::DeleteAdmin,
        Permission::ManagePermissions,
    ];

    /// Capabilities that touch admin accounts themselves.
    pub fn is_admin_management(&self) -> bool {
        matches!(
            self,
            Permission::ViewAdmins
                | Permission::CreateAdmin
                | Permission::EditAdmin
                | Permission::DeleteAdmin
                | Permission::ManagePermissions
        )
    }
}
