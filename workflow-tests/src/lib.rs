//! Cross-crate workflow integration tests library.
//!
//! Provides shared setup for scenarios that exercise quoting, permission
//! gating, and directory plumbing together, the way the dashboards do.

use access::Role;
use anyhow::Result;
use forwarding_core::observability::init_logging;
use forwarding_core::store::MemoryStore;
use marketplace::models::{CreateUser, User};
use marketplace::Directory;
use std::sync::Arc;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        init_logging("workflow-tests", "warn");
    });
}

/// Context for workflow tests: a directory over a fresh store plus one
/// registered account per role.
pub struct WorkflowTestContext {
    pub directory: Directory,
    pub sender: User,
    pub transporter: User,
    pub admin: User,
    pub superadmin: User,
}

impl WorkflowTestContext {
    /// Create a new context with its own isolated store.
    pub async fn new() -> Result<Self> {
        init_tracing();

        let directory = Directory::new(Arc::new(MemoryStore::new()));

        let sender = directory
            .create_user(account("sender@colisend.test", Role::Sender))
            .await?;
        let transporter = directory
            .create_user(account("gp@colisend.test", Role::Transporter))
            .await?;
        let admin = directory
            .create_user(account("admin@colisend.test", Role::Admin))
            .await?;
        let superadmin = directory
            .create_user(account("root@colisend.test", Role::Superadmin))
            .await?;

        Ok(Self {
            directory,
            sender,
            transporter,
            admin,
            superadmin,
        })
    }
}

fn account(email: &str, role: Role) -> CreateUser {
    CreateUser {
        full_name: format!("{} account", role.as_str()),
        email: email.to_string(),
        phone: None,
        role,
    }
}
