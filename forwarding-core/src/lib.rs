//! forwarding-core: Shared infrastructure for the colisend workspace.
pub mod config;
pub mod error;
pub mod observability;
pub mod store;

pub use async_trait;
pub use serde;
pub use serde_json;
pub use tracing;
pub use validator;
