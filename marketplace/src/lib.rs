//! marketplace: domain records and directory plumbing for colisend.
pub mod models;
pub mod services;

pub use services::Directory;
