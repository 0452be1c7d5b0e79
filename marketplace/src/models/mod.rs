//! Domain models for marketplace.

mod message;
mod package;
mod review;
mod route;
mod user;

pub use message::{Conversation, Message};
pub use package::{CreatePackage, Package, PackageStatus, UpdatePackage};
pub use review::{CreateReview, Review};
pub use route::{CreateRoute, Route, RouteStatus, UpdateRoute};
pub use user::{CreateUser, UpdateUser, User, UserStatus};
