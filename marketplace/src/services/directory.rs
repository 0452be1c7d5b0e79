//! Directory service for marketplace.
//!
//! Typed create/read/update/delete over the injected key-value store. The
//! store handle is passed in at construction; no component reaches for a
//! global.

use crate::models::{
    Conversation, CreatePackage, CreateReview, CreateRoute, CreateUser, Message, Package, Review,
    Route, UpdatePackage, UpdateRoute, UpdateUser, User,
};
use access::Role;
use chrono::Utc;
use forwarding_core::error::AppError;
use forwarding_core::store::{self, KeyValueStore};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

const USERS: &str = "users";
const PACKAGES: &str = "packages";
const ROUTES: &str = "routes";
const CONVERSATIONS: &str = "conversations";
const MESSAGES: &str = "messages";
const REVIEWS: &str = "reviews";

/// Typed access to every marketplace record collection.
#[derive(Clone)]
pub struct Directory {
    store: Arc<dyn KeyValueStore>,
}

impl Directory {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// Register a new account. Email addresses are unique across the platform.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create_user(&self, input: CreateUser) -> Result<User, AppError> {
        input.validate()?;

        let existing = store::list_typed::<User>(self.store(), USERS).await?;
        if existing
            .iter()
            .any(|user| user.email.eq_ignore_ascii_case(&input.email))
        {
            return Err(AppError::Conflict(anyhow::anyhow!(
                "email {} is already registered",
                input.email
            )));
        }

        let user = User::new(input.full_name, input.email, input.phone, input.role);
        store::put_typed(self.store(), USERS, &user.user_id.to_string(), &user).await?;

        info!(user_id = %user.user_id, role = user.role.as_str(), "user created");
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Uuid) -> Result<User, AppError> {
        store::get_typed(self.store(), USERS, &user_id.to_string())
            .await?
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("user {user_id} not found")))
    }

    #[instrument(skip(self, update))]
    pub async fn update_user(&self, user_id: Uuid, update: UpdateUser) -> Result<User, AppError> {
        let mut user = self.get_user(user_id).await?;

        if let Some(full_name) = update.full_name {
            user.full_name = full_name;
        }
        if let Some(phone) = update.phone {
            user.phone = Some(phone);
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(status) = update.status {
            user.status = status;
        }
        user.updated_utc = Utc::now();

        store::put_typed(self.store(), USERS, &user.user_id.to_string(), &user).await?;
        Ok(user)
    }

    /// Delete an account. Returns `false` when it did not exist.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: Uuid) -> Result<bool, AppError> {
        self.store().remove(USERS, &user_id.to_string()).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        store::list_typed(self.store(), USERS).await
    }

    pub async fn list_users_by_role(&self, role: Role) -> Result<Vec<User>, AppError> {
        Ok(self
            .list_users()
            .await?
            .into_iter()
            .filter(|user| user.role == role)
            .collect())
    }

    // =========================================================================
    // Package Operations
    // =========================================================================

    #[instrument(skip(self, input), fields(sender_id = %input.sender_id))]
    pub async fn create_package(&self, input: CreatePackage) -> Result<Package, AppError> {
        let package = Package::new(input);
        store::put_typed(
            self.store(),
            PACKAGES,
            &package.package_id.to_string(),
            &package,
        )
        .await?;

        info!(package_id = %package.package_id, tracking_code = %package.tracking_code, "package filed");
        Ok(package)
    }

    #[instrument(skip(self))]
    pub async fn get_package(&self, package_id: Uuid) -> Result<Package, AppError> {
        store::get_typed(self.store(), PACKAGES, &package_id.to_string())
            .await?
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("package {package_id} not found")))
    }

    #[instrument(skip(self, update))]
    pub async fn update_package(
        &self,
        package_id: Uuid,
        update: UpdatePackage,
    ) -> Result<Package, AppError> {
        let mut package = self.get_package(package_id).await?;

        if let Some(description) = update.description {
            package.description = description;
        }
        if let Some(weight_kg) = update.weight_kg {
            package.weight_kg = weight_kg;
        }
        if let Some(dimensions) = update.dimensions {
            package.dimensions = Some(dimensions);
        }
        if let Some(service_level) = update.service_level {
            package.service_level = service_level;
        }
        if let Some(destination) = update.destination {
            package.destination = destination;
        }
        if let Some(declared_value) = update.declared_value {
            package.declared_value = declared_value;
        }
        if let Some(status) = update.status {
            package.status = status;
        }
        package.updated_utc = Utc::now();

        store::put_typed(
            self.store(),
            PACKAGES,
            &package.package_id.to_string(),
            &package,
        )
        .await?;
        Ok(package)
    }

    #[instrument(skip(self))]
    pub async fn delete_package(&self, package_id: Uuid) -> Result<bool, AppError> {
        self.store().remove(PACKAGES, &package_id.to_string()).await
    }

    pub async fn list_packages(&self) -> Result<Vec<Package>, AppError> {
        store::list_typed(self.store(), PACKAGES).await
    }

    pub async fn list_packages_by_sender(&self, sender_id: Uuid) -> Result<Vec<Package>, AppError> {
        Ok(self
            .list_packages()
            .await?
            .into_iter()
            .filter(|package| package.sender_id == sender_id)
            .collect())
    }

    // =========================================================================
    // Route Operations
    // =========================================================================

    #[instrument(skip(self, input), fields(transporter_id = %input.transporter_id))]
    pub async fn create_route(&self, input: CreateRoute) -> Result<Route, AppError> {
        let route = Route::new(input);
        store::put_typed(self.store(), ROUTES, &route.route_id.to_string(), &route).await?;

        info!(route_id = %route.route_id, "route published");
        Ok(route)
    }

    #[instrument(skip(self))]
    pub async fn get_route(&self, route_id: Uuid) -> Result<Route, AppError> {
        store::get_typed(self.store(), ROUTES, &route_id.to_string())
            .await?
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("route {route_id} not found")))
    }

    #[instrument(skip(self, update))]
    pub async fn update_route(&self, route_id: Uuid, update: UpdateRoute) -> Result<Route, AppError> {
        let mut route = self.get_route(route_id).await?;

        if let Some(departure_utc) = update.departure_utc {
            route.departure_utc = departure_utc;
        }
        if let Some(arrival_utc) = update.arrival_utc {
            route.arrival_utc = arrival_utc;
        }
        if let Some(capacity_kg) = update.capacity_kg {
            route.capacity_kg = capacity_kg;
        }
        if let Some(price_per_kg) = update.price_per_kg {
            route.price_per_kg = price_per_kg;
        }
        if let Some(status) = update.status {
            route.status = status;
        }
        route.updated_utc = Utc::now();

        store::put_typed(self.store(), ROUTES, &route.route_id.to_string(), &route).await?;
        Ok(route)
    }

    #[instrument(skip(self))]
    pub async fn delete_route(&self, route_id: Uuid) -> Result<bool, AppError> {
        self.store().remove(ROUTES, &route_id.to_string()).await
    }

    pub async fn list_routes(&self) -> Result<Vec<Route>, AppError> {
        store::list_typed(self.store(), ROUTES).await
    }

    pub async fn list_routes_by_transporter(
        &self,
        transporter_id: Uuid,
    ) -> Result<Vec<Route>, AppError> {
        Ok(self
            .list_routes()
            .await?
            .into_iter()
            .filter(|route| route.transporter_id == transporter_id)
            .collect())
    }

    // =========================================================================
    // Messaging Operations
    // =========================================================================

    /// Open a conversation between two or more users.
    #[instrument(skip(self, participant_ids))]
    pub async fn open_conversation(
        &self,
        participant_ids: Vec<Uuid>,
    ) -> Result<Conversation, AppError> {
        if participant_ids.len() < 2 {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "a conversation needs at least two participants"
            )));
        }

        let conversation = Conversation::new(participant_ids);
        store::put_typed(
            self.store(),
            CONVERSATIONS,
            &conversation.conversation_id.to_string(),
            &conversation,
        )
        .await?;
        Ok(conversation)
    }

    #[instrument(skip(self))]
    pub async fn get_conversation(&self, conversation_id: Uuid) -> Result<Conversation, AppError> {
        store::get_typed(self.store(), CONVERSATIONS, &conversation_id.to_string())
            .await?
            .ok_or_else(|| {
                AppError::NotFound(anyhow::anyhow!("conversation {conversation_id} not found"))
            })
    }

    pub async fn list_conversations_for(&self, user_id: Uuid) -> Result<Vec<Conversation>, AppError> {
        let conversations: Vec<Conversation> =
            store::list_typed(self.store(), CONVERSATIONS).await?;
        Ok(conversations
            .into_iter()
            .filter(|conversation| conversation.participant_ids.contains(&user_id))
            .collect())
    }

    /// Append a message and bump the conversation's last-activity stamp.
    #[instrument(skip(self, body), fields(conversation_id = %conversation_id))]
    pub async fn send_message(
        &self,
        conversation_id: Uuid,
        sender_id: Uuid,
        body: String,
    ) -> Result<Message, AppError> {
        let mut conversation = self.get_conversation(conversation_id).await?;
        if !conversation.participant_ids.contains(&sender_id) {
            return Err(AppError::Forbidden(anyhow::anyhow!(
                "user {sender_id} is not a participant of conversation {conversation_id}"
            )));
        }

        let message = Message::new(conversation_id, sender_id, body);
        store::put_typed(
            self.store(),
            MESSAGES,
            &message.message_id.to_string(),
            &message,
        )
        .await?;

        conversation.last_message_utc = Some(message.sent_utc);
        store::put_typed(
            self.store(),
            CONVERSATIONS,
            &conversation.conversation_id.to_string(),
            &conversation,
        )
        .await?;

        Ok(message)
    }

    /// Messages of a conversation, oldest first.
    pub async fn list_messages(&self, conversation_id: Uuid) -> Result<Vec<Message>, AppError> {
        let mut messages: Vec<Message> = store::list_typed::<Message>(self.store(), MESSAGES)
            .await?
            .into_iter()
            .filter(|message| message.conversation_id == conversation_id)
            .collect();
        messages.sort_by_key(|message| message.sent_utc);
        Ok(messages)
    }

    // =========================================================================
    // Review Operations
    // =========================================================================

    #[instrument(skip(self, input), fields(subject_id = %input.subject_id))]
    pub async fn create_review(&self, input: CreateReview) -> Result<Review, AppError> {
        let review = Review::new(input);
        store::put_typed(
            self.store(),
            REVIEWS,
            &review.review_id.to_string(),
            &review,
        )
        .await?;
        Ok(review)
    }

    pub async fn list_reviews_for_subject(&self, subject_id: Uuid) -> Result<Vec<Review>, AppError> {
        let reviews: Vec<Review> = store::list_typed(self.store(), REVIEWS).await?;
        Ok(reviews
            .into_iter()
            .filter(|review| review.subject_id == subject_id)
            .collect())
    }

    /// Mean star rating for a user, `None` when unreviewed.
    pub async fn average_rating_for_subject(
        &self,
        subject_id: Uuid,
    ) -> Result<Option<f64>, AppError> {
        let reviews = self.list_reviews_for_subject(subject_id).await?;
        if reviews.is_empty() {
            return Ok(None);
        }

        let sum: u32 = reviews.iter().map(|review| u32::from(review.rating)).sum();
        Ok(Some(f64::from(sum) / reviews.len() as f64))
    }
}
