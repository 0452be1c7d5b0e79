//! Conversation and message models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A thread between two or more users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub conversation_id: Uuid,
    pub participant_ids: Vec<Uuid>,
    pub created_utc: DateTime<Utc>,
    pub last_message_utc: Option<DateTime<Utc>>,
}

impl Conversation {
    pub fn new(participant_ids: Vec<Uuid>) -> Self {
        Self {
            conversation_id: Uuid::new_v4(),
            participant_ids,
            created_utc: Utc::now(),
            last_message_utc: None,
        }
    }
}

/// A single message inside a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub message_id: Uuid,
    pub conversation_id: Uuid,
    pub sender_id: Uuid,
    pub body: String,
    pub read: bool,
    pub sent_utc: DateTime<Utc>,
}

impl Message {
    pub fn new(conversation_id: Uuid, sender_id: Uuid, body: String) -> Self {
        Self {
            message_id: Uuid::new_v4(),
            conversation_id,
            sender_id,
            body,
            read: false,
            sent_utc: Utc::now(),
        }
    }
}
