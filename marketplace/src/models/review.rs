//! Review model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Rating left by one user about another after a shipment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub review_id: Uuid,
    pub author_id: Uuid,
    pub subject_id: Uuid,
    pub package_id: Option<Uuid>,
    /// Stars, always within 1..=5.
    pub rating: u8,
    pub comment: String,
    pub created_utc: DateTime<Utc>,
}

impl Review {
    /// Create a review; out-of-range ratings are clamped into 1..=5.
    pub fn new(input: CreateReview) -> Self {
        Self {
            review_id: Uuid::new_v4(),
            author_id: input.author_id,
            subject_id: input.subject_id,
            package_id: input.package_id,
            rating: input.rating.clamp(1, 5),
            comment: input.comment,
            created_utc: Utc::now(),
        }
    }
}

/// Input for creating a review.
#[derive(Debug, Clone)]
pub struct CreateReview {
    pub author_id: Uuid,
    pub subject_id: Uuid,
    pub package_id: Option<Uuid>,
    pub rating: u8,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_is_clamped() {
        let base = CreateReview {
            author_id: Uuid::new_v4(),
            subject_id: Uuid::new_v4(),
            package_id: None,
            rating: 9,
            comment: String::new(),
        };

        assert_eq!(Review::new(base.clone()).rating, 5);
        assert_eq!(Review::new(CreateReview { rating: 0, ..base }).rating, 1);
    }
}
