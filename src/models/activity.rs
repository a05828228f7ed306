use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum self-reported experience rating for a visit to count as
/// "high-rated" when building the liked-venue set
pub const HIGH_RATED_MIN: u8 = 7;

/// A venue the user has explicitly favorited
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Favorite {
    pub user_id: Uuid,
    pub venue_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    /// Creates a favorite stamped with the current time
    pub fn new(user_id: Uuid, venue_id: Uuid) -> Self {
        Self {
            user_id,
            venue_id,
            created_at: Utc::now(),
        }
    }
}

/// A logged visit with a self-reported experience rating on a 1-10 scale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Visit {
    pub user_id: Uuid,
    pub venue_id: Uuid,
    /// Experience rating, 1-10
    pub rating: u8,
    pub visited_at: DateTime<Utc>,
}

impl Visit {
    /// Creates a visit stamped with the current time
    pub fn new(user_id: Uuid, venue_id: Uuid, rating: u8) -> Self {
        Self {
            user_id,
            venue_id,
            rating,
            visited_at: Utc::now(),
        }
    }

    /// Whether this visit counts toward the user's liked venues
    pub fn is_high_rated(&self) -> bool {
        self.rating >= HIGH_RATED_MIN
    }
}
