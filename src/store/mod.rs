use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{MusicGenre, Neighborhood, UserProfile, Venue, Visit},
};

mod memory;
pub mod seed;

pub use memory::MemoryStore;

/// Optional filters for venue listings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VenueFilter {
    pub neighborhood: Option<Neighborhood>,
    pub genre: Option<MusicGenre>,
}

/// Read/write seam over the venue and user-activity store
///
/// The API layer depends on this trait rather than a concrete backend, so
/// the recommendation flow can be exercised against in-memory fixtures.
/// The scorer itself never touches the store; handlers fetch everything it
/// needs up front and pass plain data in.
#[async_trait]
pub trait VenueStore: Send + Sync {
    /// Approved venues, optionally filtered by neighbourhood and genre
    async fn list_venues(&self, filter: &VenueFilter) -> AppResult<Vec<Venue>>;

    /// Looks up a single venue by id, regardless of review status
    async fn get_venue(&self, venue_id: Uuid) -> AppResult<Option<Venue>>;

    /// Adds a venue to the catalog
    async fn insert_venue(&self, venue: Venue) -> AppResult<()>;

    /// The user's taste profile, if they have saved one
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>>;

    /// Creates or replaces the user's taste profile
    async fn upsert_profile(&self, profile: UserProfile) -> AppResult<()>;

    /// Records a favorite; favoriting the same venue twice is a no-op
    async fn add_favorite(&self, user_id: Uuid, venue_id: Uuid) -> AppResult<()>;

    /// Full venue records for everything the user has favorited
    async fn favorite_venues(&self, user_id: Uuid) -> AppResult<Vec<Venue>>;

    /// Records a logged visit
    async fn add_visit(&self, visit: Visit) -> AppResult<()>;

    /// Venues the user visited with an experience rating of 7 or higher,
    /// deduplicated by venue id
    async fn high_rated_visited_venues(&self, user_id: Uuid) -> AppResult<Vec<Venue>>;

    /// Approved venues the user has neither favorited nor visited (at any
    /// rating), deduplicated by venue id
    async fn candidate_venues(&self, user_id: Uuid) -> AppResult<Vec<Venue>>;
}
