use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Favorite, UserProfile, Venue, Visit},
};

use super::{VenueFilter, VenueStore};

/// In-memory venue and activity store
///
/// Venues are kept in insertion order so listings and candidate sets are
/// reproducible across requests within a process.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    venues: Vec<Venue>,
    profiles: HashMap<Uuid, UserProfile>,
    favorites: HashMap<Uuid, Vec<Favorite>>,
    visits: HashMap<Uuid, Vec<Visit>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with the given venues
    pub fn with_venues(venues: Vec<Venue>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                venues,
                ..Inner::default()
            }),
        }
    }
}

fn matches_filter(venue: &Venue, filter: &VenueFilter) -> bool {
    if let Some(area) = filter.neighborhood {
        if venue.neighborhood != Some(area) {
            return false;
        }
    }
    if let Some(genre) = filter.genre {
        if !venue.plays(genre) {
            return false;
        }
    }
    true
}

#[async_trait]
impl VenueStore for MemoryStore {
    async fn list_venues(&self, filter: &VenueFilter) -> AppResult<Vec<Venue>> {
        let inner = self.inner.read().await;
        Ok(inner
            .venues
            .iter()
            .filter(|v| v.is_approved() && matches_filter(v, filter))
            .cloned()
            .collect())
    }

    async fn get_venue(&self, venue_id: Uuid) -> AppResult<Option<Venue>> {
        let inner = self.inner.read().await;
        Ok(inner.venues.iter().find(|v| v.id == venue_id).cloned())
    }

    async fn insert_venue(&self, venue: Venue) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner.venues.push(venue);
        Ok(())
    }

    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        let inner = self.inner.read().await;
        Ok(inner.profiles.get(&user_id).cloned())
    }

    async fn upsert_profile(&self, profile: UserProfile) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner.profiles.insert(profile.user_id, profile);
        Ok(())
    }

    async fn add_favorite(&self, user_id: Uuid, venue_id: Uuid) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        let favorites = inner.favorites.entry(user_id).or_default();
        if !favorites.iter().any(|f| f.venue_id == venue_id) {
            favorites.push(Favorite::new(user_id, venue_id));
        }
        Ok(())
    }

    async fn favorite_venues(&self, user_id: Uuid) -> AppResult<Vec<Venue>> {
        let inner = self.inner.read().await;
        let favorite_ids: Vec<Uuid> = inner
            .favorites
            .get(&user_id)
            .map(|favorites| favorites.iter().map(|f| f.venue_id).collect())
            .unwrap_or_default();
        Ok(inner
            .venues
            .iter()
            .filter(|v| favorite_ids.contains(&v.id))
            .cloned()
            .collect())
    }

    async fn add_visit(&self, visit: Visit) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner.visits.entry(visit.user_id).or_default().push(visit);
        Ok(())
    }

    async fn high_rated_visited_venues(&self, user_id: Uuid) -> AppResult<Vec<Venue>> {
        let inner = self.inner.read().await;
        let mut seen = HashSet::new();
        let high_rated_ids: Vec<Uuid> = inner
            .visits
            .get(&user_id)
            .map(|visits| {
                visits
                    .iter()
                    .filter(|v| v.is_high_rated())
                    .map(|v| v.venue_id)
                    .filter(|id| seen.insert(*id))
                    .collect()
            })
            .unwrap_or_default();
        Ok(inner
            .venues
            .iter()
            .filter(|v| high_rated_ids.contains(&v.id))
            .cloned()
            .collect())
    }

    async fn candidate_venues(&self, user_id: Uuid) -> AppResult<Vec<Venue>> {
        let inner = self.inner.read().await;
        let mut known: HashSet<Uuid> = HashSet::new();
        if let Some(favorites) = inner.favorites.get(&user_id) {
            known.extend(favorites.iter().map(|f| f.venue_id));
        }
        if let Some(visits) = inner.visits.get(&user_id) {
            known.extend(visits.iter().map(|v| v.venue_id));
        }
        Ok(inner
            .venues
            .iter()
            .filter(|v| v.is_approved() && !known.contains(&v.id))
            .cloned()
            .collect())
    }
}
