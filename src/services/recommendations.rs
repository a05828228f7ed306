use crate::models::{RecommendationScore, UserProfile, Venue};

use super::scoring;

/// Number of recommendations returned when the caller does not ask for a
/// specific count
pub const DEFAULT_LIMIT: usize = 10;

/// Generates personalized venue recommendations
///
/// Scores every candidate against the user's profile and liked venues
/// (favorites plus high-rated visits, treated uniformly), sorts descending
/// by total score and truncates to `limit` after sorting. The sort is
/// stable, so tied venues keep their original candidate order and repeated
/// invocations over the same input produce identical output.
pub fn recommend_venues(
    candidates: &[Venue],
    profile: &UserProfile,
    favorites: &[Venue],
    high_rated_visits: &[Venue],
    limit: usize,
) -> Vec<RecommendationScore> {
    let liked: Vec<&Venue> = favorites.iter().chain(high_rated_visits.iter()).collect();

    let mut scored: Vec<RecommendationScore> = candidates
        .iter()
        .map(|venue| scoring::score_venue(venue, profile, &liked))
        .collect();

    scored.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(limit);

    tracing::debug!(
        candidates = candidates.len(),
        returned = scored.len(),
        user_id = %profile.user_id,
        "scored venue recommendations"
    );

    scored
}
