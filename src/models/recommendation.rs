use serde::{Deserialize, Serialize};

use super::Venue;

/// The five weighted sub-scores behind a recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ComponentScores {
    /// Overlap between the user's preferred genres and the venue's
    pub music_match: f64,
    /// Match against the user's ranked neighbourhood choices
    pub neighborhood_match: f64,
    /// Feature similarity to the user's liked venues
    pub similarity: f64,
    /// Bonus for venues unlike what the user already knows
    pub exploration: f64,
    /// The venue's community service rating
    pub community: f64,
}

/// A scored, annotated recommendation for one candidate venue
///
/// Built fresh per request and never persisted. `total_score` is the
/// weighted sum of the components, rounded to one decimal; `reasoning`
/// collects the human-readable justifications in component evaluation
/// order (music, neighborhood, similarity, exploration, community).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationScore {
    /// The recommended venue
    pub venue: Venue,
    /// Weighted total, rounded to one decimal place
    pub total_score: f64,
    /// The component sub-scores the total was derived from
    pub components: ComponentScores,
    /// Why the venue scored the way it did, in evaluation order
    pub reasoning: Vec<String>,
}
