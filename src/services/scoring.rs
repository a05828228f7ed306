use std::collections::HashSet;

use crate::models::{CapacitySize, ComponentScores, MusicGenre, RecommendationScore, UserProfile, Venue};

/// Revision tag for the scoring algorithm
///
/// Returned with every recommendation response so downstream consumers can
/// detect when the scoring logic changes.
pub const ALGORITHM_VERSION: &str = "v1";

/// Component weights, summing to 1.0
const MUSIC_WEIGHT: f64 = 0.30;
const NEIGHBORHOOD_WEIGHT: f64 = 0.25;
const SIMILARITY_WEIGHT: f64 = 0.20;
const EXPLORATION_WEIGHT: f64 = 0.15;
const COMMUNITY_WEIGHT: f64 = 0.10;

/// Fallback when a component has no data to score against
const NEUTRAL_SCORE: f64 = 5.0;

/// One component's contribution: a score and the justifications it produced
///
/// Components never share an accumulator; the aggregator concatenates the
/// reason lists in fixed evaluation order.
#[derive(Debug, Clone, PartialEq)]
struct ComponentResult {
    score: f64,
    reasons: Vec<String>,
}

impl ComponentResult {
    fn plain(score: f64) -> Self {
        Self {
            score,
            reasons: Vec::new(),
        }
    }

    fn with_reason(score: f64, reason: String) -> Self {
        Self {
            score,
            reasons: vec![reason],
        }
    }

    fn neutral() -> Self {
        Self::plain(NEUTRAL_SCORE)
    }
}

fn join_genres(genres: &[MusicGenre]) -> String {
    genres
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Scores how well the venue's programming overlaps the user's preferred
/// genres (range 4-10, neutral 5 when either side lists no genres)
fn music_match(profile: &UserProfile, venue: &Venue) -> ComponentResult {
    if profile.preferred_genres.is_empty() || venue.music_genres.is_empty() {
        return ComponentResult::neutral();
    }

    let matching: Vec<MusicGenre> = profile
        .preferred_genres
        .iter()
        .copied()
        .filter(|genre| venue.plays(*genre))
        .collect();
    let match_pct = matching.len() as f64 / profile.preferred_genres.len() as f64;

    if match_pct >= 0.5 {
        ComponentResult::with_reason(
            8.0 + match_pct * 2.0,
            format!("Great music match: {}", join_genres(&matching)),
        )
    } else if match_pct > 0.0 {
        ComponentResult::with_reason(
            6.0 + match_pct * 2.0,
            format!("Some music overlap: {}", join_genres(&matching)),
        )
    } else {
        ComponentResult::with_reason(
            4.0,
            format!(
                "Different music style for exploration ({})",
                join_genres(&venue.music_genres)
            ),
        )
    }
}

/// Scores the venue's neighbourhood against the user's ranked choices
/// (10/8/6 for first/second/third choice, 4 for a miss, neutral 5 when the
/// venue has no neighbourhood on record)
fn neighborhood_match(profile: &UserProfile, venue: &Venue) -> ComponentResult {
    let Some(area) = venue.neighborhood else {
        return ComponentResult::neutral();
    };

    if profile.first_choice_area == Some(area) {
        ComponentResult::with_reason(10.0, format!("Located in your primary area: {}", area))
    } else if profile.second_choice_area == Some(area) {
        ComponentResult::with_reason(8.0, format!("Located in your secondary area: {}", area))
    } else if profile.third_choice_area == Some(area) {
        ComponentResult::with_reason(6.0, format!("Located in your third preferred area: {}", area))
    } else {
        // still some points for exploration
        ComponentResult::plain(4.0)
    }
}

/// Scores feature similarity against the user's liked venues
///
/// Each liked venue contributes a 0-4 match count (patio, rooftop,
/// dancefloor, same capacity bucket) and, when anything matched, its own
/// reasoning line. The counts are averaged and mapped onto 4-10.
fn similarity_to_liked(venue: &Venue, liked: &[&Venue]) -> ComponentResult {
    if liked.is_empty() {
        return ComponentResult::neutral();
    }

    let mut total_matches = 0usize;
    let mut reasons = Vec::new();

    for other in liked {
        let mut shared: Vec<&str> = Vec::new();
        if venue.has_patio && other.has_patio {
            shared.push("patio");
        }
        if venue.has_rooftop && other.has_rooftop {
            shared.push("rooftop");
        }
        if venue.has_dancefloor && other.has_dancefloor {
            shared.push("dancefloor");
        }
        if venue.capacity == other.capacity {
            shared.push("similar size");
        }

        total_matches += shared.len();
        if !shared.is_empty() {
            reasons.push(format!(
                "Similar features to your favorites: {}",
                shared.join(", ")
            ));
        }
    }

    let avg_similarity = total_matches as f64 / liked.len() as f64;
    ComponentResult {
        score: (avg_similarity * 2.0 + 4.0).min(10.0),
        reasons,
    }
}

/// Scores how much the venue would be a new experience relative to the
/// user's liked venues (range 5-10, neutral 5 with nothing to compare to)
fn exploration_bonus(venue: &Venue, liked: &[&Venue]) -> ComponentResult {
    if liked.is_empty() {
        return ComponentResult::neutral();
    }

    let mut score: f64 = 5.0;
    let mut reasons = Vec::new();

    let liked_vibes: HashSet<&str> = liked
        .iter()
        .filter_map(|other| other.typical_vibe.as_deref())
        .filter(|vibe| !vibe.is_empty())
        .collect();
    let liked_capacities: HashSet<CapacitySize> =
        liked.iter().map(|other| other.capacity).collect();

    if let Some(vibe) = venue.typical_vibe.as_deref().filter(|vibe| !vibe.is_empty()) {
        if !liked_vibes.contains(vibe) {
            score += 2.0;
            reasons.push(format!("New experience: {}", vibe));
        }
    }

    if !liked_capacities.contains(&venue.capacity) {
        score += 1.0;
    }

    if venue.has_rooftop && !liked.iter().any(|other| other.has_rooftop) {
        score += 1.0;
        reasons.push("New feature: rooftop".to_string());
    }

    if venue.has_live_music() && !liked.iter().any(|other| other.has_live_music()) {
        score += 1.0;
        reasons.push("New feature: live music".to_string());
    }

    ComponentResult {
        score: score.min(10.0),
        reasons,
    }
}

/// Passes the community service rating through unclamped, defaulting to
/// neutral when the rating is absent or zero
fn community_score(venue: &Venue) -> ComponentResult {
    let rating = match venue.service_rating {
        Some(rating) if rating > 0.0 => rating,
        _ => NEUTRAL_SCORE,
    };

    if rating >= 8.0 {
        ComponentResult::with_reason(
            rating,
            format!("Highly rated by community ({}/10)", format_rating(rating)),
        )
    } else {
        ComponentResult::plain(rating)
    }
}

/// Renders a rating without a trailing ".0" (9.0 -> "9", 8.5 -> "8.5")
fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{}", rating as i64)
    } else {
        format!("{}", rating)
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Scores a single candidate venue for a user
///
/// `liked` is the combined set of favorited and high-rated visited venues.
/// The total is the weighted sum of the five components rounded to one
/// decimal; reasoning strings keep component evaluation order.
pub fn score_venue(venue: &Venue, profile: &UserProfile, liked: &[&Venue]) -> RecommendationScore {
    let music = music_match(profile, venue);
    let neighborhood = neighborhood_match(profile, venue);
    let similarity = similarity_to_liked(venue, liked);
    let exploration = exploration_bonus(venue, liked);
    let community = community_score(venue);

    let components = ComponentScores {
        music_match: music.score,
        neighborhood_match: neighborhood.score,
        similarity: similarity.score,
        exploration: exploration.score,
        community: community.score,
    };

    let total = components.music_match * MUSIC_WEIGHT
        + components.neighborhood_match * NEIGHBORHOOD_WEIGHT
        + components.similarity * SIMILARITY_WEIGHT
        + components.exploration * EXPLORATION_WEIGHT
        + components.community * COMMUNITY_WEIGHT;

    let mut reasoning = Vec::new();
    for component in [music, neighborhood, similarity, exploration, community] {
        reasoning.extend(component.reasons);
    }

    RecommendationScore {
        venue: venue.clone(),
        total_score: round_to_tenth(total),
        components,
        reasoning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CoverAmount, CoverFrequency, DayOfWeek, Neighborhood, VenueStatus};

    fn venue(name: &str) -> Venue {
        Venue::new(name.to_string(), CapacitySize::Medium)
    }

    fn profile_with_genres(genres: &[MusicGenre]) -> UserProfile {
        let mut profile = UserProfile::new(uuid::Uuid::new_v4());
        for genre in genres {
            profile.add_genre(*genre);
        }
        profile
    }

    #[test]
    fn test_music_full_overlap_scores_ten() {
        let profile = profile_with_genres(&[MusicGenre::House, MusicGenre::Edm]);
        let mut candidate = venue("Rebel");
        candidate.music_genres = vec![MusicGenre::House, MusicGenre::Edm];

        let result = music_match(&profile, &candidate);
        assert_eq!(result.score, 10.0);
        assert_eq!(result.reasons, vec!["Great music match: House, EDM"]);
    }

    #[test]
    fn test_music_half_overlap() {
        let profile = profile_with_genres(&[MusicGenre::House, MusicGenre::Techno]);
        let mut candidate = venue("Coda");
        candidate.music_genres = vec![MusicGenre::House];

        let result = music_match(&profile, &candidate);
        assert_eq!(result.score, 9.0); // 8 + 0.5 * 2
        assert_eq!(result.reasons, vec!["Great music match: House"]);
    }

    #[test]
    fn test_music_partial_overlap_below_half() {
        let profile = profile_with_genres(&[
            MusicGenre::House,
            MusicGenre::Techno,
            MusicGenre::Jazz,
            MusicGenre::Rock,
        ]);
        let mut candidate = venue("Reposado");
        candidate.music_genres = vec![MusicGenre::Jazz];

        let result = music_match(&profile, &candidate);
        assert_eq!(result.score, 6.5); // 6 + 0.25 * 2
        assert_eq!(result.reasons, vec!["Some music overlap: Jazz"]);
    }

    #[test]
    fn test_music_no_overlap_scores_four() {
        let profile = profile_with_genres(&[MusicGenre::House]);
        let mut candidate = venue("Sneaky Dee's");
        candidate.music_genres = vec![MusicGenre::Rock, MusicGenre::Indie];

        let result = music_match(&profile, &candidate);
        assert_eq!(result.score, 4.0);
        assert_eq!(
            result.reasons,
            vec!["Different music style for exploration (Rock, Indie)"]
        );
    }

    #[test]
    fn test_music_neutral_without_preferences() {
        let profile = UserProfile::new(uuid::Uuid::new_v4());
        let mut candidate = venue("Rebel");
        candidate.music_genres = vec![MusicGenre::Edm];

        let result = music_match(&profile, &candidate);
        assert_eq!(result.score, 5.0);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_music_neutral_when_venue_lists_no_genres() {
        let profile = profile_with_genres(&[MusicGenre::House]);
        let candidate = venue("Unlisted");

        let result = music_match(&profile, &candidate);
        assert_eq!(result.score, 5.0);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_neighborhood_choice_ladder() {
        let mut profile = UserProfile::new(uuid::Uuid::new_v4());
        profile.first_choice_area = Some(Neighborhood::KingWest);
        profile.second_choice_area = Some(Neighborhood::Ossington);
        profile.third_choice_area = Some(Neighborhood::QueenWest);

        let mut candidate = venue("Lost & Found");
        candidate.neighborhood = Some(Neighborhood::KingWest);
        let first = neighborhood_match(&profile, &candidate);
        assert_eq!(first.score, 10.0);
        assert_eq!(first.reasons, vec!["Located in your primary area: King West"]);

        candidate.neighborhood = Some(Neighborhood::Ossington);
        let second = neighborhood_match(&profile, &candidate);
        assert_eq!(second.score, 8.0);
        assert_eq!(
            second.reasons,
            vec!["Located in your secondary area: Ossington"]
        );

        candidate.neighborhood = Some(Neighborhood::QueenWest);
        let third = neighborhood_match(&profile, &candidate);
        assert_eq!(third.score, 6.0);
        assert_eq!(
            third.reasons,
            vec!["Located in your third preferred area: Queen West"]
        );

        candidate.neighborhood = Some(Neighborhood::Junction);
        let miss = neighborhood_match(&profile, &candidate);
        assert_eq!(miss.score, 4.0);
        assert!(miss.reasons.is_empty());
    }

    #[test]
    fn test_neighborhood_neutral_when_unknown() {
        let mut profile = UserProfile::new(uuid::Uuid::new_v4());
        profile.first_choice_area = Some(Neighborhood::KingWest);
        let candidate = venue("Pop-up");

        let result = neighborhood_match(&profile, &candidate);
        assert_eq!(result.score, 5.0);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_similarity_neutral_without_liked_venues() {
        let candidate = venue("Bar Raval");
        let result = similarity_to_liked(&candidate, &[]);
        assert_eq!(result.score, 5.0);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_similarity_counts_shared_features() {
        let mut candidate = venue("Track & Field");
        candidate.has_patio = true;
        candidate.has_dancefloor = true;

        let mut liked = venue("Get Well");
        liked.has_patio = true;
        liked.has_dancefloor = true;
        // same capacity bucket as the candidate: three matches total

        let result = similarity_to_liked(&candidate, &[&liked]);
        assert_eq!(result.score, 10.0); // min(3 * 2 + 4, 10)
        assert_eq!(
            result.reasons,
            vec!["Similar features to your favorites: patio, dancefloor, similar size"]
        );
    }

    #[test]
    fn test_similarity_emits_one_reason_per_liked_venue() {
        let mut candidate = venue("Bambi's");
        candidate.has_dancefloor = true;
        candidate.capacity = CapacitySize::Small;

        let mut liked_a = venue("A");
        liked_a.has_dancefloor = true;
        liked_a.capacity = CapacitySize::Large;
        let mut liked_b = venue("B");
        liked_b.capacity = CapacitySize::Small;
        let liked_c = venue("C"); // Medium, no feature flags: no matches

        let result = similarity_to_liked(&candidate, &[&liked_a, &liked_b, &liked_c]);
        // (1 + 1 + 0) / 3 matches on average
        let expected = (2.0 / 3.0) * 2.0 + 4.0;
        assert!((result.score - expected).abs() < 1e-12);
        assert_eq!(
            result.reasons,
            vec![
                "Similar features to your favorites: dancefloor",
                "Similar features to your favorites: similar size",
            ]
        );
    }

    #[test]
    fn test_similarity_average_is_capped() {
        let mut candidate = venue("Everything");
        candidate.has_patio = true;
        candidate.has_rooftop = true;
        candidate.has_dancefloor = true;

        let mut liked = venue("Twin");
        liked.has_patio = true;
        liked.has_rooftop = true;
        liked.has_dancefloor = true;

        let result = similarity_to_liked(&candidate, &[&liked]);
        assert_eq!(result.score, 10.0); // 4 matches would map to 12 uncapped
    }

    #[test]
    fn test_exploration_neutral_without_liked_venues() {
        let candidate = venue("New Spot");
        let result = exploration_bonus(&candidate, &[]);
        assert_eq!(result.score, 5.0);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_exploration_bonuses_accumulate() {
        let mut candidate = venue("Lavelle");
        candidate.typical_vibe = Some("upscale rooftop lounge".to_string());
        candidate.capacity = CapacitySize::Large;
        candidate.has_rooftop = true;
        candidate.live_music_days = vec![DayOfWeek::Friday];

        let mut liked = venue("Dive");
        liked.typical_vibe = Some("grimy dive bar".to_string());
        liked.capacity = CapacitySize::Small;

        let result = exploration_bonus(&candidate, &[&liked]);
        // 5 + 2 (vibe) + 1 (capacity) + 1 (rooftop) + 1 (live music), capped at 10
        assert_eq!(result.score, 10.0);
        assert_eq!(
            result.reasons,
            vec![
                "New experience: upscale rooftop lounge",
                "New feature: rooftop",
                "New feature: live music",
            ]
        );
    }

    #[test]
    fn test_exploration_no_bonus_for_familiar_venue() {
        let mut candidate = venue("Same Old");
        candidate.typical_vibe = Some("cocktail lounge".to_string());

        let mut liked = venue("Known");
        liked.typical_vibe = Some("cocktail lounge".to_string());
        // same Medium capacity bucket as the candidate

        let result = exploration_bonus(&candidate, &[&liked]);
        assert_eq!(result.score, 5.0);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_exploration_ignores_missing_vibe() {
        let mut candidate = venue("Quiet");
        candidate.capacity = CapacitySize::Intimate;

        let liked = venue("Known"); // Medium

        let result = exploration_bonus(&candidate, &[&liked]);
        assert_eq!(result.score, 6.0); // capacity bonus only
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_community_passes_rating_through() {
        let mut candidate = venue("Mahjong Bar");
        candidate.service_rating = Some(7.5);

        let result = community_score(&candidate);
        assert_eq!(result.score, 7.5);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_community_highlights_high_ratings() {
        let mut candidate = venue("Civil Liberties");
        candidate.service_rating = Some(8.5);

        let result = community_score(&candidate);
        assert_eq!(result.score, 8.5);
        assert_eq!(result.reasons, vec!["Highly rated by community (8.5/10)"]);
    }

    #[test]
    fn test_community_formats_whole_ratings_without_decimal() {
        let mut candidate = venue("Rebel");
        candidate.service_rating = Some(9.0);

        let result = community_score(&candidate);
        assert_eq!(result.reasons, vec!["Highly rated by community (9/10)"]);
    }

    #[test]
    fn test_community_defaults_when_rating_missing_or_zero() {
        let unrated = venue("Unrated");
        assert_eq!(community_score(&unrated).score, 5.0);

        let mut zeroed = venue("Zeroed");
        zeroed.service_rating = Some(0.0);
        assert_eq!(community_score(&zeroed).score, 5.0);
    }

    #[test]
    fn test_score_venue_matches_worked_example() {
        let mut profile = profile_with_genres(&[MusicGenre::House, MusicGenre::Edm]);
        profile.first_choice_area = Some(Neighborhood::KingWest);

        let mut candidate = venue("EFS");
        candidate.music_genres = vec![MusicGenre::House, MusicGenre::Edm];
        candidate.neighborhood = Some(Neighborhood::KingWest);
        candidate.service_rating = Some(9.0);

        let scored = score_venue(&candidate, &profile, &[]);
        assert_eq!(scored.components.music_match, 10.0);
        assert_eq!(scored.components.neighborhood_match, 10.0);
        assert_eq!(scored.components.similarity, 5.0);
        assert_eq!(scored.components.exploration, 5.0);
        assert_eq!(scored.components.community, 9.0);
        // 10*0.30 + 10*0.25 + 5*0.20 + 5*0.15 + 9*0.10 = 8.15 -> 8.2
        assert_eq!(scored.total_score, 8.2);
        assert_eq!(
            scored.reasoning,
            vec![
                "Great music match: House, EDM",
                "Located in your primary area: King West",
                "Highly rated by community (9/10)",
            ]
        );
    }

    #[test]
    fn test_total_is_weighted_sum_rounded() {
        let mut profile = profile_with_genres(&[MusicGenre::Techno]);
        profile.first_choice_area = Some(Neighborhood::Junction);

        let mut candidate = venue("Standard Time");
        candidate.music_genres = vec![MusicGenre::Jazz];
        candidate.neighborhood = Some(Neighborhood::Leslieville);
        candidate.service_rating = Some(6.0);
        candidate.status = VenueStatus::Approved;
        candidate.cover_frequency = CoverFrequency::SpecialEvents;
        candidate.cover_amount = CoverAmount::Low;

        let mut liked = venue("Motel");
        liked.capacity = CapacitySize::Small;
        liked.typical_vibe = Some("loud and sweaty".to_string());

        let scored = score_venue(&candidate, &profile, &[&liked]);
        let expected = scored.components.music_match * 0.30
            + scored.components.neighborhood_match * 0.25
            + scored.components.similarity * 0.20
            + scored.components.exploration * 0.15
            + scored.components.community * 0.10;
        assert_eq!(scored.total_score, (expected * 10.0).round() / 10.0);
    }

    #[test]
    fn test_component_ranges_hold_across_inputs() {
        let profiles = [
            profile_with_genres(&[]),
            profile_with_genres(&[MusicGenre::House]),
            profile_with_genres(&[MusicGenre::House, MusicGenre::Latin, MusicGenre::Disco]),
        ];

        let mut wildcard = venue("Wildcard");
        wildcard.music_genres = vec![MusicGenre::Afrobeats, MusicGenre::House];
        wildcard.neighborhood = Some(Neighborhood::KensingtonMarket);
        wildcard.service_rating = Some(9.5);
        wildcard.has_patio = true;
        wildcard.has_rooftop = true;
        wildcard.has_dancefloor = true;
        wildcard.typical_vibe = Some("late night party".to_string());
        wildcard.live_music_days = vec![DayOfWeek::Saturday, DayOfWeek::Sunday];

        let mut liked = venue("Baseline");
        liked.has_patio = true;
        liked.capacity = CapacitySize::Large;

        for profile in &profiles {
            for liked_set in [vec![], vec![&liked]] {
                let scored = score_venue(&wildcard, profile, &liked_set);
                let c = &scored.components;
                assert!((4.0..=10.0).contains(&c.music_match));
                assert!((4.0..=10.0).contains(&c.neighborhood_match));
                assert!((4.0..=10.0).contains(&c.similarity));
                assert!((5.0..=10.0).contains(&c.exploration));
                assert_eq!(c.community, 9.5);
            }
        }
    }
}
