use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MusicGenre, Neighborhood};

/// A user's taste profile: preferred genres and up to three ranked
/// neighbourhood choices
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// The user this profile belongs to
    pub user_id: Uuid,
    /// Genres the user wants to hear
    pub preferred_genres: Vec<MusicGenre>,
    /// First-choice neighbourhood
    pub first_choice_area: Option<Neighborhood>,
    /// Second-choice neighbourhood
    pub second_choice_area: Option<Neighborhood>,
    /// Third-choice neighbourhood
    pub third_choice_area: Option<Neighborhood>,
}

impl UserProfile {
    /// Creates an empty profile for a user
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            preferred_genres: Vec::new(),
            first_choice_area: None,
            second_choice_area: None,
            third_choice_area: None,
        }
    }

    /// Adds a preferred genre, ignoring duplicates
    pub fn add_genre(&mut self, genre: MusicGenre) {
        if !self.preferred_genres.contains(&genre) {
            self.preferred_genres.push(genre);
        }
    }

    /// Neighbourhood choices in priority order, skipping unset slots
    pub fn area_choices(&self) -> impl Iterator<Item = Neighborhood> + '_ {
        [
            self.first_choice_area,
            self.second_choice_area,
            self.third_choice_area,
        ]
        .into_iter()
        .flatten()
    }
}
