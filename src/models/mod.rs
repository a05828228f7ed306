mod activity;
mod profile;
mod recommendation;
mod venue;

pub use activity::{Favorite, Visit, HIGH_RATED_MIN};
pub use profile::UserProfile;
pub use recommendation::{ComponentScores, RecommendationScore};
pub use venue::{
    CapacitySize, CoverAmount, CoverFrequency, DayOfWeek, MusicGenre, Neighborhood, Venue,
    VenueStatus,
};
