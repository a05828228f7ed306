use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Music genres a venue programs and a user can prefer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MusicGenre {
    House,
    Techno,
    Edm,
    HipHop,
    Rnb,
    Top40,
    Latin,
    Afrobeats,
    Disco,
    Jazz,
    Rock,
    Indie,
}

impl Display for MusicGenre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MusicGenre::House => "House",
            MusicGenre::Techno => "Techno",
            MusicGenre::Edm => "EDM",
            MusicGenre::HipHop => "Hip-Hop",
            MusicGenre::Rnb => "R&B",
            MusicGenre::Top40 => "Top 40",
            MusicGenre::Latin => "Latin",
            MusicGenre::Afrobeats => "Afrobeats",
            MusicGenre::Disco => "Disco",
            MusicGenre::Jazz => "Jazz",
            MusicGenre::Rock => "Rock",
            MusicGenre::Indie => "Indie",
        };
        write!(f, "{}", label)
    }
}

/// Nightlife districts served by the app
///
/// Serialized under the display names clients already use (e.g. "King West"),
/// so an unknown district fails at deserialization instead of silently
/// scoring as "no match".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Neighborhood {
    #[serde(rename = "King West")]
    KingWest,
    #[serde(rename = "Entertainment District")]
    EntertainmentDistrict,
    #[serde(rename = "Queen West")]
    QueenWest,
    #[serde(rename = "Ossington")]
    Ossington,
    #[serde(rename = "Kensington Market")]
    KensingtonMarket,
    #[serde(rename = "Yorkville")]
    Yorkville,
    #[serde(rename = "Distillery District")]
    DistilleryDistrict,
    #[serde(rename = "The Annex")]
    TheAnnex,
    #[serde(rename = "Leslieville")]
    Leslieville,
    #[serde(rename = "Junction")]
    Junction,
}

impl Display for Neighborhood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Neighborhood::KingWest => "King West",
            Neighborhood::EntertainmentDistrict => "Entertainment District",
            Neighborhood::QueenWest => "Queen West",
            Neighborhood::Ossington => "Ossington",
            Neighborhood::KensingtonMarket => "Kensington Market",
            Neighborhood::Yorkville => "Yorkville",
            Neighborhood::DistilleryDistrict => "Distillery District",
            Neighborhood::TheAnnex => "The Annex",
            Neighborhood::Leslieville => "Leslieville",
            Neighborhood::Junction => "Junction",
        };
        write!(f, "{}", label)
    }
}

/// Capacity buckets, ordered smallest to largest
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum CapacitySize {
    Intimate,
    Small,
    Medium,
    Large,
    Massive,
}

/// How often a venue charges cover
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CoverFrequency {
    Never,
    WeekendsOnly,
    SpecialEvents,
    Always,
}

/// Cover charge amount buckets: Low is under $10, Medium $10-20, High $20+
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CoverAmount {
    Free,
    Low,
    Medium,
    High,
}

/// Days a venue hosts live music
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Community review state for a submitted venue
///
/// Submissions enter `Pending`; only `Approved` venues are listed or
/// recommended. The review workflow itself lives outside this service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VenueStatus {
    Pending,
    Approved,
    Rejected,
}

/// Represents a bar or club in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Venue {
    /// Unique identifier for the venue
    pub id: Uuid,
    /// Name of the bar or club
    pub name: String,
    /// District the venue is in, when known
    pub neighborhood: Option<Neighborhood>,
    /// Genres the venue programs
    pub music_genres: Vec<MusicGenre>,
    /// Community-sourced service rating on a 1-10 scale
    pub service_rating: Option<f64>,
    pub has_patio: bool,
    pub has_rooftop: bool,
    pub has_dancefloor: bool,
    pub serves_food: bool,
    /// Capacity bucket
    pub capacity: CapacitySize,
    pub cover_frequency: CoverFrequency,
    pub cover_amount: CoverAmount,
    /// Short free-text description of the room's usual energy
    pub typical_vibe: Option<String>,
    /// Days with live music, empty when the venue has none
    pub live_music_days: Vec<DayOfWeek>,
    pub status: VenueStatus,
    /// User who submitted the venue, absent for catalog imports
    pub submitted_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Venue {
    /// Creates a new venue with the given name and capacity
    ///
    /// Starts life as an approved catalog entry with no optional attributes;
    /// callers fill in the rest.
    pub fn new(name: String, capacity: CapacitySize) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            neighborhood: None,
            music_genres: Vec::new(),
            service_rating: None,
            has_patio: false,
            has_rooftop: false,
            has_dancefloor: false,
            serves_food: false,
            capacity,
            cover_frequency: CoverFrequency::Never,
            cover_amount: CoverAmount::Free,
            typical_vibe: None,
            live_music_days: Vec::new(),
            status: VenueStatus::Approved,
            submitted_by: None,
            created_at: Utc::now(),
        }
    }

    /// Whether the venue has passed community review
    pub fn is_approved(&self) -> bool {
        self.status == VenueStatus::Approved
    }

    /// Whether the venue hosts live music on any day
    pub fn has_live_music(&self) -> bool {
        !self.live_music_days.is_empty()
    }

    /// Whether the venue programs the given genre
    pub fn plays(&self, genre: MusicGenre) -> bool {
        self.music_genres.contains(&genre)
    }
}
