//! Demo catalog loaded when `SEED_DEMO_DATA` is enabled, so a fresh server
//! has venues to browse and recommend.

use crate::models::{
    CapacitySize, CoverAmount, CoverFrequency, DayOfWeek, MusicGenre, Neighborhood, Venue,
};

struct Entry {
    name: &'static str,
    neighborhood: Neighborhood,
    genres: &'static [MusicGenre],
    rating: f64,
    capacity: CapacitySize,
    vibe: &'static str,
    patio: bool,
    rooftop: bool,
    dancefloor: bool,
    food: bool,
    cover: (CoverFrequency, CoverAmount),
    live_music: &'static [DayOfWeek],
}

impl Entry {
    fn build(&self) -> Venue {
        let mut venue = Venue::new(self.name.to_string(), self.capacity);
        venue.neighborhood = Some(self.neighborhood);
        venue.music_genres = self.genres.to_vec();
        venue.service_rating = Some(self.rating);
        venue.typical_vibe = Some(self.vibe.to_string());
        venue.has_patio = self.patio;
        venue.has_rooftop = self.rooftop;
        venue.has_dancefloor = self.dancefloor;
        venue.serves_food = self.food;
        venue.cover_frequency = self.cover.0;
        venue.cover_amount = self.cover.1;
        venue.live_music_days = self.live_music.to_vec();
        venue
    }
}

/// A small, realistic starter catalog
pub fn demo_venues() -> Vec<Venue> {
    const ENTRIES: &[Entry] = &[
        Entry {
            name: "Rebel",
            neighborhood: Neighborhood::EntertainmentDistrict,
            genres: &[MusicGenre::Edm, MusicGenre::House, MusicGenre::Top40],
            rating: 8.7,
            capacity: CapacitySize::Massive,
            vibe: "big-room festival energy",
            patio: true,
            rooftop: false,
            dancefloor: true,
            food: false,
            cover: (CoverFrequency::Always, CoverAmount::High),
            live_music: &[],
        },
        Entry {
            name: "Coda",
            neighborhood: Neighborhood::TheAnnex,
            genres: &[MusicGenre::House, MusicGenre::Techno],
            rating: 9.1,
            capacity: CapacitySize::Medium,
            vibe: "heads-down warehouse party",
            patio: false,
            rooftop: false,
            dancefloor: true,
            food: false,
            cover: (CoverFrequency::Always, CoverAmount::Medium),
            live_music: &[],
        },
        Entry {
            name: "Lavelle",
            neighborhood: Neighborhood::KingWest,
            genres: &[MusicGenre::House, MusicGenre::Rnb],
            rating: 8.2,
            capacity: CapacitySize::Large,
            vibe: "upscale rooftop lounge",
            patio: true,
            rooftop: true,
            dancefloor: false,
            food: true,
            cover: (CoverFrequency::WeekendsOnly, CoverAmount::Medium),
            live_music: &[],
        },
        Entry {
            name: "Track & Field",
            neighborhood: Neighborhood::Ossington,
            genres: &[MusicGenre::Indie, MusicGenre::Disco],
            rating: 7.8,
            capacity: CapacitySize::Medium,
            vibe: "laid-back games bar",
            patio: false,
            rooftop: false,
            dancefloor: false,
            food: true,
            cover: (CoverFrequency::Never, CoverAmount::Free),
            live_music: &[],
        },
        Entry {
            name: "Reposado",
            neighborhood: Neighborhood::Ossington,
            genres: &[MusicGenre::Jazz],
            rating: 8.9,
            capacity: CapacitySize::Intimate,
            vibe: "candle-lit tequila bar",
            patio: true,
            rooftop: false,
            dancefloor: false,
            food: true,
            cover: (CoverFrequency::Never, CoverAmount::Free),
            live_music: &[DayOfWeek::Thursday, DayOfWeek::Friday, DayOfWeek::Saturday],
        },
        Entry {
            name: "El Convento Rico",
            neighborhood: Neighborhood::QueenWest,
            genres: &[MusicGenre::Latin, MusicGenre::Top40],
            rating: 7.5,
            capacity: CapacitySize::Medium,
            vibe: "late-night latin dance party",
            patio: false,
            rooftop: false,
            dancefloor: true,
            food: false,
            cover: (CoverFrequency::WeekendsOnly, CoverAmount::Low),
            live_music: &[],
        },
        Entry {
            name: "The Piston",
            neighborhood: Neighborhood::Junction,
            genres: &[MusicGenre::Rock, MusicGenre::Indie],
            rating: 7.2,
            capacity: CapacitySize::Small,
            vibe: "sweaty back-room gigs",
            patio: false,
            rooftop: false,
            dancefloor: true,
            food: false,
            cover: (CoverFrequency::SpecialEvents, CoverAmount::Low),
            live_music: &[DayOfWeek::Friday, DayOfWeek::Saturday],
        },
        Entry {
            name: "Mahjong Bar",
            neighborhood: Neighborhood::KensingtonMarket,
            genres: &[MusicGenre::HipHop, MusicGenre::Rnb, MusicGenre::Afrobeats],
            rating: 8.4,
            capacity: CapacitySize::Small,
            vibe: "hidden-door listening bar",
            patio: false,
            rooftop: false,
            dancefloor: true,
            food: true,
            cover: (CoverFrequency::Never, CoverAmount::Free),
            live_music: &[],
        },
    ];

    ENTRIES.iter().map(Entry::build).collect()
}
