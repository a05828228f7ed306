//! Nightlife discovery API: browse and submit bars and clubs, log visits
//! and favorites, and get personalized venue recommendations.
//!
//! The interesting part lives in [`services::scoring`]: a pure, deterministic
//! scorer that ranks candidate venues for a user by weighing music overlap,
//! neighbourhood preference, similarity to liked venues, an exploration
//! bonus and the community rating, with human-readable reasoning attached
//! to every score.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod store;
