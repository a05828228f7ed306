pub mod recommendations;
pub mod scoring;

pub use recommendations::{recommend_venues, DEFAULT_LIMIT};
pub use scoring::{score_venue, ALGORITHM_VERSION};
