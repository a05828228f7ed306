use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{
    CapacitySize, CoverAmount, CoverFrequency, DayOfWeek, MusicGenre, Neighborhood,
    RecommendationScore, UserProfile, Venue, VenueStatus, Visit,
};
use crate::services::{recommend_venues, ALGORITHM_VERSION, DEFAULT_LIMIT};
use crate::store::VenueFilter;

use super::AppState;

/// HTTP header carrying the caller's user id; populated upstream by the
/// auth layer, which is outside this service
pub const USER_ID_HEADER: &str = "x-user-id";

fn require_user_id(headers: &HeaderMap) -> AppResult<Uuid> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or(AppError::Unauthorized)
}

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct SubmitVenueRequest {
    pub name: String,
    pub capacity: CapacitySize,
    pub neighborhood: Option<Neighborhood>,
    #[serde(default)]
    pub music_genres: Vec<MusicGenre>,
    #[serde(default)]
    pub has_patio: bool,
    #[serde(default)]
    pub has_rooftop: bool,
    #[serde(default)]
    pub has_dancefloor: bool,
    #[serde(default)]
    pub serves_food: bool,
    pub cover_frequency: Option<CoverFrequency>,
    pub cover_amount: Option<CoverAmount>,
    pub typical_vibe: Option<String>,
    #[serde(default)]
    pub live_music_days: Vec<DayOfWeek>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub preferred_genres: Vec<MusicGenre>,
    pub first_choice_area: Option<Neighborhood>,
    pub second_choice_area: Option<Neighborhood>,
    pub third_choice_area: Option<Neighborhood>,
}

#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    pub venue_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct LogVisitRequest {
    pub venue_id: Uuid,
    pub rating: u8,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationsQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<RecommendationScore>,
    /// Scoring algorithm revision, fixed per deployment
    pub algorithm_version: &'static str,
    /// Set when there was nothing left to recommend
    pub message: Option<String>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// List approved venues, optionally filtered by neighbourhood and genre
pub async fn list_venues(
    State(state): State<AppState>,
    Query(filter): Query<VenueFilter>,
) -> AppResult<Json<Vec<Venue>>> {
    let venues = state.store.list_venues(&filter).await?;
    Ok(Json(venues))
}

/// Fetch a single venue
pub async fn get_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<Uuid>,
) -> AppResult<Json<Venue>> {
    let venue = state
        .store
        .get_venue(venue_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", venue_id)))?;
    Ok(Json(venue))
}

/// Submit a new venue for community review
///
/// Submissions are stored as `pending` and stay out of listings and
/// recommendations until approved.
pub async fn submit_venue(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SubmitVenueRequest>,
) -> AppResult<(StatusCode, Json<Venue>)> {
    let user_id = require_user_id(&headers)?;

    let mut venue = Venue::new(request.name, request.capacity);
    venue.neighborhood = request.neighborhood;
    venue.music_genres = request.music_genres;
    venue.has_patio = request.has_patio;
    venue.has_rooftop = request.has_rooftop;
    venue.has_dancefloor = request.has_dancefloor;
    venue.serves_food = request.serves_food;
    if let Some(frequency) = request.cover_frequency {
        venue.cover_frequency = frequency;
    }
    if let Some(amount) = request.cover_amount {
        venue.cover_amount = amount;
    }
    venue.typical_vibe = request.typical_vibe;
    venue.live_music_days = request.live_music_days;
    venue.status = VenueStatus::Pending;
    venue.submitted_by = Some(user_id);

    tracing::info!(venue = %venue.name, %user_id, "venue submitted for review");

    let response = venue.clone();
    state.store.insert_venue(venue).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Get the caller's taste profile
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<UserProfile>> {
    let user_id = require_user_id(&headers)?;
    let profile = state
        .store
        .get_profile(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No profile saved yet".to_string()))?;
    Ok(Json(profile))
}

/// Create or replace the caller's taste profile
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<UpdateProfileRequest>,
) -> AppResult<Json<UserProfile>> {
    let user_id = require_user_id(&headers)?;

    let mut profile = UserProfile::new(user_id);
    for genre in request.preferred_genres {
        profile.add_genre(genre);
    }
    profile.first_choice_area = request.first_choice_area;
    profile.second_choice_area = request.second_choice_area;
    profile.third_choice_area = request.third_choice_area;

    state.store.upsert_profile(profile.clone()).await?;
    Ok(Json(profile))
}

/// Favorite a venue
pub async fn add_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<AddFavoriteRequest>,
) -> AppResult<StatusCode> {
    let user_id = require_user_id(&headers)?;

    if state.store.get_venue(request.venue_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Venue {} not found",
            request.venue_id
        )));
    }

    state.store.add_favorite(user_id, request.venue_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Log a visit with a self-reported experience rating
pub async fn log_visit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<LogVisitRequest>,
) -> AppResult<StatusCode> {
    let user_id = require_user_id(&headers)?;

    if !(1..=10).contains(&request.rating) {
        return Err(AppError::InvalidInput(
            "Rating must be between 1 and 10".to_string(),
        ));
    }
    if state.store.get_venue(request.venue_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Venue {} not found",
            request.venue_id
        )));
    }

    let visit = Visit::new(user_id, request.venue_id, request.rating);
    state.store.add_visit(visit).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Personalized venue recommendations for the caller
///
/// Fetches the caller's profile, liked venues and remaining candidates,
/// then scores and ranks the candidates. An exhausted catalog is not an
/// error: the response carries an empty list and an explanatory message.
pub async fn get_recommendations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<RecommendationsQuery>,
) -> AppResult<Json<RecommendationsResponse>> {
    let user_id = require_user_id(&headers)?;

    let profile = state
        .store
        .get_profile(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No profile saved yet".to_string()))?;
    let favorites = state.store.favorite_venues(user_id).await?;
    let visits = state.store.high_rated_visited_venues(user_id).await?;
    let candidates = state.store.candidate_venues(user_id).await?;

    if candidates.is_empty() {
        return Ok(Json(RecommendationsResponse {
            recommendations: Vec::new(),
            algorithm_version: ALGORITHM_VERSION,
            message: Some(
                "You've already visited or favorited every venue we know about. \
                 Check back when new spots are approved!"
                    .to_string(),
            ),
        }));
    }

    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let recommendations = recommend_venues(&candidates, &profile, &favorites, &visits, limit);

    tracing::info!(
        %user_id,
        returned = recommendations.len(),
        "served recommendations"
    );

    Ok(Json(RecommendationsResponse {
        recommendations,
        algorithm_version: ALGORITHM_VERSION,
        message: None,
    }))
}
