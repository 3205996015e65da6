//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;

use crate::domain::{PokemonDto, PokemonResponse, ReviewDto};
use crate::error::AppError;
use crate::service::{PokemonService, ReviewService};

/// Shared handler state: one service per aggregate, constructed once at
/// process start.
#[derive(Clone)]
pub struct AppState {
    pub pokemon: PokemonService,
    pub reviews: ReviewService,
}

/// Query parameters for paginated listings. Wire names match the original
/// API (`pageNo`, `pageSize`).
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(rename = "pageNo", default = "default_page_no")]
    pub page_no: i64,
    #[serde(rename = "pageSize", default = "default_page_size")]
    pub page_size: i64,
}

fn default_page_no() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        // Pokemon aggregate
        .route("/pokemon/create", post(create_pokemon))
        .route("/pokemon", get(get_all_pokemon))
        .route("/pokemon/:pokemon_id", get(get_pokemon_by_id))
        .route("/pokemon/:pokemon_id/update", put(update_pokemon))
        .route("/pokemon/:pokemon_id/delete", delete(delete_pokemon))
        // Review aggregate, scoped by parent
        .route(
            "/pokemon/:pokemon_id/reviews",
            get(get_reviews_by_pokemon_id).post(create_review),
        )
        .route(
            "/pokemon/:pokemon_id/reviews/:review_id",
            get(get_review_by_id)
                .put(update_review)
                .delete(delete_review),
        )
}

// =========================================================================
// Pokemon endpoints
// =========================================================================

/// Create a new Pokemon
async fn create_pokemon(
    State(state): State<AppState>,
    Json(request): Json<PokemonDto>,
) -> Result<(StatusCode, Json<PokemonDto>), AppError> {
    let created = state.pokemon.create_pokemon(request).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// List Pokemon, paginated
async fn get_all_pokemon(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PokemonResponse>, AppError> {
    let page = state
        .pokemon
        .get_all_pokemon(query.page_no, query.page_size)
        .await?;

    Ok(Json(page))
}

/// Get Pokemon by id
async fn get_pokemon_by_id(
    State(state): State<AppState>,
    Path(pokemon_id): Path<i32>,
) -> Result<Json<PokemonDto>, AppError> {
    let pokemon = state.pokemon.get_pokemon_by_id(pokemon_id).await?;

    Ok(Json(pokemon))
}

/// Update a Pokemon's name and type
async fn update_pokemon(
    State(state): State<AppState>,
    Path(pokemon_id): Path<i32>,
    Json(request): Json<PokemonDto>,
) -> Result<Json<PokemonDto>, AppError> {
    let updated = state.pokemon.update_pokemon(request, pokemon_id).await?;

    Ok(Json(updated))
}

/// Delete a Pokemon (and its reviews)
async fn delete_pokemon(
    State(state): State<AppState>,
    Path(pokemon_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.pokemon.delete_pokemon_by_id(pokemon_id).await?;

    Ok(StatusCode::OK)
}

// =========================================================================
// Review endpoints
// =========================================================================

/// List reviews of a Pokemon
async fn get_reviews_by_pokemon_id(
    State(state): State<AppState>,
    Path(pokemon_id): Path<i32>,
) -> Result<Json<Vec<ReviewDto>>, AppError> {
    let reviews = state.reviews.get_reviews_by_pokemon_id(pokemon_id).await?;

    Ok(Json(reviews))
}

/// Get a single review, checking it belongs to the Pokemon in the path
async fn get_review_by_id(
    State(state): State<AppState>,
    Path((pokemon_id, review_id)): Path<(i32, i32)>,
) -> Result<Json<ReviewDto>, AppError> {
    let review = state.reviews.get_review_by_id(review_id, pokemon_id).await?;

    Ok(Json(review))
}

/// Create a review under a Pokemon
async fn create_review(
    State(state): State<AppState>,
    Path(pokemon_id): Path<i32>,
    Json(request): Json<ReviewDto>,
) -> Result<(StatusCode, Json<ReviewDto>), AppError> {
    let created = state.reviews.create_review(pokemon_id, request).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a review's title, content and stars
async fn update_review(
    State(state): State<AppState>,
    Path((pokemon_id, review_id)): Path<(i32, i32)>,
    Json(request): Json<ReviewDto>,
) -> Result<Json<ReviewDto>, AppError> {
    let updated = state
        .reviews
        .update_review(pokemon_id, review_id, request)
        .await?;

    Ok(Json(updated))
}

/// Delete a review
async fn delete_review(
    State(state): State<AppState>,
    Path((pokemon_id, review_id)): Path<(i32, i32)>,
) -> Result<StatusCode, AppError> {
    state.reviews.delete_review(pokemon_id, review_id).await?;

    Ok(StatusCode::OK)
}
