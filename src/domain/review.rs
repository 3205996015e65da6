//! Review aggregate, always owned by a parent Pokemon.

use serde::{Deserialize, Serialize};

/// Persisted Review record. `pokemon_id` is the owning Pokemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub stars: i32,
    pub pokemon_id: i32,
}

/// A Review that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub title: String,
    pub content: String,
    pub stars: i32,
    pub pokemon_id: i32,
}

/// Wire projection of a Review. The parent Pokemon comes from the URL, not
/// the body, so the projection carries no `pokemon_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDto {
    #[serde(default)]
    pub id: i32,
    pub title: String,
    pub content: String,
    pub stars: i32,
}
