//! Entity stores
//!
//! Per-aggregate storage traits plus the Postgres and in-memory backends.
//! Services hold the traits as `Arc<dyn _>` so tests can substitute the
//! in-memory implementation.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::{PgPokemonStore, PgReviewStore};

use async_trait::async_trait;

use crate::domain::{NewPokemon, NewReview, Pokemon, Review};

/// Storage-layer error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Persistence operations for the Pokemon aggregate root.
#[async_trait]
pub trait PokemonStore: Send + Sync {
    async fn insert(&self, new: NewPokemon) -> Result<Pokemon, StoreError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Pokemon>, StoreError>;

    /// Page of Pokemon ordered by id, skipping `offset` rows.
    async fn find_page(&self, offset: i64, limit: i64) -> Result<Vec<Pokemon>, StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;

    /// Overwrite the row matching `pokemon.id`. Returns false when no such
    /// row exists.
    async fn update(&self, pokemon: &Pokemon) -> Result<bool, StoreError>;

    /// Remove a Pokemon and, with it, its reviews. Returns false when no
    /// such row exists.
    async fn delete(&self, id: i32) -> Result<bool, StoreError>;
}

/// Persistence operations for Reviews.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn insert(&self, new: NewReview) -> Result<Review, StoreError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Review>, StoreError>;

    /// All reviews owned by `pokemon_id`, in store order.
    async fn find_by_pokemon_id(&self, pokemon_id: i32) -> Result<Vec<Review>, StoreError>;

    /// Overwrite the row matching `review.id`. Returns false when no such
    /// row exists.
    async fn update(&self, review: &Review) -> Result<bool, StoreError>;

    async fn delete(&self, id: i32) -> Result<bool, StoreError>;
}
