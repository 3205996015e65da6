//! In-memory stores
//!
//! Mutex-guarded maps with serial id assignment, starting at 1. The test
//! suites run against this backend; it also serves as a throwaway dev
//! backend. Deleting a Pokemon removes its reviews, matching the
//! `ON DELETE CASCADE` on the Postgres schema.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::{NewPokemon, NewReview, Pokemon, Review};

use super::{PokemonStore, ReviewStore, StoreError};

#[derive(Debug, Default)]
struct Tables {
    pokemon: BTreeMap<i32, Pokemon>,
    reviews: BTreeMap<i32, Review>,
    next_pokemon_id: i32,
    next_review_id: i32,
}

/// Store for both aggregates backed by process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        // No lock is ever held across an await, so poisoning only follows a
        // panic elsewhere.
        self.tables.lock().expect("store mutex poisoned")
    }
}

#[async_trait]
impl PokemonStore for MemoryStore {
    async fn insert(&self, new: NewPokemon) -> Result<Pokemon, StoreError> {
        let mut tables = self.tables();
        tables.next_pokemon_id += 1;
        let pokemon = Pokemon {
            id: tables.next_pokemon_id,
            name: new.name,
            type_: new.type_,
        };
        tables.pokemon.insert(pokemon.id, pokemon.clone());
        Ok(pokemon)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Pokemon>, StoreError> {
        Ok(self.tables().pokemon.get(&id).cloned())
    }

    async fn find_page(&self, offset: i64, limit: i64) -> Result<Vec<Pokemon>, StoreError> {
        Ok(self
            .tables()
            .pokemon
            .values()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.tables().pokemon.len() as i64)
    }

    async fn update(&self, pokemon: &Pokemon) -> Result<bool, StoreError> {
        let mut tables = self.tables();
        match tables.pokemon.get_mut(&pokemon.id) {
            Some(existing) => {
                *existing = pokemon.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let mut tables = self.tables();
        let removed = tables.pokemon.remove(&id).is_some();
        if removed {
            tables.reviews.retain(|_, review| review.pokemon_id != id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl ReviewStore for MemoryStore {
    async fn insert(&self, new: NewReview) -> Result<Review, StoreError> {
        let mut tables = self.tables();
        tables.next_review_id += 1;
        let review = Review {
            id: tables.next_review_id,
            title: new.title,
            content: new.content,
            stars: new.stars,
            pokemon_id: new.pokemon_id,
        };
        tables.reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Review>, StoreError> {
        Ok(self.tables().reviews.get(&id).cloned())
    }

    async fn find_by_pokemon_id(&self, pokemon_id: i32) -> Result<Vec<Review>, StoreError> {
        Ok(self
            .tables()
            .reviews
            .values()
            .filter(|review| review.pokemon_id == pokemon_id)
            .cloned()
            .collect())
    }

    async fn update(&self, review: &Review) -> Result<bool, StoreError> {
        let mut tables = self.tables();
        match tables.reviews.get_mut(&review.id) {
            Some(existing) => {
                *existing = review.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        Ok(self.tables().reviews.remove(&id).is_some())
    }
}
