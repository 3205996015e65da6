//! Postgres-backed stores
//!
//! Thin sqlx wrappers over the `pokemon` and `reviews` tables. Review
//! removal on Pokemon delete is handled by the FK's `ON DELETE CASCADE`
//! (see migrations/001_init.sql).

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{NewPokemon, NewReview, Pokemon, Review};

use super::{PokemonStore, ReviewStore, StoreError};

/// Pokemon store over a Postgres pool
#[derive(Debug, Clone)]
pub struct PgPokemonStore {
    pool: PgPool,
}

impl PgPokemonStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PokemonStore for PgPokemonStore {
    async fn insert(&self, new: NewPokemon) -> Result<Pokemon, StoreError> {
        let (id,): (i32,) =
            sqlx::query_as("INSERT INTO pokemon (name, type) VALUES ($1, $2) RETURNING id")
                .bind(&new.name)
                .bind(&new.type_)
                .fetch_one(&self.pool)
                .await?;

        Ok(Pokemon {
            id,
            name: new.name,
            type_: new.type_,
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Pokemon>, StoreError> {
        let row: Option<(i32, String, String)> =
            sqlx::query_as("SELECT id, name, type FROM pokemon WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(id, name, type_)| Pokemon { id, name, type_ }))
    }

    async fn find_page(&self, offset: i64, limit: i64) -> Result<Vec<Pokemon>, StoreError> {
        let rows: Vec<(i32, String, String)> = sqlx::query_as(
            r#"
            SELECT id, name, type
            FROM pokemon
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, type_)| Pokemon { id, name, type_ })
            .collect())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pokemon")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn update(&self, pokemon: &Pokemon) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE pokemon SET name = $1, type = $2 WHERE id = $3")
            .bind(&pokemon.name)
            .bind(&pokemon.type_)
            .bind(pokemon.id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM pokemon WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Review store over a Postgres pool
#[derive(Debug, Clone)]
pub struct PgReviewStore {
    pool: PgPool,
}

impl PgReviewStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewStore for PgReviewStore {
    async fn insert(&self, new: NewReview) -> Result<Review, StoreError> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO reviews (title, content, stars, pokemon_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&new.title)
        .bind(&new.content)
        .bind(new.stars)
        .bind(new.pokemon_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(Review {
            id,
            title: new.title,
            content: new.content,
            stars: new.stars,
            pokemon_id: new.pokemon_id,
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Review>, StoreError> {
        let row: Option<(i32, String, String, i32, i32)> = sqlx::query_as(
            "SELECT id, title, content, stars, pokemon_id FROM reviews WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(id, title, content, stars, pokemon_id)| Review {
            id,
            title,
            content,
            stars,
            pokemon_id,
        }))
    }

    async fn find_by_pokemon_id(&self, pokemon_id: i32) -> Result<Vec<Review>, StoreError> {
        let rows: Vec<(i32, String, String, i32, i32)> = sqlx::query_as(
            r#"
            SELECT id, title, content, stars, pokemon_id
            FROM reviews
            WHERE pokemon_id = $1
            ORDER BY id
            "#,
        )
        .bind(pokemon_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, title, content, stars, pokemon_id)| Review {
                id,
                title,
                content,
                stars,
                pokemon_id,
            })
            .collect())
    }

    async fn update(&self, review: &Review) -> Result<bool, StoreError> {
        let result =
            sqlx::query("UPDATE reviews SET title = $1, content = $2, stars = $3 WHERE id = $4")
                .bind(&review.title)
                .bind(&review.content)
                .bind(review.stars)
                .bind(review.id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
