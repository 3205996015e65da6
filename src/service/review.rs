//! Review aggregate service
//!
//! Every operation is scoped by the parent Pokemon id. A review reached
//! through the wrong parent is an ownership error, never a silent miss.

use std::sync::Arc;

use crate::domain::{NewReview, Review, ReviewDto};
use crate::error::{AppError, AppResult};
use crate::store::{PokemonStore, ReviewStore};

/// Service owning the business rules for Reviews under their Pokemon.
#[derive(Clone)]
pub struct ReviewService {
    reviews: Arc<dyn ReviewStore>,
    pokemon: Arc<dyn PokemonStore>,
}

/// Map a persisted Review to its wire projection.
fn to_dto(review: &Review) -> ReviewDto {
    ReviewDto {
        id: review.id,
        title: review.title.clone(),
        content: review.content.clone(),
        stars: review.stars,
    }
}

impl ReviewService {
    pub fn new(reviews: Arc<dyn ReviewStore>, pokemon: Arc<dyn PokemonStore>) -> Self {
        Self { reviews, pokemon }
    }

    /// All reviews owned by `pokemon_id`, in store order. Empty when the
    /// Pokemon has none (or does not exist).
    pub async fn get_reviews_by_pokemon_id(&self, pokemon_id: i32) -> AppResult<Vec<ReviewDto>> {
        let reviews = self.reviews.find_by_pokemon_id(pokemon_id).await?;

        Ok(reviews.iter().map(to_dto).collect())
    }

    pub async fn get_review_by_id(&self, review_id: i32, pokemon_id: i32) -> AppResult<ReviewDto> {
        let review = self.find_owned(review_id, pokemon_id).await?;

        Ok(to_dto(&review))
    }

    /// Persist a new review under an existing Pokemon.
    pub async fn create_review(&self, pokemon_id: i32, dto: ReviewDto) -> AppResult<ReviewDto> {
        if self.pokemon.find_by_id(pokemon_id).await?.is_none() {
            return Err(AppError::PokemonNotFound(pokemon_id));
        }

        let created = self
            .reviews
            .insert(NewReview {
                title: dto.title,
                content: dto.content,
                stars: dto.stars,
                pokemon_id,
            })
            .await?;

        Ok(to_dto(&created))
    }

    /// Overwrite title, content and stars of an existing review.
    pub async fn update_review(
        &self,
        pokemon_id: i32,
        review_id: i32,
        dto: ReviewDto,
    ) -> AppResult<ReviewDto> {
        let mut review = self.find_owned(review_id, pokemon_id).await?;

        review.title = dto.title;
        review.content = dto.content;
        review.stars = dto.stars;

        if !self.reviews.update(&review).await? {
            return Err(AppError::ReviewNotFound(review_id));
        }

        Ok(to_dto(&review))
    }

    pub async fn delete_review(&self, pokemon_id: i32, review_id: i32) -> AppResult<()> {
        let review = self.find_owned(review_id, pokemon_id).await?;

        if !self.reviews.delete(review.id).await? {
            return Err(AppError::ReviewNotFound(review_id));
        }

        Ok(())
    }

    /// Fetch a review and enforce that its stored parent is `pokemon_id`.
    async fn find_owned(&self, review_id: i32, pokemon_id: i32) -> AppResult<Review> {
        let review = self
            .reviews
            .find_by_id(review_id)
            .await?
            .ok_or(AppError::ReviewNotFound(review_id))?;

        if review.pokemon_id != pokemon_id {
            return Err(AppError::ReviewNotOwned {
                review_id,
                pokemon_id,
            });
        }

        Ok(review)
    }
}
