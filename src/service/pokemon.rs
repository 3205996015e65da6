//! Pokemon aggregate service

use std::sync::Arc;

use crate::domain::{NewPokemon, Pokemon, PokemonDto, PokemonResponse};
use crate::error::{AppError, AppResult};
use crate::store::PokemonStore;

/// Largest page a single listing call will return.
const MAX_PAGE_SIZE: i64 = 100;

/// Service owning the business rules for Pokemon records.
#[derive(Clone)]
pub struct PokemonService {
    store: Arc<dyn PokemonStore>,
}

/// Map a persisted Pokemon to its wire projection.
fn to_dto(pokemon: &Pokemon) -> PokemonDto {
    PokemonDto {
        id: pokemon.id,
        name: pokemon.name.clone(),
        type_: pokemon.type_.clone(),
    }
}

impl PokemonService {
    pub fn new(store: Arc<dyn PokemonStore>) -> Self {
        Self { store }
    }

    /// Persist a new Pokemon and return its projection with the assigned id.
    /// Any id on the incoming dto is ignored. Duplicate names are allowed.
    pub async fn create_pokemon(&self, dto: PokemonDto) -> AppResult<PokemonDto> {
        let created = self
            .store
            .insert(NewPokemon {
                name: dto.name,
                type_: dto.type_,
            })
            .await?;

        Ok(to_dto(&created))
    }

    /// List Pokemon one page at a time.
    ///
    /// Pages are one-indexed: `page_no = 1` is the first page and the store
    /// offset is `(page_no - 1) * page_size`. `page_size` is clamped to
    /// 1..=MAX_PAGE_SIZE.
    pub async fn get_all_pokemon(
        &self,
        page_no: i64,
        page_size: i64,
    ) -> AppResult<PokemonResponse> {
        if page_no < 1 {
            return Err(AppError::InvalidRequest(format!(
                "pageNo must be >= 1, got {}",
                page_no
            )));
        }
        let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        // page_no comes straight off the query string; the multiplication
        // must not overflow on adversarial values.
        let offset = page_no
            .checked_sub(1)
            .and_then(|skipped| skipped.checked_mul(page_size))
            .ok_or_else(|| {
                AppError::InvalidRequest(format!("pageNo {} is out of range", page_no))
            })?;

        let page = self.store.find_page(offset, page_size).await?;
        let total_elements = self.store.count().await?;
        let total_pages = (total_elements + page_size - 1) / page_size;

        Ok(PokemonResponse {
            content: page.iter().map(to_dto).collect(),
            page_no,
            page_size,
            total_elements,
            total_pages,
            last: page_no >= total_pages,
        })
    }

    pub async fn get_pokemon_by_id(&self, id: i32) -> AppResult<PokemonDto> {
        let pokemon = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(AppError::PokemonNotFound(id))?;

        Ok(to_dto(&pokemon))
    }

    /// Overwrite name and type of an existing Pokemon.
    pub async fn update_pokemon(&self, dto: PokemonDto, id: i32) -> AppResult<PokemonDto> {
        let mut pokemon = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(AppError::PokemonNotFound(id))?;

        pokemon.name = dto.name;
        pokemon.type_ = dto.type_;

        // Lookup and write are separate store calls; the row may vanish in
        // between.
        if !self.store.update(&pokemon).await? {
            return Err(AppError::PokemonNotFound(id));
        }

        Ok(to_dto(&pokemon))
    }

    /// Remove a Pokemon by id. Its reviews go with it (store-level cascade).
    pub async fn delete_pokemon_by_id(&self, id: i32) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(AppError::PokemonNotFound(id));
        }

        Ok(())
    }
}
