//! Domain types
//!
//! Entities for the two aggregates and their wire-facing projections.

mod pokemon;
mod review;

pub use pokemon::{NewPokemon, Pokemon, PokemonDto, PokemonResponse};
pub use review::{NewReview, Review, ReviewDto};
