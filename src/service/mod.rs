//! Aggregate services
//!
//! Business rules for the Pokemon and Review aggregates: DTO mapping,
//! pagination assembly, and the review ownership checks.

mod pokemon;
mod review;

pub use pokemon::PokemonService;
pub use review::ReviewService;
