//! Pokemon aggregate root.

use serde::{Deserialize, Serialize};

/// Persisted Pokemon record. The id is store-assigned and immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    pub id: i32,
    pub name: String,
    pub type_: String,
}

/// A Pokemon that has not been persisted yet. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewPokemon {
    pub name: String,
    pub type_: String,
}

/// Wire projection of a Pokemon.
///
/// Creation input carries no id; the deserialization default (0) is ignored
/// and the store-assigned id is reported on output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDto {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
}

/// Page envelope for Pokemon listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonResponse {
    pub content: Vec<PokemonDto>,
    pub page_no: i64,
    pub page_size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
    pub last: bool,
}
