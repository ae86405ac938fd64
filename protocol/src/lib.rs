use thiserror::Error;

pub mod catalog;

pub use catalog::{
    MoveEntry, MoveRecord, NamedResource, PokemonRecord, StatEntry, TypeSlot, catalog_key,
    display_move_name, parse_move, parse_pokemon,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid document: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty document")]
    EmptyMessage,
}
