use thiserror::Error;

use crate::{ItemId, LocationId, PlayerId};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown location name: {0}")]
    UnknownLocationName(String),

    #[error("unknown region name: {0}")]
    UnknownRegionName(String),

    #[error("unknown entrance name: {0}")]
    UnknownEntranceName(String),

    #[error("unknown item name: {0}")]
    UnknownItemName(String),

    #[error("unknown item identifier: {0:#x}")]
    UnknownIdentifier(ItemId),

    #[error("unknown location identifier: {0:#x}")]
    UnknownLocationIdentifier(LocationId),

    // Fatal: must be detected before any location receives an item.
    #[error("mismatched item pool: {items} items generated for {locations} locations")]
    ItemCountMismatch { items: usize, locations: usize },

    #[error("duplicate entrance name: {0}")]
    DuplicateEntranceName(String),

    #[error("duplicate region name: {0}")]
    DuplicateRegionName(String),

    #[error("duplicate catalog entry: {0}")]
    DuplicateCatalogEntry(String),

    #[error("required jewel count must be between 1 and 4, got {0}")]
    InvalidRequiredJewels(usize),

    #[error("required boss count must be between 1 and 5, got {0}")]
    InvalidRequiredBosses(usize),

    #[error("no world for player {0}")]
    UnknownPlayer(PlayerId),

    #[error("location already holds an item: {0}")]
    LocationAlreadyFilled(String),
}
