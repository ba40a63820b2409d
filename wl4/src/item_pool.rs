use log::info;
use serde::Serialize;
use strum::IntoEnumIterator;
use wl4_game::{
    Catalog, Classification, Error, ItemId, ItemIdx, ItemKind, Passage, PlayerId, Result,
    VICTORY_EVENT, codec,
};

use crate::{
    multiworld::MultiWorld,
    regions::{LocationIdx, WorldGraph},
};

/// An item owned by one player, ready to be placed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Item {
    pub name: String,
    pub idx: ItemIdx,
    pub kind: ItemKind,
    pub classification: Classification,
    pub code: Option<ItemId>, // None for events
    pub player: PlayerId,
}

impl Item {
    pub fn is_event(&self) -> bool {
        self.code.is_none()
    }
}

pub fn create_item(
    catalog: &Catalog,
    name: &str,
    player: PlayerId,
    force_non_progression: bool,
) -> Result<Item> {
    let idx = catalog
        .item_idx(name)
        .ok_or_else(|| Error::UnknownItemName(name.to_string()))?;
    let data = &catalog.items[idx];
    let classification = if force_non_progression {
        Classification::Filler
    } else {
        data.classification
    };
    Ok(Item {
        name: data.name.clone(),
        idx,
        kind: data.kind,
        classification,
        code: codec::encode(&data.kind),
        player,
    })
}

pub fn create_event(catalog: &Catalog, name: &str, player: PlayerId) -> Result<Item> {
    let idx = catalog
        .item_idx(name)
        .ok_or_else(|| Error::UnknownItemName(name.to_string()))?;
    Ok(Item {
        name: catalog.items[idx].name.clone(),
        idx,
        kind: ItemKind::Event,
        classification: Classification::Progression,
        code: None,
        player,
    })
}

/// Generates every pool item for one world. The pool must fill the world's
/// placeable locations exactly.
pub fn generate_item_pool(catalog: &Catalog, graph: &WorldGraph) -> Result<Vec<Item>> {
    let mut pool: Vec<Item> = vec![];
    for data in &catalog.items {
        for _ in 0..data.quantity {
            pool.push(create_item(catalog, &data.name, graph.player, false)?);
        }
    }
    let num_locations = graph.placeable_locations().count();
    if pool.len() != num_locations {
        return Err(Error::ItemCountMismatch {
            items: pool.len(),
            locations: num_locations,
        });
    }
    Ok(pool)
}

/// Locks each passage-clear event onto its boss, and the victory event onto
/// the golden pyramid's boss. Nothing is placed unless every boss location
/// exists and is empty.
pub fn place_locked_events(catalog: &Catalog, graph: &mut WorldGraph) -> Result<()> {
    let mut placements: Vec<(LocationIdx, Item)> = vec![];
    for passage in Passage::iter() {
        let event_name = passage
            .clear_event_name()
            .unwrap_or_else(|| VICTORY_EVENT.to_string());
        let event = create_event(catalog, &event_name, graph.player)?;
        let loc_idx = graph.location_idx(&passage.data().boss_defeat())?;
        let loc = &graph.locations[loc_idx];
        if loc.item.is_some() {
            return Err(Error::LocationAlreadyFilled(loc.name.clone()));
        }
        placements.push((loc_idx, event));
    }
    for (loc_idx, event) in placements {
        graph.locations[loc_idx].place_locked_item(event)?;
    }
    Ok(())
}

pub fn generate_basic(
    catalog: &Catalog,
    multiworld: &mut MultiWorld,
    player: PlayerId,
) -> Result<()> {
    let graph = multiworld.world_mut(player)?;
    let pool = generate_item_pool(catalog, graph)?;
    place_locked_events(catalog, graph)?;
    info!("Player {player}: generated {} pool items", pool.len());
    multiworld.itempool.extend(pool);
    Ok(())
}
