use crate::Requirement;
use strum::IntoEnumIterator;
use wl4_game::{Catalog, Error, ItemIdx, Passage, Quadrant, Result};

/// All four pieces of the passage's jewel, in quadrant order. Fails on the
/// first piece the catalog lacks.
pub fn jewel_pieces(catalog: &Catalog, passage: Passage) -> Result<Vec<ItemIdx>> {
    Quadrant::iter()
        .map(|quadrant| {
            catalog
                .jewel_piece(passage, quadrant)
                .ok_or_else(|| Error::UnknownItemName(passage.jewel_item_name(quadrant)))
        })
        .collect()
}

/// One of each quadrant piece of the passage's jewel.
pub fn full_jewel_requirement(catalog: &Catalog, passage: Passage) -> Result<Requirement> {
    Ok(Requirement::all_of(jewel_pieces(catalog, passage)?))
}

/// `count` jewel pieces of the passage in total, in any mix of quadrants.
pub fn jewel_count_requirement(
    catalog: &Catalog,
    passage: Passage,
    count: usize,
) -> Result<Requirement> {
    Ok(Requirement::at_least_n_of_set(
        jewel_pieces(catalog, passage)?,
        count,
    ))
}

/// The jewel requirement guarding a passage's boss: the entry passage and the
/// golden pyramid need a complete jewel, the others need `required_jewels` pieces.
pub fn boss_jewel_requirement(
    catalog: &Catalog,
    passage: Passage,
    required_jewels: usize,
) -> Result<Requirement> {
    if passage.is_elemental() {
        jewel_count_requirement(catalog, passage, required_jewels)
    } else {
        full_jewel_requirement(catalog, passage)
    }
}

/// `required_bosses` of the five passage-clear events.
pub fn boss_quorum_requirement(catalog: &Catalog, required_bosses: usize) -> Result<Requirement> {
    let events = Passage::iter()
        .filter_map(|p| p.clear_event_name())
        .map(|name| {
            catalog
                .item_idx(&name)
                .ok_or(Error::UnknownItemName(name))
        })
        .collect::<Result<Vec<ItemIdx>>>()?;
    Ok(Requirement::at_least_n_of_set(events, required_bosses))
}
