//! Wire identifiers for items and locations.
//!
//! Items are encoded as 8-bit numbers on top of `ID_OFFSET`:
//!
//! ```text
//!                   | 7 | 6 | 5 | 4 | 3 | 2 | 1 | 0 |
//! Jewel pieces:     | 0   0   0 |  passage  | qdrnt |
//! CD:               | 0   0   1 |  passage  | level |
//! Consumables:      | 0   1   0   0 |     index     |
//! ```
//!
//! - passage = 0-5 for entry/emerald/ruby/topaz/sapphire/golden; only 1-4 have CDs
//! - qdrnt = quadrant, increasing counterclockwise from top left
//! - level = increasing as the level goes deeper
//!
//! Locations use the same offset with `passage << 5 | level << 3 | box`,
//! where box 0-3 is a jewel quadrant, 4 the CD box and 5 the full health box.
//!
//! This layout is shared with other games' clients; changing it requires
//! bumping `CODEC_VERSION`.

use crate::{
    BoxType, Consumable, Error, ItemId, ItemKind, LocationId, LocationKind, Passage, Quadrant,
    Result,
};

pub const ID_OFFSET: u64 = 0x00EC_0000;
pub const CODEC_VERSION: u32 = 1;

const JEWEL_TAG: u64 = 0b000;
const CD_TAG: u64 = 0b001;
const CONSUMABLE_TAG: u64 = 0b0100;

/// Returns `None` for events, and for CDs outside the passages/levels that
/// have them.
pub fn encode(kind: &ItemKind) -> Option<ItemId> {
    let val = match *kind {
        ItemKind::JewelPiece { passage, quadrant } => {
            (JEWEL_TAG << 5) | ((passage as u64) << 2) | quadrant as u64
        }
        ItemKind::Cd { passage, level } => {
            if !passage.has_cds() || level > 3 {
                return None;
            }
            (CD_TAG << 5) | ((passage as u64) << 2) | level as u64
        }
        ItemKind::Consumable(c) => (CONSUMABLE_TAG << 4) | c as u64,
        ItemKind::Event => return None,
    };
    Some(ID_OFFSET | val)
}

fn local_value(id: u64) -> Option<u64> {
    id.checked_sub(ID_OFFSET).filter(|&v| v <= 0xFF)
}

pub fn decode(id: ItemId) -> Result<ItemKind> {
    let unknown = || Error::UnknownIdentifier(id);
    let val = local_value(id).ok_or_else(unknown)?;
    if val >> 5 == JEWEL_TAG {
        let passage = Passage::try_from(((val >> 2) & 0x7) as u8).map_err(|_| unknown())?;
        let quadrant = Quadrant::try_from((val & 0x3) as u8).map_err(|_| unknown())?;
        Ok(ItemKind::JewelPiece { passage, quadrant })
    } else if val >> 5 == CD_TAG {
        let passage = Passage::try_from(((val >> 2) & 0x7) as u8).map_err(|_| unknown())?;
        if !passage.has_cds() {
            return Err(unknown());
        }
        Ok(ItemKind::Cd {
            passage,
            level: (val & 0x3) as u8,
        })
    } else if val >> 4 == CONSUMABLE_TAG {
        let consumable = Consumable::try_from((val & 0xF) as u8).map_err(|_| unknown())?;
        Ok(ItemKind::Consumable(consumable))
    } else {
        Err(unknown())
    }
}

/// Returns `None` for boss defeats, which only ever hold locked events.
pub fn encode_location(kind: &LocationKind) -> Option<LocationId> {
    match *kind {
        LocationKind::Box {
            passage,
            level,
            box_type,
        } => {
            if level > 3 {
                return None;
            }
            Some(
                ID_OFFSET
                    | ((passage as u64) << 5)
                    | ((level as u64) << 3)
                    | box_type.index() as u64,
            )
        }
        LocationKind::BossDefeat(_) => None,
    }
}

pub fn decode_location(id: LocationId) -> Result<LocationKind> {
    let unknown = || Error::UnknownLocationIdentifier(id);
    let val = local_value(id).ok_or_else(unknown)?;
    let passage = Passage::try_from((val >> 5) as u8).map_err(|_| unknown())?;
    let box_type = BoxType::from_index((val & 0x7) as u8).ok_or_else(unknown)?;
    Ok(LocationKind::Box {
        passage,
        level: ((val >> 3) & 0x3) as u8,
        box_type,
    })
}
