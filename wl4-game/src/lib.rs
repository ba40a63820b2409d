pub mod codec;
pub mod error;

use hashbrown::HashMap;
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use std::borrow::ToOwned;
use std::hash::Hash;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

pub use error::{Error, Result};

pub type ItemId = u64; // Identifier in the shared multi-game item namespace (see `codec`)
pub type LocationId = u64; // Identifier in the shared multi-game location namespace
pub type ItemIdx = usize; // Index into Catalog.items
pub type CatalogLocationIdx = usize; // Index into Catalog.locations
pub type PlayerId = usize;
pub type LevelIdx = u8; // Level number within a passage (0..3), increasing as the level goes deeper

pub const MENU_REGION: &str = "Menu";
pub const MAP_REGION: &str = "Pyramid Map";
pub const VICTORY_EVENT: &str = "Escape the Pyramid";

#[derive(Default, Clone, Debug)]
pub struct IndexedVec<T: Hash + Eq> {
    pub keys: Vec<T>,
    pub index_by_key: HashMap<T, usize>,
}

impl<T: Hash + Eq> IndexedVec<T> {
    pub fn add<U: ToOwned<Owned = T> + ?Sized>(&mut self, name: &U) -> usize {
        if !self.index_by_key.contains_key(&name.to_owned()) {
            let idx = self.keys.len();
            self.index_by_key.insert(name.to_owned(), self.keys.len());
            self.keys.push(name.to_owned());
            idx
        } else {
            self.index_by_key[&name.to_owned()]
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<usize>
    where
        T: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index_by_key.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
// Note: the numbering of passages is part of the identifier encoding.
pub enum Passage {
    Entry,    // 0
    Emerald,  // 1
    Ruby,     // 2
    Topaz,    // 3
    Sapphire, // 4
    Golden,   // 5
}

impl Passage {
    pub fn name(self) -> &'static str {
        match self {
            Passage::Entry => "Entry",
            Passage::Emerald => "Emerald",
            Passage::Ruby => "Ruby",
            Passage::Topaz => "Topaz",
            Passage::Sapphire => "Sapphire",
            Passage::Golden => "Golden",
        }
    }

    /// Name of the region that acts as this passage's hub.
    pub fn hub_name(self) -> &'static str {
        self.data().hub_name
    }

    /// The four passages between the entry passage and the golden pyramid.
    pub fn is_elemental(self) -> bool {
        !matches!(self, Passage::Entry | Passage::Golden)
    }

    pub fn has_cds(self) -> bool {
        self.is_elemental()
    }

    pub fn data(self) -> &'static PassageData {
        &PASSAGES[self as usize]
    }

    pub fn jewel_item_name(self, quadrant: Quadrant) -> String {
        match self {
            Passage::Entry | Passage::Golden => {
                format!("{} {} Jewel Piece", quadrant.name(), self.name())
            }
            _ => format!("{} {} Piece", quadrant.name(), self.name()),
        }
    }

    /// Event granted by defeating this passage's boss; the golden pyramid
    /// grants the victory event instead.
    pub fn clear_event_name(self) -> Option<String> {
        match self {
            Passage::Golden => None,
            _ => Some(format!("{} Passage Clear", self.name())),
        }
    }
}

#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
// Quadrants increase counterclockwise from the top left.
pub enum Quadrant {
    TopLeft,     // 0
    BottomLeft,  // 1
    BottomRight, // 2
    TopRight,    // 3
}

impl Quadrant {
    pub fn name(self) -> &'static str {
        match self {
            Quadrant::TopLeft => "Top Left",
            Quadrant::BottomLeft => "Bottom Left",
            Quadrant::BottomRight => "Bottom Right",
            Quadrant::TopRight => "Top Right",
        }
    }
}

#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum Consumable {
    FullHealth,    // 0
    WarioFormTrap, // 1
    Heart,         // 2
    LightningTrap, // 3
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Progression,
    Useful,
    Filler,
    Trap,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    JewelPiece,
    Cd,
    Consumable,
    Event,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    JewelPiece { passage: Passage, quadrant: Quadrant },
    Cd { passage: Passage, level: LevelIdx },
    Consumable(Consumable),
    // Internal progression marker; has no wire identity.
    Event,
}

impl ItemKind {
    pub fn category(&self) -> ItemCategory {
        match self {
            ItemKind::JewelPiece { .. } => ItemCategory::JewelPiece,
            ItemKind::Cd { .. } => ItemCategory::Cd,
            ItemKind::Consumable(_) => ItemCategory::Consumable,
            ItemKind::Event => ItemCategory::Event,
        }
    }

    pub fn passage(&self) -> Option<Passage> {
        match *self {
            ItemKind::JewelPiece { passage, .. } | ItemKind::Cd { passage, .. } => Some(passage),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemData {
    pub name: String,
    pub kind: ItemKind,
    pub classification: Classification,
    pub quantity: usize, // Number of copies generated into the item pool
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoxType {
    Jewel(Quadrant),
    Cd,
    FullHealth,
}

impl BoxType {
    pub fn index(self) -> u8 {
        match self {
            BoxType::Jewel(q) => q as u8,
            BoxType::Cd => 4,
            BoxType::FullHealth => 5,
        }
    }

    pub fn from_index(idx: u8) -> Option<BoxType> {
        match idx {
            0..=3 => Quadrant::try_from(idx).ok().map(BoxType::Jewel),
            4 => Some(BoxType::Cd),
            5 => Some(BoxType::FullHealth),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationKind {
    Box {
        passage: Passage,
        level: LevelIdx,
        box_type: BoxType,
    },
    BossDefeat(Passage),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationData {
    pub name: String,
    pub kind: LocationKind,
}

impl LocationData {
    pub fn address(&self) -> Option<LocationId> {
        codec::encode_location(&self.kind)
    }
}

pub struct LevelData {
    pub name: &'static str,
    pub passage: Passage,
    pub level: LevelIdx,
    pub cd_title: Option<&'static str>,
    pub has_full_health: bool,
}

impl LevelData {
    pub fn jewel_box(&self, quadrant: Quadrant) -> String {
        format!("{} Jewel Piece Box ({})", self.name, quadrant.name())
    }

    pub fn cd_box(&self) -> String {
        format!("{} CD Box", self.name)
    }

    pub fn full_health_box(&self) -> String {
        format!("{} Full Health Item Box", self.name)
    }

    pub fn cd_item_name(&self) -> Option<String> {
        self.cd_title.map(|title| format!("{title} CD"))
    }

    pub fn default_locations(&self) -> Vec<LocationData> {
        let mut out: Vec<LocationData> = Quadrant::iter()
            .map(|q| LocationData {
                name: self.jewel_box(q),
                kind: self.box_kind(BoxType::Jewel(q)),
            })
            .collect();
        if self.cd_title.is_some() {
            out.push(LocationData {
                name: self.cd_box(),
                kind: self.box_kind(BoxType::Cd),
            });
        }
        if self.has_full_health {
            out.push(LocationData {
                name: self.full_health_box(),
                kind: self.box_kind(BoxType::FullHealth),
            });
        }
        out
    }

    pub fn default_location_names(&self) -> Vec<String> {
        self.default_locations().into_iter().map(|l| l.name).collect()
    }

    fn box_kind(&self, box_type: BoxType) -> LocationKind {
        LocationKind::Box {
            passage: self.passage,
            level: self.level,
            box_type,
        }
    }
}

pub struct PassageData {
    pub passage: Passage,
    pub hub_name: &'static str,
    pub levels: &'static [LevelData],
    pub boss: &'static str,
}

impl PassageData {
    pub fn boss_defeat(&self) -> String {
        format!("Defeat {}", self.boss)
    }
}

const fn level(
    name: &'static str,
    passage: Passage,
    level: LevelIdx,
    cd_title: &'static str,
) -> LevelData {
    LevelData {
        name,
        passage,
        level,
        cd_title: Some(cd_title),
        has_full_health: true,
    }
}

pub static PASSAGES: [PassageData; 6] = [
    PassageData {
        passage: Passage::Entry,
        hub_name: "Entry Passage",
        levels: &[LevelData {
            name: "Hall of Hieroglyphs",
            passage: Passage::Entry,
            level: 0,
            cd_title: None,
            has_full_health: true,
        }],
        boss: "Spoiled Rotten",
    },
    PassageData {
        passage: Passage::Emerald,
        hub_name: "Emerald Passage",
        levels: &[
            level("Palm Tree Paradise", Passage::Emerald, 0, "About that Shepherd"),
            level("Wildflower Fields", Passage::Emerald, 1, "Things that Never Change"),
            level("Mystic Lake", Passage::Emerald, 2, "Tomorrow's Blood Pressure"),
            level("Monsoon Jungle", Passage::Emerald, 3, "Beyond the Headrush"),
        ],
        boss: "Cractus",
    },
    PassageData {
        passage: Passage::Ruby,
        hub_name: "Ruby Passage",
        levels: &[
            level("The Curious Factory", Passage::Ruby, 0, "Driftwood & the Island Dog"),
            level("The Toxic Landfill", Passage::Ruby, 1, "The Judge's Feet"),
            level("40 Below Fridge", Passage::Ruby, 2, "The Moon's Lamppost"),
            level("Pinball Zone", Passage::Ruby, 3, "Soft Shell"),
        ],
        boss: "Cuckoo Condor",
    },
    PassageData {
        passage: Passage::Topaz,
        hub_name: "Topaz Passage",
        levels: &[
            level("Toy Block Tower", Passage::Topaz, 0, "So Sleepy"),
            level("The Big Board", Passage::Topaz, 1, "The Short Futon"),
            level("Doodle Woods", Passage::Topaz, 2, "Avocado Song"),
            level("Domino Row", Passage::Topaz, 3, "Mr. Fly"),
        ],
        boss: "Aerodent",
    },
    PassageData {
        passage: Passage::Sapphire,
        hub_name: "Sapphire Passage",
        levels: &[
            level("Crescent Moon Village", Passage::Sapphire, 0, "Yesterday's Words"),
            level("Arabian Night", Passage::Sapphire, 1, "The Errand"),
            level("Fiery Cavern", Passage::Sapphire, 2, "You and Your Shoes"),
            level("Hotel Horror", Passage::Sapphire, 3, "Mr. Ether & Planaria"),
        ],
        boss: "Catbat",
    },
    PassageData {
        passage: Passage::Golden,
        hub_name: "Golden Pyramid",
        levels: &[LevelData {
            name: "Golden Passage",
            passage: Passage::Golden,
            level: 0,
            cd_title: None,
            has_full_health: false,
        }],
        boss: "Golden Diva",
    },
];

pub fn standard_items() -> Vec<ItemData> {
    let mut items: Vec<ItemData> = vec![];
    for passage in Passage::iter() {
        let quantity = if passage.is_elemental() { 4 } else { 1 };
        for quadrant in Quadrant::iter() {
            items.push(ItemData {
                name: passage.jewel_item_name(quadrant),
                kind: ItemKind::JewelPiece { passage, quadrant },
                classification: Classification::Progression,
                quantity,
            });
        }
    }
    for passage_data in &PASSAGES {
        for level_data in passage_data.levels {
            if let Some(name) = level_data.cd_item_name() {
                items.push(ItemData {
                    name,
                    kind: ItemKind::Cd {
                        passage: level_data.passage,
                        level: level_data.level,
                    },
                    classification: Classification::Filler,
                    quantity: 1,
                });
            }
        }
    }
    let full_health_boxes = PASSAGES
        .iter()
        .flat_map(|p| p.levels.iter())
        .filter(|l| l.has_full_health)
        .count();
    let consumables = [
        ("Full Health Item", Consumable::FullHealth, Classification::Useful, full_health_boxes),
        ("Wario Form Trap", Consumable::WarioFormTrap, Classification::Trap, 0),
        ("Heart", Consumable::Heart, Classification::Filler, 0),
        ("Lightning Trap", Consumable::LightningTrap, Classification::Trap, 0),
    ];
    for (name, consumable, classification, quantity) in consumables {
        items.push(ItemData {
            name: name.to_string(),
            kind: ItemKind::Consumable(consumable),
            classification,
            quantity,
        });
    }
    let events = Passage::iter()
        .filter_map(|p| p.clear_event_name())
        .chain(std::iter::once(VICTORY_EVENT.to_string()));
    for name in events {
        items.push(ItemData {
            name,
            kind: ItemKind::Event,
            classification: Classification::Progression,
            quantity: 0,
        });
    }
    items
}

pub fn standard_locations() -> Vec<LocationData> {
    let mut locations: Vec<LocationData> = vec![];
    for passage_data in &PASSAGES {
        for level_data in passage_data.levels {
            locations.extend(level_data.default_locations());
        }
        locations.push(LocationData {
            name: passage_data.boss_defeat(),
            kind: LocationKind::BossDefeat(passage_data.passage),
        });
    }
    locations
}

/// Static table of every item and location, indexed by name and by wire
/// identity. Read-only once built.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub items: Vec<ItemData>,
    pub item_isv: IndexedVec<String>,
    pub locations: Vec<LocationData>,
    pub location_isv: IndexedVec<String>,
    item_idx_by_kind: HashMap<ItemKind, ItemIdx>,
    location_idx_by_kind: HashMap<LocationKind, CatalogLocationIdx>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Catalog {
        Catalog::index(standard_items(), standard_locations())
    }

    /// Builds a catalog from injected tables, rejecting duplicate names and
    /// records that would share an identifier.
    pub fn from_parts(items: Vec<ItemData>, locations: Vec<LocationData>) -> Result<Catalog> {
        let catalog = Catalog::index(items, locations);
        let num_events = catalog
            .items
            .iter()
            .filter(|i| i.kind == ItemKind::Event)
            .count();
        if catalog.item_isv.len() != catalog.items.len() {
            return Err(Error::DuplicateCatalogEntry(first_duplicate(
                catalog.items.iter().map(|i| &i.name),
            )));
        }
        if catalog.item_idx_by_kind.len() + num_events != catalog.items.len() {
            return Err(Error::DuplicateCatalogEntry(first_duplicate_by(
                catalog.items.iter().filter(|i| i.kind != ItemKind::Event),
                |i| i.kind,
                |i| i.name.clone(),
            )));
        }
        if catalog.location_isv.len() != catalog.locations.len() {
            return Err(Error::DuplicateCatalogEntry(first_duplicate(
                catalog.locations.iter().map(|l| &l.name),
            )));
        }
        if catalog.location_idx_by_kind.len() != catalog.locations.len() {
            return Err(Error::DuplicateCatalogEntry(first_duplicate_by(
                catalog.locations.iter(),
                |l| l.kind,
                |l| l.name.clone(),
            )));
        }
        Ok(catalog)
    }

    fn index(items: Vec<ItemData>, locations: Vec<LocationData>) -> Catalog {
        let mut item_isv: IndexedVec<String> = IndexedVec::default();
        let mut item_idx_by_kind: HashMap<ItemKind, ItemIdx> = HashMap::new();
        for (idx, item) in items.iter().enumerate() {
            item_isv.add(&item.name);
            if item.kind != ItemKind::Event {
                item_idx_by_kind.entry(item.kind).or_insert(idx);
            }
        }
        let mut location_isv: IndexedVec<String> = IndexedVec::default();
        let mut location_idx_by_kind: HashMap<LocationKind, CatalogLocationIdx> = HashMap::new();
        for (idx, loc) in locations.iter().enumerate() {
            location_isv.add(&loc.name);
            location_idx_by_kind.entry(loc.kind).or_insert(idx);
        }
        Catalog {
            items,
            item_isv,
            locations,
            location_isv,
            item_idx_by_kind,
            location_idx_by_kind,
        }
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    pub fn item_idx(&self, name: &str) -> Option<ItemIdx> {
        self.item_isv.get(name)
    }

    pub fn item(&self, name: &str) -> Result<&ItemData> {
        self.item_idx(name)
            .map(|idx| &self.items[idx])
            .ok_or_else(|| Error::UnknownItemName(name.to_string()))
    }

    pub fn location(&self, name: &str) -> Result<&LocationData> {
        self.location_isv
            .get(name)
            .map(|idx| &self.locations[idx])
            .ok_or_else(|| Error::UnknownLocationName(name.to_string()))
    }

    pub fn filter_items(
        &self,
        category: Option<ItemCategory>,
        passage: Option<Passage>,
    ) -> impl Iterator<Item = (ItemIdx, &ItemData)> {
        self.items.iter().enumerate().filter(move |(_, item)| {
            category.is_none_or(|c| item.kind.category() == c)
                && passage.is_none_or(|p| item.kind.passage() == Some(p))
        })
    }

    pub fn jewel_piece(&self, passage: Passage, quadrant: Quadrant) -> Option<ItemIdx> {
        self.item_idx_by_kind
            .get(&ItemKind::JewelPiece { passage, quadrant })
            .copied()
    }

    /// The jewel pieces of one passage, in quadrant order. Quadrants the
    /// catalog lacks are skipped.
    pub fn jewel_pieces(&self, passage: Passage) -> Vec<ItemIdx> {
        Quadrant::iter()
            .filter_map(|quadrant| self.jewel_piece(passage, quadrant))
            .collect()
    }

    pub fn passage_clear_event(&self, passage: Passage) -> Option<ItemIdx> {
        passage
            .clear_event_name()
            .and_then(|name| self.item_idx(&name))
    }

    pub fn victory_event(&self) -> Option<ItemIdx> {
        self.item_idx(VICTORY_EVENT)
    }

    pub fn item_by_id(&self, id: ItemId) -> Result<(ItemIdx, &ItemData)> {
        let kind = codec::decode(id)?;
        let idx = *self
            .item_idx_by_kind
            .get(&kind)
            .ok_or(Error::UnknownIdentifier(id))?;
        Ok((idx, &self.items[idx]))
    }

    pub fn location_by_id(&self, id: LocationId) -> Result<&LocationData> {
        let kind = codec::decode_location(id)?;
        let idx = *self
            .location_idx_by_kind
            .get(&kind)
            .ok_or(Error::UnknownLocationIdentifier(id))?;
        Ok(&self.locations[idx])
    }

    pub fn item_name_to_id(&self) -> HashMap<String, ItemId> {
        self.items
            .iter()
            .filter_map(|item| codec::encode(&item.kind).map(|id| (item.name.clone(), id)))
            .collect()
    }

    pub fn location_name_to_id(&self) -> HashMap<String, LocationId> {
        self.locations
            .iter()
            .filter_map(|loc| loc.address().map(|id| (loc.name.clone(), id)))
            .collect()
    }

    /// Locations that receive an item from the pool (boss defeats hold
    /// locked events instead).
    pub fn placeable_location_count(&self) -> usize {
        self.locations
            .iter()
            .filter(|loc| loc.address().is_some())
            .count()
    }

    pub fn item_pool_size(&self) -> usize {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

fn first_duplicate<'a>(names: impl Iterator<Item = &'a String>) -> String {
    first_duplicate_by(names, |n| (*n).clone(), |n| (*n).clone())
}

fn first_duplicate_by<T, K: Hash + Eq>(
    entries: impl Iterator<Item = T>,
    key: impl Fn(&T) -> K,
    name: impl Fn(&T) -> String,
) -> String {
    let mut seen: HashMap<K, ()> = HashMap::new();
    for entry in entries {
        if seen.insert(key(&entry), ()).is_some() {
            return name(&entry);
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_sizes() {
        let catalog = Catalog::new();
        assert_eq!(catalog.placeable_location_count(), 72 + 16 + 17);
        assert_eq!(catalog.item_pool_size(), catalog.placeable_location_count());
        assert_eq!(catalog.locations.len(), 105 + 6);
        assert_eq!(
            catalog.filter_items(Some(ItemCategory::JewelPiece), None).count(),
            24
        );
        assert_eq!(catalog.filter_items(Some(ItemCategory::Cd), None).count(), 16);
        assert_eq!(
            catalog
                .filter_items(Some(ItemCategory::Cd), Some(Passage::Ruby))
                .count(),
            4
        );
    }

    #[test]
    fn test_standard_tables_are_consistent() {
        let catalog = Catalog::from_parts(standard_items(), standard_locations());
        assert!(catalog.is_ok());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut items = standard_items();
        let mut extra = items[0].clone();
        extra.kind = ItemKind::Consumable(Consumable::Heart);
        items.push(extra);
        let err = Catalog::from_parts(items, standard_locations()).unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateCatalogEntry("Top Left Entry Jewel Piece".to_string())
        );
    }

    #[test]
    fn test_lookup_by_name() {
        let catalog = Catalog::new();
        assert!(catalog.location("Mystic Lake CD Box").is_ok());
        assert!(catalog.location("Hall of Hieroglyphs CD Box").is_err());
        assert!(catalog.location("Golden Passage Full Health Item Box").is_err());
        assert_eq!(
            catalog.item("Soft Shell CD").unwrap().kind,
            ItemKind::Cd {
                passage: Passage::Ruby,
                level: 3
            }
        );
        assert_eq!(
            catalog.item("Nothing"),
            Err(Error::UnknownItemName("Nothing".to_string()))
        );
    }

    #[test]
    fn test_jewel_pieces_in_quadrant_order() {
        let catalog = Catalog::new();
        let names: Vec<&str> = catalog
            .jewel_pieces(Passage::Golden)
            .into_iter()
            .map(|idx| catalog.items[idx].name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Top Left Golden Jewel Piece",
                "Bottom Left Golden Jewel Piece",
                "Bottom Right Golden Jewel Piece",
                "Top Right Golden Jewel Piece",
            ]
        );
        assert_eq!(
            catalog.items[catalog.jewel_pieces(Passage::Topaz)[3]].name,
            "Top Right Topaz Piece"
        );
    }

    #[test]
    fn test_events() {
        let catalog = Catalog::new();
        assert!(catalog.passage_clear_event(Passage::Golden).is_none());
        let idx = catalog.passage_clear_event(Passage::Sapphire).unwrap();
        assert_eq!(catalog.items[idx].name, "Sapphire Passage Clear");
        assert_eq!(
            catalog.items[catalog.victory_event().unwrap()].kind,
            ItemKind::Event
        );
    }

    #[test]
    fn test_name_to_id_maps_agree_with_codec() {
        let catalog = Catalog::new();
        let item_ids = catalog.item_name_to_id();
        assert_eq!(item_ids.len(), 44);
        for (name, &id) in &item_ids {
            assert_eq!(&catalog.item(name).unwrap().kind, &codec::decode(id).unwrap());
            assert_eq!(&catalog.item_by_id(id).unwrap().1.name, name);
        }
        assert!(!item_ids.contains_key(VICTORY_EVENT));

        let location_ids = catalog.location_name_to_id();
        assert_eq!(location_ids.len(), 105);
        for (name, &id) in &location_ids {
            assert_eq!(
                catalog.location(name).unwrap().kind,
                codec::decode_location(id).unwrap()
            );
        }
        assert!(!location_ids.contains_key("Defeat Golden Diva"));
    }
}
