use log::{debug, info};
use serde::Serialize;
use wl4_game::{
    Catalog, Error, IndexedVec, LocationData, LocationId, LocationKind, MAP_REGION, MENU_REGION,
    PASSAGES, Passage, PlayerId, Result,
};
use wl4_logic::{
    Requirement,
    helpers::{boss_jewel_requirement, boss_quorum_requirement},
};

use crate::{entrance_names::EntranceNames, item_pool::Item, settings::WorldSettings};

pub type RegionIdx = usize; // Index into WorldGraph.regions
pub type EntranceIdx = usize; // Index into WorldGraph.entrances
pub type LocationIdx = usize; // Index into WorldGraph.locations

const NO_LOCATIONS: [&str; 0] = [];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Location {
    pub name: String,
    pub address: Option<LocationId>, // None for event locations
    pub kind: LocationKind,
    pub region: RegionIdx,
    pub item: Option<Item>,
}

impl Location {
    pub fn is_event(&self) -> bool {
        self.address.is_none()
    }

    pub fn place_locked_item(&mut self, item: Item) -> Result<()> {
        if self.item.is_some() {
            return Err(Error::LocationAlreadyFilled(self.name.clone()));
        }
        self.item = Some(item);
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Region {
    pub name: String,
    pub locations: Vec<LocationIdx>,
    pub exits: Vec<EntranceIdx>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Entrance {
    pub name: String,
    pub source: RegionIdx,
    pub target: RegionIdx,
    pub requirement: Requirement,
}

/// One player's regions, entrances and locations. Names are only used at the
/// boundary; everything inside refers to indices.
#[derive(Clone, Debug)]
pub struct WorldGraph {
    pub player: PlayerId,
    pub regions: Vec<Region>,
    pub entrances: Vec<Entrance>,
    pub locations: Vec<Location>,
    pub region_isv: IndexedVec<String>,
    pub entrance_isv: IndexedVec<String>,
    pub location_isv: IndexedVec<String>,
}

impl WorldGraph {
    pub fn new(player: PlayerId) -> Self {
        WorldGraph {
            player,
            regions: vec![],
            entrances: vec![],
            locations: vec![],
            region_isv: IndexedVec::default(),
            entrance_isv: IndexedVec::default(),
            location_isv: IndexedVec::default(),
        }
    }

    pub fn add_region(&mut self, name: &str) -> Result<RegionIdx> {
        if self.region_isv.get(name).is_some() {
            return Err(Error::DuplicateRegionName(name.to_string()));
        }
        let idx = self.region_isv.add(name);
        self.regions.push(Region {
            name: name.to_string(),
            locations: vec![],
            exits: vec![],
        });
        Ok(idx)
    }

    pub fn add_location(&mut self, region: RegionIdx, data: &LocationData) -> Result<LocationIdx> {
        if self.location_isv.get(data.name.as_str()).is_some() {
            return Err(Error::DuplicateCatalogEntry(data.name.clone()));
        }
        let idx = self.location_isv.add(&data.name);
        self.locations.push(Location {
            name: data.name.clone(),
            address: data.address(),
            kind: data.kind,
            region,
            item: None,
        });
        self.regions[region].locations.push(idx);
        Ok(idx)
    }

    pub fn add_entrance(
        &mut self,
        name: &str,
        source: RegionIdx,
        target: RegionIdx,
        requirement: Requirement,
    ) -> Result<EntranceIdx> {
        if self.entrance_isv.get(name).is_some() {
            return Err(Error::DuplicateEntranceName(name.to_string()));
        }
        let idx = self.entrance_isv.add(name);
        self.entrances.push(Entrance {
            name: name.to_string(),
            source,
            target,
            requirement,
        });
        self.regions[source].exits.push(idx);
        Ok(idx)
    }

    pub fn region_idx(&self, name: &str) -> Result<RegionIdx> {
        self.region_isv
            .get(name)
            .ok_or_else(|| Error::UnknownRegionName(name.to_string()))
    }

    pub fn location_idx(&self, name: &str) -> Result<LocationIdx> {
        self.location_isv
            .get(name)
            .ok_or_else(|| Error::UnknownLocationName(name.to_string()))
    }

    pub fn region(&self, name: &str) -> Result<&Region> {
        Ok(&self.regions[self.region_idx(name)?])
    }

    pub fn location(&self, name: &str) -> Result<&Location> {
        Ok(&self.locations[self.location_idx(name)?])
    }

    pub fn location_mut(&mut self, name: &str) -> Result<&mut Location> {
        let idx = self.location_idx(name)?;
        Ok(&mut self.locations[idx])
    }

    pub fn entrance(&self, name: &str) -> Result<&Entrance> {
        self.entrance_isv
            .get(name)
            .map(|idx| &self.entrances[idx])
            .ok_or_else(|| Error::UnknownEntranceName(name.to_string()))
    }

    pub fn entrances_into(&self, target: RegionIdx) -> impl Iterator<Item = &Entrance> {
        self.entrances.iter().filter(move |e| e.target == target)
    }

    /// Locations that take an item from the pool.
    pub fn placeable_locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter().filter(|loc| !loc.is_event())
    }
}

pub struct RegionGraphBuilder<'a> {
    catalog: &'a Catalog,
    graph: WorldGraph,
    entrance_names: EntranceNames,
}

impl<'a> RegionGraphBuilder<'a> {
    pub fn new(catalog: &'a Catalog, player: PlayerId) -> Self {
        RegionGraphBuilder {
            catalog,
            graph: WorldGraph::new(player),
            entrance_names: EntranceNames::new(),
        }
    }

    /// Adds a region holding the named catalog locations. Every name is
    /// resolved before anything is added.
    pub fn create_region<S: AsRef<str>>(
        &mut self,
        name: &str,
        locations: impl IntoIterator<Item = S>,
    ) -> Result<RegionIdx> {
        let catalog = self.catalog;
        let location_data: Vec<&LocationData> = locations
            .into_iter()
            .map(|loc| catalog.location(loc.as_ref()))
            .collect::<Result<_>>()?;
        let region = self.graph.add_region(name)?;
        for data in location_data {
            self.graph.add_location(region, data)?;
        }
        Ok(region)
    }

    pub fn connect(
        &mut self,
        source: &str,
        target: &str,
        requirement: Requirement,
    ) -> Result<EntranceIdx> {
        let source_idx = self.graph.region_idx(source)?;
        let target_idx = self.graph.region_idx(target)?;
        let name = self.entrance_names.assign(target);
        debug!(
            "Player {}: {source} -> {target} as '{name}' ({})",
            self.graph.player,
            requirement.describe(self.catalog)
        );
        self.graph
            .add_entrance(&name, source_idx, target_idx, requirement)
    }

    pub fn finish(self) -> WorldGraph {
        self.graph
    }
}

pub fn create_regions(builder: &mut RegionGraphBuilder) -> Result<()> {
    builder.create_region(MENU_REGION, NO_LOCATIONS)?;
    builder.create_region(MAP_REGION, NO_LOCATIONS)?;
    for passage_data in &PASSAGES {
        builder.create_region(passage_data.hub_name, NO_LOCATIONS)?;
        for level_data in passage_data.levels {
            builder.create_region(level_data.name, level_data.default_location_names())?;
        }
        builder.create_region(passage_data.boss, [passage_data.boss_defeat()])?;
    }
    Ok(())
}

pub fn connect_regions(builder: &mut RegionGraphBuilder, settings: &WorldSettings) -> Result<()> {
    let catalog = builder.catalog;
    for passage_data in &PASSAGES {
        let passage = passage_data.passage;
        let (hub_source, hub_requirement) = match passage {
            Passage::Entry => (MENU_REGION, Requirement::Free),
            Passage::Golden => (
                MAP_REGION,
                boss_quorum_requirement(catalog, settings.required_bosses)?,
            ),
            _ => (MAP_REGION, Requirement::Free),
        };
        builder.connect(hub_source, passage_data.hub_name, hub_requirement)?;

        let mut prev = passage_data.hub_name;
        for level_data in passage_data.levels {
            builder.connect(prev, level_data.name, Requirement::Free)?;
            prev = level_data.name;
        }
        builder.connect(
            prev,
            passage_data.boss,
            boss_jewel_requirement(catalog, passage, settings.required_jewels)?,
        )?;
        if passage == Passage::Entry {
            builder.connect(passage_data.boss, MAP_REGION, Requirement::Free)?;
        }
    }
    Ok(())
}

pub fn build_graph(
    catalog: &Catalog,
    player: PlayerId,
    required_jewels: usize,
) -> Result<WorldGraph> {
    let settings = WorldSettings {
        required_jewels,
        ..WorldSettings::default()
    };
    build_graph_with_settings(catalog, player, &settings)
}

pub fn build_graph_with_settings(
    catalog: &Catalog,
    player: PlayerId,
    settings: &WorldSettings,
) -> Result<WorldGraph> {
    settings.check()?;
    let mut builder = RegionGraphBuilder::new(catalog, player);
    create_regions(&mut builder)?;
    connect_regions(&mut builder, settings)?;
    let graph = builder.finish();
    info!(
        "Player {player}: built {} regions, {} entrances, {} locations",
        graph.regions.len(),
        graph.entrances.len(),
        graph.locations.len()
    );
    Ok(graph)
}
