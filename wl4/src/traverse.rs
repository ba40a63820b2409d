use log::debug;
use wl4_game::{Catalog, Error, MENU_REGION, Result, VICTORY_EVENT};
use wl4_logic::{Inventory, InventoryQuery};

use crate::regions::{EntranceIdx, LocationIdx, RegionIdx, WorldGraph};

pub type StepTrailId = i32;

#[derive(Clone, Debug)]
pub struct StepTrail {
    pub prev_trail_id: StepTrailId,
    pub entrance_idx: EntranceIdx,
}

#[derive(Clone, Debug)]
pub struct TraverseResult {
    pub reachable: Vec<bool>, // Indexed by RegionIdx
    pub step_trails: Vec<StepTrail>,
    pub start_trail_ids: Vec<Option<StepTrailId>>,
}

impl TraverseResult {
    pub fn is_reachable(&self, region: RegionIdx) -> bool {
        self.reachable.get(region).copied().unwrap_or(false)
    }

    pub fn num_reachable(&self) -> usize {
        self.reachable.iter().filter(|&&r| r).count()
    }
}

/// Breadth-first search over entrances whose requirements hold for the given
/// inventory. Regions are expanded in index order, so the trail recorded for
/// each region is the first shortest route found.
pub fn traverse<I: InventoryQuery + ?Sized>(
    graph: &WorldGraph,
    start: RegionIdx,
    inventory: &I,
) -> TraverseResult {
    let num_regions = graph.regions.len();
    let mut result = TraverseResult {
        reachable: vec![false; num_regions],
        step_trails: Vec::with_capacity(num_regions),
        start_trail_ids: vec![None; num_regions],
    };
    if start >= num_regions {
        return result;
    }
    result.reachable[start] = true;
    result.start_trail_ids[start] = Some(-1);

    let mut modified_regions: Vec<RegionIdx> = vec![start];
    while !modified_regions.is_empty() {
        let mut new_modified_regions: Vec<RegionIdx> = vec![];
        for &src in &modified_regions {
            let Some(src_trail_id) = result.start_trail_ids[src] else {
                continue;
            };
            for &entrance_idx in &graph.regions[src].exits {
                let entrance = &graph.entrances[entrance_idx];
                let dst = entrance.target;
                if result.reachable[dst] || !entrance.requirement.is_satisfied(inventory) {
                    continue;
                }
                let new_trail_id = result.step_trails.len() as StepTrailId;
                result.step_trails.push(StepTrail {
                    prev_trail_id: src_trail_id,
                    entrance_idx,
                });
                result.reachable[dst] = true;
                result.start_trail_ids[dst] = Some(new_trail_id);
                new_modified_regions.push(dst);
            }
        }
        modified_regions = new_modified_regions;
    }
    result
}

/// Entrances taken from the start region to `region`, or None if it was not
/// reached.
pub fn get_spoiler_route(
    traverse_result: &TraverseResult,
    region: RegionIdx,
) -> Option<Vec<EntranceIdx>> {
    let mut trail_id = (*traverse_result.start_trail_ids.get(region)?)?;
    let mut steps: Vec<EntranceIdx> = Vec::new();
    while trail_id != -1 {
        let step_trail = &traverse_result.step_trails[trail_id as usize];
        steps.push(step_trail.entrance_idx);
        trail_id = step_trail.prev_trail_id;
    }
    steps.reverse();
    Some(steps)
}

#[derive(Clone, Debug)]
pub struct SweepResult {
    pub inventory: Inventory,
    pub traverse_result: TraverseResult,
    pub collected: Vec<LocationIdx>, // In collection order
}

/// Repeatedly traverses and collects the items placed at reachable locations
/// until nothing new is picked up.
pub fn sweep(
    graph: &WorldGraph,
    catalog: &Catalog,
    start: RegionIdx,
    mut inventory: Inventory,
) -> SweepResult {
    let mut collected_mask = vec![false; graph.locations.len()];
    let mut collected: Vec<LocationIdx> = vec![];
    loop {
        let traverse_result = traverse(graph, start, &inventory);
        let mut new_items = 0;
        for (region_idx, region) in graph.regions.iter().enumerate() {
            if !traverse_result.is_reachable(region_idx) {
                continue;
            }
            for &loc_idx in &region.locations {
                if collected_mask[loc_idx] {
                    continue;
                }
                let Some(item) = &graph.locations[loc_idx].item else {
                    continue;
                };
                if item.player != graph.player {
                    continue;
                }
                collected_mask[loc_idx] = true;
                collected.push(loc_idx);
                inventory.collect(item.idx);
                new_items += 1;
            }
        }
        debug!(
            "Player {}: sweep step reached {} regions, collected {new_items} items",
            graph.player,
            traverse_result.num_reachable()
        );
        if new_items == 0 {
            if log::log_enabled!(log::Level::Trace) {
                inventory.print_debug(catalog);
            }
            return SweepResult {
                inventory,
                traverse_result,
                collected,
            };
        }
    }
}

/// Whether the victory event can be collected from the menu with the given
/// starting items and the items already placed in the graph.
pub fn can_beat_game(graph: &WorldGraph, catalog: &Catalog, inventory: Inventory) -> Result<bool> {
    let victory = catalog
        .victory_event()
        .ok_or_else(|| Error::UnknownItemName(VICTORY_EVENT.to_string()))?;
    let start = graph.region_idx(MENU_REGION)?;
    let result = sweep(graph, catalog, start, inventory);
    Ok(result.inventory.count(victory) > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        item_pool::{create_item, place_locked_events},
        regions::build_graph,
    };
    use wl4_game::{MAP_REGION, Passage};

    fn route_names(graph: &WorldGraph, route: &[EntranceIdx]) -> Vec<String> {
        route
            .iter()
            .map(|&idx| graph.entrances[idx].name.clone())
            .collect()
    }

    #[test]
    fn test_empty_inventory_stays_in_entry_passage() {
        let catalog = Catalog::new();
        let graph = build_graph(&catalog, 1, 4).unwrap();
        let menu = graph.region_idx(MENU_REGION).unwrap();
        let result = traverse(&graph, menu, &Inventory::new(catalog.num_items()));
        // Menu, entry hub, Hall of Hieroglyphs
        assert_eq!(result.num_reachable(), 3);
        let map = graph.region_idx(MAP_REGION).unwrap();
        assert!(!result.is_reachable(map));
        assert_eq!(get_spoiler_route(&result, map), None);
        assert_eq!(get_spoiler_route(&result, menu), Some(vec![]));
    }

    #[test]
    fn test_route_through_entry_boss() {
        let catalog = Catalog::new();
        let graph = build_graph(&catalog, 1, 4).unwrap();
        let mut inventory = Inventory::new(catalog.num_items());
        for item in catalog.jewel_pieces(Passage::Entry) {
            inventory.collect(item);
        }
        let menu = graph.region_idx(MENU_REGION).unwrap();
        let result = traverse(&graph, menu, &inventory);
        let map = graph.region_idx(MAP_REGION).unwrap();
        let route = get_spoiler_route(&result, map).unwrap();
        assert_eq!(
            route_names(&graph, &route),
            vec![
                "Entry Passage",
                "Hall of Hieroglyphs",
                "Spoiled Rotten",
                MAP_REGION
            ]
        );
        // Every elemental passage is open up to its boss.
        let cractus = graph.region_idx("Cractus").unwrap();
        assert!(!result.is_reachable(cractus));
        let jungle = graph.region_idx("Monsoon Jungle").unwrap();
        assert!(result.is_reachable(jungle));
    }

    #[test]
    fn test_sweep_collects_placed_items() {
        let catalog = Catalog::new();
        let mut graph = build_graph(&catalog, 1, 4).unwrap();
        for (quadrant, piece) in [
            ("Top Left", "Top Left Entry Jewel Piece"),
            ("Bottom Left", "Bottom Left Entry Jewel Piece"),
            ("Bottom Right", "Bottom Right Entry Jewel Piece"),
            ("Top Right", "Top Right Entry Jewel Piece"),
        ] {
            let item = create_item(&catalog, piece, 1, false).unwrap();
            graph
                .location_mut(&format!("Hall of Hieroglyphs Jewel Piece Box ({quadrant})"))
                .unwrap()
                .place_locked_item(item)
                .unwrap();
        }
        place_locked_events(&catalog, &mut graph).unwrap();

        let menu = graph.region_idx(MENU_REGION).unwrap();
        let result = sweep(&graph, &catalog, menu, Inventory::new(catalog.num_items()));
        // Four jewel pieces plus the entry boss event
        assert_eq!(result.collected.len(), 5);
        let clear = catalog.passage_clear_event(Passage::Entry).unwrap();
        assert_eq!(result.inventory.count(clear), 1);
        let map = graph.region_idx(MAP_REGION).unwrap();
        assert!(result.traverse_result.is_reachable(map));
        assert!(!can_beat_game(&graph, &catalog, Inventory::new(catalog.num_items())).unwrap());
    }

    #[test]
    fn test_other_players_items_not_collected() {
        let catalog = Catalog::new();
        let mut graph = build_graph(&catalog, 1, 4).unwrap();
        let item = create_item(&catalog, "Top Left Entry Jewel Piece", 2, false).unwrap();
        graph
            .location_mut("Hall of Hieroglyphs Jewel Piece Box (Top Left)")
            .unwrap()
            .place_locked_item(item)
            .unwrap();
        let menu = graph.region_idx(MENU_REGION).unwrap();
        let result = sweep(&graph, &catalog, menu, Inventory::new(catalog.num_items()));
        assert!(result.collected.is_empty());
    }
}
