use anyhow::Result;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use wl4_game::{Catalog, ItemId, LocationId, MENU_REGION, PlayerId, VICTORY_EVENT, codec};
use wl4_logic::Inventory;

use crate::{
    item_pool::Item,
    regions::WorldGraph,
    settings::WorldSettings,
    traverse::{get_spoiler_route, sweep},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpoilerLocation {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<LocationId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpoilerRegion {
    pub name: String,
    pub locations: Vec<SpoilerLocation>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpoilerEntrance {
    pub name: String,
    pub from: String,
    pub to: String,
    pub requirement: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpoilerItemCount {
    pub name: String,
    pub id: ItemId,
    pub count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SpoilerLog {
    pub player: PlayerId,
    pub codec_version: u32,
    pub id_offset: u64,
    pub settings: WorldSettings,
    pub regions: Vec<SpoilerRegion>,
    pub entrances: Vec<SpoilerEntrance>,
    pub item_pool: Vec<SpoilerItemCount>,
    // Entrance names from the menu to the golden pyramid's boss, if it is
    // reachable with the items already placed.
    pub route_to_victory: Option<Vec<String>>,
}

fn get_item_pool_summary(item_pool: &[Item], player: PlayerId) -> Vec<SpoilerItemCount> {
    let mut counts: HashMap<ItemId, (String, usize)> = HashMap::new();
    for item in item_pool.iter().filter(|i| i.player == player) {
        let Some(id) = item.code else {
            continue;
        };
        counts.entry(id).or_insert_with(|| (item.name.clone(), 0)).1 += 1;
    }
    let mut out: Vec<SpoilerItemCount> = counts
        .into_iter()
        .map(|(id, (name, count))| SpoilerItemCount { name, id, count })
        .collect();
    out.sort_by_key(|c| c.id);
    out
}

fn get_route_to_victory(catalog: &Catalog, graph: &WorldGraph) -> Result<Option<Vec<String>>> {
    let start = graph.region_idx(MENU_REGION)?;
    let result = sweep(graph, catalog, start, Inventory::new(catalog.num_items()));
    let Some(victory_loc) = graph
        .locations
        .iter()
        .find(|loc| loc.item.as_ref().is_some_and(|item| item.name == VICTORY_EVENT))
    else {
        return Ok(None);
    };
    Ok(
        get_spoiler_route(&result.traverse_result, victory_loc.region).map(|route| {
            route
                .into_iter()
                .map(|idx| graph.entrances[idx].name.clone())
                .collect()
        }),
    )
}

pub fn get_spoiler_log(
    catalog: &Catalog,
    graph: &WorldGraph,
    settings: &WorldSettings,
    item_pool: &[Item],
) -> Result<SpoilerLog> {
    let regions = graph
        .regions
        .iter()
        .map(|region| SpoilerRegion {
            name: region.name.clone(),
            locations: region
                .locations
                .iter()
                .map(|&idx| {
                    let loc = &graph.locations[idx];
                    SpoilerLocation {
                        name: loc.name.clone(),
                        address: loc.address,
                        item: loc.item.as_ref().map(|item| item.name.clone()),
                    }
                })
                .collect(),
        })
        .collect();
    let entrances = graph
        .entrances
        .iter()
        .map(|e| SpoilerEntrance {
            name: e.name.clone(),
            from: graph.regions[e.source].name.clone(),
            to: graph.regions[e.target].name.clone(),
            requirement: e.requirement.describe(catalog),
        })
        .collect();

    Ok(SpoilerLog {
        player: graph.player,
        codec_version: codec::CODEC_VERSION,
        id_offset: codec::ID_OFFSET,
        settings: settings.clone(),
        regions,
        entrances,
        item_pool: get_item_pool_summary(item_pool, graph.player),
        route_to_victory: get_route_to_victory(catalog, graph)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        item_pool::{generate_item_pool, place_locked_events},
        regions::build_graph,
    };

    #[test]
    fn test_spoiler_log_summary() {
        let catalog = Catalog::new();
        let mut graph = build_graph(&catalog, 1, 4).unwrap();
        let pool = generate_item_pool(&catalog, &graph).unwrap();
        place_locked_events(&catalog, &mut graph).unwrap();
        let log = get_spoiler_log(&catalog, &graph, &WorldSettings::default(), &pool).unwrap();

        assert_eq!(log.regions.len(), graph.regions.len());
        assert_eq!(log.entrances.len(), graph.entrances.len());
        let total: usize = log.item_pool.iter().map(|c| c.count).sum();
        assert_eq!(total, 105);
        let full_health = log
            .item_pool
            .iter()
            .find(|c| c.name == "Full Health Item")
            .unwrap();
        assert_eq!(full_health.count, 17);
        // No jewels are placed, so the entry boss blocks the way.
        assert_eq!(log.route_to_victory, None);

        let json = serde_json::to_string(&log).unwrap();
        assert!(json.contains("\"Defeat Golden Diva\""));
    }
}
