use hashbrown::HashMap;
use wl4_game::{Error, PlayerId, Result};

use crate::{
    item_pool::Item,
    regions::{Location, Region, WorldGraph},
};

/// Every player's world plus the shared item pool.
#[derive(Default, Clone, Debug)]
pub struct MultiWorld {
    pub worlds: HashMap<PlayerId, WorldGraph>,
    pub itempool: Vec<Item>,
}

impl MultiWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any world previously registered for the same player.
    pub fn add_world(&mut self, graph: WorldGraph) {
        self.worlds.insert(graph.player, graph);
    }

    pub fn players(&self) -> Vec<PlayerId> {
        let mut players: Vec<PlayerId> = self.worlds.keys().copied().collect();
        players.sort();
        players
    }

    pub fn world(&self, player: PlayerId) -> Result<&WorldGraph> {
        self.worlds.get(&player).ok_or(Error::UnknownPlayer(player))
    }

    pub fn world_mut(&mut self, player: PlayerId) -> Result<&mut WorldGraph> {
        self.worlds
            .get_mut(&player)
            .ok_or(Error::UnknownPlayer(player))
    }

    pub fn get_region(&self, name: &str, player: PlayerId) -> Result<&Region> {
        self.world(player)?.region(name)
    }

    pub fn get_location(&self, name: &str, player: PlayerId) -> Result<&Location> {
        self.world(player)?.location(name)
    }

    pub fn get_location_mut(&mut self, name: &str, player: PlayerId) -> Result<&mut Location> {
        self.world_mut(player)?.location_mut(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::build_graph;
    use wl4_game::Catalog;

    #[test]
    fn test_lookup_by_player() {
        let catalog = Catalog::new();
        let mut multiworld = MultiWorld::new();
        multiworld.add_world(build_graph(&catalog, 2, 4).unwrap());
        multiworld.add_world(build_graph(&catalog, 1, 1).unwrap());
        assert_eq!(multiworld.players(), vec![1, 2]);

        assert!(multiworld.get_region("Catbat", 2).is_ok());
        assert_eq!(
            multiworld.get_region("Catbat", 3),
            Err(Error::UnknownPlayer(3))
        );
        assert_eq!(
            multiworld.get_location("Defeat Wario", 1),
            Err(Error::UnknownLocationName("Defeat Wario".to_string()))
        );
        let loc = multiworld
            .get_location_mut("Pinball Zone CD Box", 1)
            .unwrap();
        assert!(loc.item.is_none());
    }
}
