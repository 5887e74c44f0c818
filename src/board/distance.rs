//! Per-turn distance table.
//!
//! Turn-based distance from every drone of every player to every zone center,
//! stored flat and indexed `[player][drone][zone]`.

use super::geometry::turn_based_distance;
use super::idset::IdSet;
use super::state::{Board, DroneId, PlayerId, ZoneId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    drones_per_player: usize,
    num_zones: usize,
    turns: Vec<u32>,
}

impl DistanceTable {
    /// Computes the table from the board's current drone positions.
    pub fn build(board: &Board) -> Self {
        let drones_per_player = board.drones_per_player();
        let num_zones = board.num_zones();
        let mut turns = Vec::with_capacity(board.num_players() * drones_per_player * num_zones);
        for player in &board.players {
            for &drone in &player.drones {
                for zone in &board.zones {
                    turns.push(turn_based_distance(drone, zone.position));
                }
            }
        }
        DistanceTable {
            drones_per_player,
            num_zones,
            turns,
        }
    }

    #[inline]
    fn index(&self, player: PlayerId, drone: DroneId, zone: ZoneId) -> usize {
        debug_assert!(drone < self.drones_per_player && zone < self.num_zones);
        (player * self.drones_per_player + drone) * self.num_zones + zone
    }

    /// Turns needed for `drone` of `player` to be inside `zone`.
    #[inline]
    pub fn get(&self, player: PlayerId, drone: DroneId, zone: ZoneId) -> u32 {
        self.turns[self.index(player, drone, zone)]
    }

    /// Drones of `player` that can be inside `zone` within `max_turns` turns.
    ///
    /// `max_turns == 0` selects the drones currently inside the zone.
    pub fn drones_within(&self, player: PlayerId, zone: ZoneId, max_turns: u32) -> IdSet {
        (0..self.drones_per_player)
            .filter(|&d| self.get(player, d, zone) <= max_turns)
            .collect()
    }
}
