//! Per-turn computation state.
//!
//! A `TurnContext` is built fresh from the board at the start of every turn
//! and owns everything the strategy passes mutate: the distance table, the
//! availability budgets, and the destination list.

use tracing::{info, trace};

use crate::board::{
    turn_based_distance, Board, DistanceTable, DroneId, IdSet, Point, ZoneId,
};

use super::availability::Availability;

pub struct TurnContext<'a> {
    pub board: &'a Board,
    pub distances: DistanceTable,
    pub availability: Availability,
    destinations: Vec<Option<Point>>,
}

impl<'a> TurnContext<'a> {
    /// Computes distances and resets budgets and destinations for a new turn.
    pub fn new(board: &'a Board) -> Self {
        let n = board.drones_per_player();
        TurnContext {
            board,
            distances: DistanceTable::build(board),
            availability: Availability::new(n),
            destinations: vec![None; n],
        }
    }

    pub fn num_drones(&self) -> usize {
        self.destinations.len()
    }

    /// Own drones that can be inside `zone` within `max_turns` turns.
    pub fn own_drones_within(&self, zone: ZoneId, max_turns: u32) -> IdSet {
        self.distances.drones_within(self.board.me, zone, max_turns)
    }

    /// Largest number of drones any single opponent has within `dist` turns of `zone`.
    pub fn max_enemies_near_zone(&self, zone: ZoneId, dist: u32) -> usize {
        self.board
            .opponents()
            .map(|p| self.distances.drones_within(p, zone, dist).len())
            .max()
            .unwrap_or(0)
    }

    /// Largest number of drones any single opponent has inside `zone` right now.
    pub fn most_drones_by_single_opponent_in_zone(&self, zone: ZoneId) -> usize {
        self.max_enemies_near_zone(zone, 0)
    }

    pub fn is_assigned(&self, drone: DroneId) -> bool {
        self.availability.is_assigned(drone)
    }

    pub fn destination(&self, drone: DroneId) -> Option<Point> {
        self.destinations[drone]
    }

    /// Whether `drone` is inside `zone` and already ordered to stay there.
    pub fn is_holding(&self, drone: DroneId, zone: ZoneId) -> bool {
        if !self.is_assigned(drone) {
            return false;
        }
        let center = self.board.zones[zone].position;
        let here = self.board.own_drones()[drone];
        match self.destinations[drone] {
            Some(dest) => {
                turn_based_distance(center, here) == 0 && turn_based_distance(dest, center) == 0
            }
            None => false,
        }
    }

    /// Own drones that have not been given a destination yet, in id order.
    pub fn unassigned(&self) -> impl Iterator<Item = DroneId> + '_ {
        (0..self.num_drones()).filter(move |&d| !self.is_assigned(d))
    }

    /// Sends `drone` to `point` and marks it assigned.
    pub fn assign_to_point(&mut self, drone: DroneId, point: Point, reason: &str) {
        debug_assert!(
            !self.is_assigned(drone),
            "drone {} already has a destination",
            drone
        );
        info!(drone, x = point.x, y = point.y, reason, "moving drone");
        self.availability.set_available_distance(drone, 0);
        self.destinations[drone] = Some(point);
    }

    /// Sends `drone` to the center of `zone`.
    pub fn assign_to_zone(&mut self, drone: DroneId, zone: ZoneId, reason: &str) {
        trace!(drone, zone, "assigning drone to zone");
        let center = self.board.zones[zone].position;
        self.assign_to_point(drone, center, reason);
    }

    /// Orders `drone` to stay where it is.
    pub fn pin_in_place(&mut self, drone: DroneId, reason: &str) {
        let here = self.board.own_drones()[drone];
        self.assign_to_point(drone, here, reason);
    }

    /// Final destinations in drone order.
    ///
    /// A drone left without orders holds its position.
    pub fn into_destinations(self) -> Vec<Point> {
        debug_assert!(
            self.destinations.iter().all(Option::is_some),
            "pipeline left drones unassigned"
        );
        let own = self.board.own_drones();
        self.destinations
            .iter()
            .enumerate()
            .map(|(d, dest)| dest.unwrap_or(own[d]))
            .collect()
    }
}
