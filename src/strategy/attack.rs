//! Attack planning.
//!
//! Builds the smallest force of own drones that outnumbers the strongest single
//! opponent around a target zone. The search expands ring by ring: at radius
//! `dist` it counts the rival drones that could be in the zone within `dist`
//! turns and draws own drones that could get there in the same time, nearest
//! first, until the force is strictly larger or the board is exhausted.

use tracing::trace;

use crate::board::{euclidean_distance, DroneId, IdSet, ZoneId, BOARD_DIAGONAL, MAX_DISTANCE};

use super::context::TurnContext;

/// A candidate plan to take a zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attack {
    pub target: ZoneId,
    /// Turns the farthest force member needs to reach the target.
    pub distance: u32,
    pub force: IdSet,
}

impl Attack {
    /// Recomputes `distance` from the current force.
    pub fn calculate_length(&mut self, ctx: &TurnContext<'_>) {
        let me = ctx.board.me;
        self.distance = self
            .force
            .iter()
            .map(|d| ctx.distances.get(me, d, self.target))
            .max()
            .unwrap_or(0);
    }

    /// Ordering key: fewest drones, then shortest, then lowest zone id.
    pub fn priority(&self) -> (usize, u32, ZoneId) {
        (self.force.len(), self.distance, self.target)
    }
}

/// A drone picked for a force.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Recruit {
    /// Already inside the target with orders to stay; needs no new order.
    Holding(DroneId),
    /// Free drone that must be sent to the target.
    Mover(DroneId),
}

impl Recruit {
    fn drone(self) -> DroneId {
        match self {
            Recruit::Holding(d) | Recruit::Mover(d) => d,
        }
    }
}

/// Picks the best recruit for `zone` out of `pool`.
///
/// A drone already holding the zone wins outright. Otherwise the unassigned
/// drone with enough budget to reach the zone and the smallest Euclidean
/// distance to its center is chosen, lowest id on ties.
fn nearest_recruit(ctx: &TurnContext<'_>, zone: ZoneId, pool: IdSet) -> Option<Recruit> {
    let me = ctx.board.me;
    let center = ctx.board.zones[zone].position;
    let drones = ctx.board.own_drones();

    let mut best_euc = BOARD_DIAGONAL;
    let mut best = None;
    for d in pool.iter() {
        if ctx.is_holding(d, zone) {
            return Some(Recruit::Holding(d));
        }
        if ctx.is_assigned(d) {
            continue;
        }
        if ctx.availability.available_distance(d) < ctx.distances.get(me, d, zone) {
            continue;
        }
        let euc = euclidean_distance(drones[d], center);
        let closer = match best {
            None => euc <= best_euc,
            Some(_) => euc < best_euc,
        };
        if closer {
            best_euc = euc;
            best = Some(d);
        }
    }
    best.map(Recruit::Mover)
}

/// Returns the best attack on `zone`, or `None` if it cannot be taken now.
///
/// Zones already owned are never attacked. A plan made only of drones that
/// are holding the zone anyway gives no new orders and is discarded.
pub fn best_attack_to_zone(ctx: &TurnContext<'_>, zone: ZoneId) -> Option<Attack> {
    if ctx.board.zones[zone].owner == Some(ctx.board.me) {
        return None;
    }

    let mut force = IdSet::empty();
    let mut orders_must_be_given = false;
    let mut dist = 0;
    let mut enemies = ctx.max_enemies_near_zone(zone, dist);

    while force.len() <= enemies && dist <= MAX_DISTANCE {
        let mut pool = ctx.own_drones_within(zone, dist).difference(force);
        while force.len() <= enemies {
            let Some(recruit) = nearest_recruit(ctx, zone, pool) else {
                break;
            };
            orders_must_be_given |= matches!(recruit, Recruit::Mover(_));
            force.insert(recruit.drone());
            pool.remove(recruit.drone());
        }
        if enemies < force.len() {
            break;
        }
        dist += 1;
        enemies = ctx.max_enemies_near_zone(zone, dist);
    }

    if dist > MAX_DISTANCE || !orders_must_be_given {
        trace!(zone, dist, "zone not attackable");
        return None;
    }

    let mut attack = Attack {
        target: zone,
        distance: 0,
        force,
    };
    attack.calculate_length(ctx);
    trace!(
        zone,
        force = attack.force.len(),
        distance = attack.distance,
        enemies,
        "attack planned"
    );
    Some(attack)
}
