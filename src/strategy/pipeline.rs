//! The ordered strategy passes.
//!
//! Each pass only gives orders to drones that have none yet, so earlier
//! passes take priority: hold the line (optional), keep air superiority over
//! owned zones, attack, then send everything left to the fallback rally point.

use rand::rngs::SmallRng;
use rand::Rng;
use tracing::{debug, trace};

use crate::board::{IdSet, Point, ZoneId, MAX_DISTANCE};
use crate::config::{EngineConfig, Fallback};

use super::attack::{best_attack_to_zone, Attack};
use super::context::TurnContext;

/// Runs every pass in order. All own drones have a destination afterwards.
pub fn run_pipeline(ctx: &mut TurnContext<'_>, config: &EngineConfig, rng: &mut SmallRng) {
    if config.hold_the_line {
        hold_the_line(ctx);
    }
    maintain_air_superiority(ctx);
    attack_zones(ctx);
    match config.fallback {
        Fallback::Centroid => default_to_centroid(ctx, config.centroid_jitter, rng),
        Fallback::NearestZone => default_to_nearest_zone(ctx),
    }
    debug_assert_eq!(ctx.availability.num_assigned(), ctx.num_drones());
}

/// Zones currently held by the engine's player.
fn owned_zones(ctx: &TurnContext<'_>) -> Vec<ZoneId> {
    let me = ctx.board.me;
    (0..ctx.board.num_zones())
        .filter(|&z| ctx.board.zones[z].owner == Some(me))
        .collect()
}

/// Budgets own drones around owned zones so they cannot wander off.
///
/// For each ring `i` around an owned zone, as long as the strongest rival
/// does not outnumber us within `i` turns, up to `rival + 1` of our drones in
/// that ring are committed: pinned when inside the zone, otherwise limited to
/// `i - 1` turns of travel. A drone whose budget drops to zero is sent into
/// the zone.
pub fn hold_the_line(ctx: &mut TurnContext<'_>) {
    for zone in owned_zones(ctx) {
        for i in 0..MAX_DISTANCE {
            let mine = ctx.own_drones_within(zone, i);
            let enemies = ctx.max_enemies_near_zone(zone, i);
            if enemies > mine.len() {
                // Superiority is already lost at this range.
                break;
            }
            let mut locked = 0;
            for d in mine.iter() {
                if i == 0 {
                    if !ctx.is_assigned(d) {
                        ctx.pin_in_place(d, "Too risky to move");
                    }
                } else if i == 1 {
                    if !ctx.is_assigned(d) {
                        ctx.assign_to_zone(d, zone, "Zone is one turn away from a threat");
                    }
                } else {
                    ctx.availability.set_available_distance(d, i - 1);
                }
                locked += 1;
                if locked > enemies {
                    break;
                }
            }
        }
    }
}

/// Keeps at least as many own drones inside each owned zone as the strongest
/// single rival has there.
///
/// Drones already holding the zone count first; then unassigned drones inside
/// the zone are pinned in id order.
pub fn maintain_air_superiority(ctx: &mut TurnContext<'_>) {
    for zone in owned_zones(ctx) {
        let hostiles = ctx.most_drones_by_single_opponent_in_zone(zone);
        if hostiles == 0 {
            continue;
        }
        let mine = ctx.own_drones_within(zone, 0);
        let mut held = mine.iter().filter(|&d| ctx.is_holding(d, zone)).count();
        for d in mine.iter() {
            if held >= hostiles {
                break;
            }
            if !ctx.is_assigned(d) {
                ctx.pin_in_place(d, "Zone air superiority must be maintained");
                held += 1;
            }
        }
        trace!(zone, hostiles, held, "air superiority");
    }
}

/// Zones whose cached attack may have changed after `committed` drones got orders.
fn invalidated_by(
    ctx: &TurnContext<'_>,
    candidates: IdSet,
    cache: &[Option<Attack>],
    committed: IdSet,
) -> IdSet {
    candidates
        .iter()
        .filter(|&z| {
            let shares_force = cache[z]
                .as_ref()
                .map_or(true, |a| a.force.intersects(committed));
            shares_force || ctx.own_drones_within(z, 0).intersects(committed)
        })
        .collect()
}

/// Commits attacks greedily until no zone can be taken.
///
/// Every round the best attack over all remaining zones wins (fewest drones,
/// then shortest, then lowest zone id) and its zone leaves the candidate set.
/// Zones that cannot be attacked are dropped for the rest of the turn. Cached
/// plans are recomputed only for zones the last commitment could affect.
pub fn attack_zones(ctx: &mut TurnContext<'_>) {
    let num_zones = ctx.board.num_zones();
    let mut candidates = IdSet::with_first(num_zones);
    let mut cache: Vec<Option<Attack>> = vec![None; num_zones];
    let mut stale = candidates;

    loop {
        for z in stale.iter() {
            cache[z] = best_attack_to_zone(ctx, z);
            if cache[z].is_none() {
                candidates.remove(z);
            }
        }

        let best = candidates
            .iter()
            .filter_map(|z| cache[z].as_ref())
            .min_by_key(|a| a.priority())
            .cloned();
        let Some(attack) = best else {
            break;
        };

        debug!(
            zone = attack.target,
            force = attack.force.len(),
            distance = attack.distance,
            "committing attack"
        );
        let mut committed = IdSet::empty();
        for d in attack.force.iter() {
            if !ctx.is_assigned(d) {
                ctx.assign_to_zone(d, attack.target, "Zone must be ours");
                committed.insert(d);
            }
        }
        candidates.remove(attack.target);
        cache[attack.target] = None;
        stale = invalidated_by(ctx, candidates, &cache, committed);
    }
}

/// Sends every drone without orders to the centroid of the zones.
///
/// With `jitter > 0` each destination is offset by up to `jitter` units per
/// axis so idle drones do not stack on a single point.
pub fn default_to_centroid(ctx: &mut TurnContext<'_>, jitter: i32, rng: &mut SmallRng) {
    let centroid = ctx.board.centroid;
    let idle: Vec<_> = ctx.unassigned().collect();
    for d in idle {
        let target = if jitter > 0 {
            let dx = rng.gen_range(-jitter..=jitter);
            let dy = rng.gen_range(-jitter..=jitter);
            Point::new(centroid.x + dx, centroid.y + dy).clamp_to_board()
        } else {
            centroid
        };
        ctx.assign_to_point(d, target, "Going to the centroid to support my comrades");
    }
}

/// Sends every drone without orders to its nearest zone, lowest zone id on ties.
pub fn default_to_nearest_zone(ctx: &mut TurnContext<'_>) {
    let me = ctx.board.me;
    let idle: Vec<_> = ctx.unassigned().collect();
    for d in idle {
        let nearest = (0..ctx.board.num_zones()).min_by_key(|&z| ctx.distances.get(me, d, z));
        match nearest {
            Some(z) => ctx.assign_to_zone(d, z, "It is my nearest zone"),
            None => ctx.pin_in_place(d, "No zone to head for"),
        }
    }
}
