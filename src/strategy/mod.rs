//! Per-turn allocation of own drones to destinations.
//!
//! The turn context owns the mutable state of one turn, the availability
//! tracker holds each drone's movement budget, the attack planner sizes
//! forces against a zone, and the pipeline runs the passes in order.

pub mod attack;
pub mod availability;
pub mod context;
pub mod pipeline;

pub use attack::{best_attack_to_zone, Attack};
pub use availability::Availability;
pub use context::TurnContext;
pub use pipeline::{
    attack_zones, default_to_centroid, default_to_nearest_zone, hold_the_line,
    maintain_air_superiority, run_pipeline,
};
