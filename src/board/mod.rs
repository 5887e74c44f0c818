//! Board representation and geometry.
//!
//! Contains points and the turn-based distance model, the per-turn board
//! snapshot, the drone-to-zone distance table, and the id bitset used for
//! drone and zone sets.

pub mod distance;
pub mod geometry;
pub mod idset;
pub mod state;

pub use distance::DistanceTable;
pub use geometry::{
    centroid, euclidean_distance, turn_based_distance, Point, BOARD_DIAGONAL, BOARD_HEIGHT,
    BOARD_WIDTH, DRONE_MOVEMENT, MAX_DISTANCE, ZONE_RADIUS,
};
pub use idset::{IdSet, ID_SET_CAPACITY};
pub use state::{Board, BoardError, DroneId, Player, PlayerId, Zone, ZoneId};
