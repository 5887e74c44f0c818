//! Board snapshot.
//!
//! Zone centers and the player/drone layout are fixed for the whole match;
//! zone owners and drone positions are overwritten every turn.

use super::geometry::{centroid, Point};
use super::idset::ID_SET_CAPACITY;

/// Index of a player in the match.
pub type PlayerId = usize;
/// Stable index of a drone within its player's fleet.
pub type DroneId = usize;
/// Stable index of a zone.
pub type ZoneId = usize;

/// Errors that can occur while setting up a board.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("a match needs at least one player")]
    NoPlayers,

    #[error("a match needs at least one zone")]
    NoZones,

    #[error("own player id {me} out of range for {players} players")]
    SelfOutOfRange { me: PlayerId, players: usize },

    #[error("{0} drones per player exceeds the supported maximum")]
    TooManyDrones(usize),

    #[error("{0} zones exceeds the supported maximum")]
    TooManyZones(usize),
}

/// A capturable zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    pub position: Point,
    /// `None` while unclaimed.
    pub owner: Option<PlayerId>,
}

/// A player and its fleet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Player {
    pub score: u32,
    pub drones: Vec<Point>,
}

/// Snapshot of the match as seen at the start of a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Index of the player this engine controls.
    pub me: PlayerId,
    pub players: Vec<Player>,
    pub zones: Vec<Zone>,
    /// Mean of all zone centers, fixed at setup.
    pub centroid: Point,
}

impl Board {
    /// Creates a board with every drone at the origin and every zone unclaimed.
    pub fn new(
        num_players: usize,
        me: PlayerId,
        drones_per_player: usize,
        zone_positions: &[Point],
    ) -> Result<Self, BoardError> {
        if num_players == 0 {
            return Err(BoardError::NoPlayers);
        }
        if me >= num_players {
            return Err(BoardError::SelfOutOfRange {
                me,
                players: num_players,
            });
        }
        if drones_per_player > ID_SET_CAPACITY {
            return Err(BoardError::TooManyDrones(drones_per_player));
        }
        if zone_positions.len() > ID_SET_CAPACITY {
            return Err(BoardError::TooManyZones(zone_positions.len()));
        }
        let centroid =
            centroid(zone_positions.iter().copied()).ok_or(BoardError::NoZones)?;

        let players = (0..num_players)
            .map(|_| Player {
                score: 0,
                drones: vec![Point::default(); drones_per_player],
            })
            .collect();
        let zones = zone_positions
            .iter()
            .map(|&position| Zone {
                position,
                owner: None,
            })
            .collect();

        Ok(Board {
            me,
            players,
            zones,
            centroid,
        })
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn num_zones(&self) -> usize {
        self.zones.len()
    }

    pub fn drones_per_player(&self) -> usize {
        self.players[self.me].drones.len()
    }

    /// Positions of the drones this engine controls.
    pub fn own_drones(&self) -> &[Point] {
        &self.players[self.me].drones
    }

    /// Ids of every player other than `me`.
    pub fn opponents(&self) -> impl Iterator<Item = PlayerId> + '_ {
        (0..self.players.len()).filter(move |&p| p != self.me)
    }

    pub fn set_zone_owner(&mut self, zone: ZoneId, owner: Option<PlayerId>) {
        self.zones[zone].owner = owner;
    }

    pub fn set_drone(&mut self, player: PlayerId, drone: DroneId, position: Point) {
        self.players[player].drones[drone] = position;
    }

    /// Number of zones currently held by `player`.
    pub fn zones_held(&self, player: PlayerId) -> usize {
        self.zones.iter().filter(|z| z.owner == Some(player)).count()
    }

    /// Adds one point to each owner for every zone it holds this turn.
    pub fn tally_scores(&mut self) {
        for i in 0..self.zones.len() {
            if let Some(owner) = self.zones[i].owner {
                self.players[owner].score += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zones() -> Vec<Point> {
        vec![Point::new(400, 400), Point::new(600, 600), Point::new(500, 200)]
    }

    #[test]
    fn new_board_is_unclaimed() {
        let board = Board::new(3, 1, 4, &zones()).unwrap();
        assert_eq!(board.num_players(), 3);
        assert_eq!(board.num_zones(), 3);
        assert_eq!(board.drones_per_player(), 4);
        assert!(board.zones.iter().all(|z| z.owner.is_none()));
        assert_eq!(board.centroid, Point::new(500, 400));
    }

    #[test]
    fn rejects_invalid_setup() {
        assert_eq!(Board::new(0, 0, 1, &zones()), Err(BoardError::NoPlayers));
        assert_eq!(Board::new(2, 0, 1, &[]), Err(BoardError::NoZones));
        assert_eq!(
            Board::new(2, 2, 1, &zones()),
            Err(BoardError::SelfOutOfRange { me: 2, players: 2 })
        );
        assert_eq!(Board::new(2, 0, 65, &zones()), Err(BoardError::TooManyDrones(65)));
        let many = vec![Point::new(1, 1); 65];
        assert_eq!(Board::new(2, 0, 1, &many), Err(BoardError::TooManyZones(65)));
    }

    #[test]
    fn opponents_skip_self() {
        let board = Board::new(4, 2, 1, &zones()).unwrap();
        assert_eq!(board.opponents().collect::<Vec<_>>(), vec![0, 1, 3]);
    }

    #[test]
    fn centroid_survives_ownership_changes() {
        let mut board = Board::new(2, 0, 1, &zones()).unwrap();
        board.set_zone_owner(0, Some(1));
        board.set_drone(1, 0, Point::new(10, 10));
        assert_eq!(board.centroid, Point::new(500, 400));
    }

    #[test]
    fn tally_scores_counts_zones_per_turn() {
        let mut board = Board::new(2, 0, 1, &zones()).unwrap();
        board.set_zone_owner(0, Some(0));
        board.set_zone_owner(1, Some(0));
        board.set_zone_owner(2, Some(1));
        board.tally_scores();
        board.tally_scores();
        assert_eq!(board.players[0].score, 4);
        assert_eq!(board.players[1].score, 2);
        assert_eq!(board.zones_held(0), 2);
        assert_eq!(board.zones_held(1), 1);
    }
}
