//! Game input parser.
//!
//! The referee sends one startup block and then one block per turn, one
//! record per line:
//!
//! ```text
//! <players> <me> <drones per player> <zones>
//! <x> <y>                      (once per zone)
//! --- every turn ---
//! <owner>                      (once per zone, -1 when unclaimed)
//! <x> <y>                      (once per drone, player-major order)
//! ```
//!
//! Blank lines are skipped. Coordinates off the board and anything else
//! malformed end the game.

use std::io::BufRead;

use crate::board::{Board, BoardError, Point, BOARD_HEIGHT, BOARD_WIDTH};

/// Errors that can occur while reading game input.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("end of input")]
    EndOfInput,

    #[error("input ended in the middle of a block at line {0}")]
    UnexpectedEof(usize),

    #[error("line {line}: expected {expected} fields, got {got}")]
    FieldCount {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("line {line}: invalid integer '{token}'")]
    InvalidInteger { line: usize, token: String },

    #[error("line {line}: value {value} out of range")]
    OutOfRange { line: usize, value: i64 },

    #[error("line {line}: owner {owner} is not a player")]
    InvalidOwner { line: usize, owner: i64 },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
}

/// The startup header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameHeader {
    pub num_players: usize,
    pub me: usize,
    pub drones_per_player: usize,
    pub num_zones: usize,
}

/// Line-oriented reader over the referee's input stream.
pub struct ProtocolReader<R> {
    reader: R,
    line_no: usize,
    buf: String,
}

impl<R: BufRead> ProtocolReader<R> {
    pub fn new(reader: R) -> Self {
        ProtocolReader {
            reader,
            line_no: 0,
            buf: String::new(),
        }
    }

    /// Number of lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Reads the next non-blank line and parses exactly `N` integers from it.
    fn next_fields<const N: usize>(&mut self) -> Result<[i64; N], ProtocolError> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Err(ProtocolError::EndOfInput);
            }
            self.line_no += 1;
            if !self.buf.trim().is_empty() {
                break;
            }
        }

        let tokens: Vec<&str> = self.buf.split_whitespace().collect();
        if tokens.len() != N {
            return Err(ProtocolError::FieldCount {
                line: self.line_no,
                expected: N,
                got: tokens.len(),
            });
        }
        let mut fields = [0i64; N];
        for (field, token) in fields.iter_mut().zip(&tokens) {
            *field = token.parse().map_err(|_| ProtocolError::InvalidInteger {
                line: self.line_no,
                token: token.to_string(),
            })?;
        }
        Ok(fields)
    }

    /// Like `next_fields`, but end of input is an error rather than a clean stop.
    fn expect_fields<const N: usize>(&mut self) -> Result<[i64; N], ProtocolError> {
        self.next_fields::<N>().map_err(|e| match e {
            ProtocolError::EndOfInput => ProtocolError::UnexpectedEof(self.line_no),
            other => other,
        })
    }

    fn to_count(&self, value: i64) -> Result<usize, ProtocolError> {
        usize::try_from(value).map_err(|_| ProtocolError::OutOfRange {
            line: self.line_no,
            value,
        })
    }

    /// Coordinates must lie on the board, edges included.
    fn to_coord(&self, value: i64, max: i32) -> Result<i32, ProtocolError> {
        match i32::try_from(value) {
            Ok(v) if (0..=max).contains(&v) => Ok(v),
            _ => Err(ProtocolError::OutOfRange {
                line: self.line_no,
                value,
            }),
        }
    }

    fn read_point(&mut self) -> Result<Point, ProtocolError> {
        let [x, y] = self.expect_fields::<2>()?;
        Ok(Point::new(
            self.to_coord(x, BOARD_WIDTH)?,
            self.to_coord(y, BOARD_HEIGHT)?,
        ))
    }

    /// Reads the startup header line.
    pub fn read_header(&mut self) -> Result<GameHeader, ProtocolError> {
        let [players, me, drones, zones] = self.next_fields::<4>()?;
        Ok(GameHeader {
            num_players: self.to_count(players)?,
            me: self.to_count(me)?,
            drones_per_player: self.to_count(drones)?,
            num_zones: self.to_count(zones)?,
        })
    }

    /// Reads the startup block and builds the board.
    pub fn read_board(&mut self) -> Result<Board, ProtocolError> {
        let header = self.read_header()?;
        let mut zones = Vec::with_capacity(header.num_zones);
        for _ in 0..header.num_zones {
            zones.push(self.read_point()?);
        }
        Ok(Board::new(
            header.num_players,
            header.me,
            header.drones_per_player,
            &zones,
        )?)
    }

    /// Reads one turn block into `board`.
    ///
    /// Returns `EndOfInput` when the stream ends cleanly before the block.
    pub fn read_turn(&mut self, board: &mut Board) -> Result<(), ProtocolError> {
        for zone in 0..board.num_zones() {
            let [owner] = if zone == 0 {
                self.next_fields::<1>()?
            } else {
                self.expect_fields::<1>()?
            };
            let owner = match owner {
                -1 => None,
                o if o >= 0 && (o as usize) < board.num_players() => Some(o as usize),
                o => {
                    return Err(ProtocolError::InvalidOwner {
                        line: self.line_no,
                        owner: o,
                    })
                }
            };
            board.set_zone_owner(zone, owner);
        }

        for player in 0..board.num_players() {
            for drone in 0..board.drones_per_player() {
                let p = self.read_point()?;
                board.set_drone(player, drone, p);
            }
        }
        Ok(())
    }
}

/// Parses a full snapshot: the startup block followed by one turn block.
pub fn parse_snapshot(s: &str) -> Result<Board, ProtocolError> {
    let mut reader = ProtocolReader::new(s.as_bytes());
    let mut board = reader.read_board()?;
    reader.read_turn(&mut board).map_err(|e| match e {
        ProtocolError::EndOfInput => ProtocolError::UnexpectedEof(reader.line_no()),
        other => other,
    })?;
    Ok(board)
}
