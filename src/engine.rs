//! Turn orchestration.
//!
//! Holds the board between turns and drives the read / compute / emit cycle.
//! Each turn gets a fresh `TurnContext`; nothing computed for one turn leaks
//! into the next.

use std::io::{BufRead, Write};
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, error, info, warn};

use crate::board::{Board, Point};
use crate::config::EngineConfig;
use crate::protocol::{describe, encode_snapshot, write_moves, ProtocolError, ProtocolReader};
use crate::strategy::{run_pipeline, TurnContext};

/// Where the engine is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingTurnData,
    Computing,
    Emitting,
    Terminated,
}

/// Computes the destinations of all own drones for the board as it stands.
///
/// Deterministic: the same board, configuration and turn number always give
/// the same moves.
pub fn compute_moves(board: &Board, config: &EngineConfig, turn: u32) -> Vec<Point> {
    let mut ctx = TurnContext::new(board);
    let mut rng = SmallRng::seed_from_u64(config.seed.wrapping_add(turn as u64));
    run_pipeline(&mut ctx, config, &mut rng);
    ctx.into_destinations()
}

/// Runs `f`, logging an importable snapshot of `board` if it panics.
///
/// The panic is resumed afterwards; the dump is there so the turn can be fed
/// to the `replay` binary.
fn with_crash_dump<T>(board: &Board, f: impl FnOnce() -> T) -> T {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(payload) => {
            error!("panicked while computing a turn; board:\n{}", encode_snapshot(board));
            panic::resume_unwind(payload)
        }
    }
}

/// Holds the match state between turns.
pub struct Engine {
    pub config: EngineConfig,
    pub board: Option<Board>,
    /// Number of turns played so far.
    pub turn: u32,
    state: TurnState,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Engine {
            config,
            board: None,
            turn: 0,
            state: TurnState::AwaitingTurnData,
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Computes moves for the current board without advancing the turn.
    pub fn play_turn(&self) -> Option<Vec<Point>> {
        let board = self.board.as_ref()?;
        Some(compute_moves(board, &self.config, self.turn))
    }

    /// Plays a whole match: reads the startup block, then answers every turn
    /// until the input ends.
    ///
    /// Returns the number of turns played. A clean end of input is not an
    /// error; malformed input is returned after the engine stops.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<u32, ProtocolError> {
        let mut reader = ProtocolReader::new(input);
        let result = self.run_loop(&mut reader, out);
        self.state = TurnState::Terminated;
        match result {
            Ok(()) | Err(ProtocolError::EndOfInput) => {
                info!(turns = self.turn, "game over");
                if let Some(board) = &self.board {
                    debug!("end status:\n{}", describe(board));
                }
                Ok(self.turn)
            }
            Err(e) => {
                warn!(turn = self.turn, error = %e, "stopping on bad input");
                Err(e)
            }
        }
    }

    fn run_loop<R: BufRead, W: Write>(
        &mut self,
        reader: &mut ProtocolReader<R>,
        out: &mut W,
    ) -> Result<(), ProtocolError> {
        let start = Instant::now();
        let mut board = reader.read_board()?;
        info!(
            players = board.num_players(),
            me = board.me,
            drones = board.drones_per_player(),
            zones = board.num_zones(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "board ready"
        );
        debug!("initial status:\n{}", describe(&board));

        loop {
            self.state = TurnState::AwaitingTurnData;
            let read = reader.read_turn(&mut board);
            if let Err(e) = read {
                self.board = Some(board);
                return Err(e);
            }
            board.tally_scores();
            debug!("snapshot:\n{}", encode_snapshot(&board));

            self.state = TurnState::Computing;
            let start = Instant::now();
            let moves = with_crash_dump(&board, || compute_moves(&board, &self.config, self.turn));
            info!(
                turn = self.turn,
                elapsed_us = start.elapsed().as_micros() as u64,
                "turn computed"
            );

            self.state = TurnState::Emitting;
            write_moves(out, &moves)?;
            self.turn += 1;
        }
    }
}
