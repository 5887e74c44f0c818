//! Output formatting: destination lines and board dumps.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::board::{Board, Point};

/// Writes one `x y` line per destination and flushes.
pub fn write_moves<W: Write>(out: &mut W, moves: &[Point]) -> io::Result<()> {
    for m in moves {
        writeln!(out, "{} {}", m.x, m.y)?;
    }
    out.flush()
}

/// Encodes the board as input text: the startup block followed by one turn.
///
/// Feeding the result to `parse_snapshot` reproduces the board, minus scores.
pub fn encode_snapshot(board: &Board) -> String {
    let mut s = String::with_capacity(64 + 12 * board.num_players() * board.drones_per_player());
    let _ = writeln!(
        s,
        "{} {} {} {}",
        board.num_players(),
        board.me,
        board.drones_per_player(),
        board.num_zones()
    );
    for z in &board.zones {
        let _ = writeln!(s, "{} {}", z.position.x, z.position.y);
    }
    for z in &board.zones {
        match z.owner {
            Some(o) => {
                let _ = writeln!(s, "{}", o);
            }
            None => s.push_str("-1\n"),
        }
    }
    for p in &board.players {
        for d in &p.drones {
            let _ = writeln!(s, "{} {}", d.x, d.y);
        }
    }
    s
}

/// Human-readable summary of players and zones.
pub fn describe(board: &Board) -> String {
    let mut s = String::from("Players:\n");
    for (id, p) in board.players.iter().enumerate() {
        let marker = if id == board.me { "(ME)" } else { "    " };
        let _ = write!(
            s,
            "  {}{}- score: {} zones: {} drones: [",
            id,
            marker,
            p.score,
            board.zones_held(id)
        );
        for (i, d) in p.drones.iter().enumerate() {
            if i > 0 {
                s.push(' ');
            }
            let _ = write!(s, "{}", d);
        }
        s.push_str("]\n");
    }
    s.push_str("Zones:\n");
    for (id, z) in board.zones.iter().enumerate() {
        let owner = match z.owner {
            Some(o) => o.to_string(),
            None => "-".to_string(),
        };
        let _ = writeln!(s, "  {} - owner: {} location: {}", id, owner, z.position);
    }
    s
}
