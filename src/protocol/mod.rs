//! Referee protocol handling.
//!
//! Parses the startup and per-turn input blocks into a `Board`, writes the
//! per-turn destination lines, and produces board dumps for debugging.

pub mod format;
pub mod parser;

pub use format::{describe, encode_snapshot, write_moves};
pub use parser::{parse_snapshot, GameHeader, ProtocolError, ProtocolReader};
