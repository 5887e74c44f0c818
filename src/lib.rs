//! drone-commander library.
//!
//! Exposes the board model, the per-turn strategy pipeline, the referee
//! protocol, and the turn orchestrator for use by the binaries, integration
//! tests, and benchmarks.

pub mod board;
pub mod config;
pub mod engine;
pub mod protocol;
pub mod strategy;
