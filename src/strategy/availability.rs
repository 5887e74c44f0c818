//! Per-drone movement budget.
//!
//! Each own drone starts the turn with `MAX_DISTANCE` turns of safe travel.
//! Budgets are only ever lowered; a budget of zero means the drone has been
//! given its destination for this turn.

use crate::board::{DroneId, MAX_DISTANCE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    budget: Vec<u32>,
}

impl Availability {
    /// Creates a tracker with every drone at the full budget.
    pub fn new(num_drones: usize) -> Self {
        Availability {
            budget: vec![MAX_DISTANCE; num_drones],
        }
    }

    /// Restores every drone to the full budget.
    pub fn reset(&mut self) {
        self.budget.iter_mut().for_each(|b| *b = MAX_DISTANCE);
    }

    /// Turns of travel `drone` may still make without abandoning a commitment.
    pub fn available_distance(&self, drone: DroneId) -> u32 {
        self.budget[drone]
    }

    /// Lowers the budget of `drone` to `dist`. Never raises it.
    pub fn set_available_distance(&mut self, drone: DroneId, dist: u32) {
        let b = &mut self.budget[drone];
        if *b > dist {
            *b = dist;
        }
    }

    pub fn is_assigned(&self, drone: DroneId) -> bool {
        self.budget[drone] == 0
    }

    pub fn num_assigned(&self) -> usize {
        self.budget.iter().filter(|&&b| b == 0).count()
    }

    pub fn len(&self) -> usize {
        self.budget.len()
    }

    pub fn is_empty(&self) -> bool {
        self.budget.is_empty()
    }
}
