#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use question::*;
pub use repository::*;
pub use sampler::*;
pub use selector::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod question;
mod repository;
mod sampler;
mod selector;
mod session;
#[cfg(test)]
mod testing;
mod types;

/// Categories per round, one per board column.
pub const ROUND_COLUMNS: usize = 6;

/// Point tiers per round, one per board row.
pub const TIER_COUNT: usize = 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub columns: usize,
    /// Scales the point tiers, round 2 doubles every value.
    pub round: u8,
}

impl GameConfig {
    pub const fn new_unchecked(columns: usize, round: u8) -> Self {
        Self { columns, round }
    }

    pub fn new(columns: usize, round: u8) -> Self {
        Self::new_unchecked(columns.max(1), round.max(1))
    }

    pub fn tiers(&self) -> PointTiers {
        PointTiers::for_round(self.round)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(ROUND_COLUMNS, 1)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    NoChange,
    Changed,
}

impl ActionOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}
