use serde::{Deserialize, Serialize};

/// Per-cell state stored by the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// No record matches the column category and tier value.
    Unavailable,
    Open,
    /// Already played this round, inert until the next board.
    Played,
}

impl CellState {
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Unavailable
    }
}
