use alloc::string::String;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Render-facing view of one board position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCell {
    pub id: CellId,
    pub point_tier: u32,
    pub label: String,
    pub enabled: bool,
}

/// One round's grid, rows are point tiers and columns are the round categories.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<String>,
    tiers: PointTiers,
    cells: Array2<CellState>,
}

impl Board {
    /// Marks a cell open iff `set` holds at least one record for its category and value.
    /// Which record gets shown is decided at selection time.
    pub fn build(set: &QuestionSet, categories: Vec<String>, tiers: PointTiers) -> Self {
        let labels = (*tiers.values()).map(format_value);
        let cells = Array2::from_shape_fn((tiers.len(), categories.len()), |(tier, column)| {
            if set.has_match(&categories[column], &labels[tier]) {
                CellState::Open
            } else {
                CellState::Unavailable
            }
        });

        let board = Self {
            categories,
            tiers,
            cells,
        };
        log::debug!(
            "built board with {} of {} cells open",
            board.remaining(),
            board.cells.len()
        );
        board
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn tiers(&self) -> &PointTiers {
        &self.tiers
    }

    pub fn columns(&self) -> usize {
        self.cells.ncols()
    }

    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn validate(&self, id: CellId) -> Result<CellId> {
        if id.tier < self.rows() && id.column < self.columns() {
            Ok(id)
        } else {
            Err(GameError::InvalidCell)
        }
    }

    pub fn cell(&self, id: CellId) -> Result<CellState> {
        let id = self.validate(id)?;
        Ok(self.cells[id.to_nd_index()])
    }

    /// Category and value label a cell stands for.
    pub fn clue_of(&self, id: CellId) -> Result<(&str, String)> {
        let id = self.validate(id)?;
        let label = self.tiers.label(id.tier).ok_or(GameError::InvalidCell)?;
        Ok((self.categories[id.column].as_str(), label))
    }

    /// Every position, row-major.
    pub fn cells(&self) -> impl Iterator<Item = BoardCell> + '_ {
        self.cells.indexed_iter().map(|((tier, column), state)| {
            let point_tier = self.tiers.values()[tier];
            BoardCell {
                id: CellId::new(tier, column),
                point_tier,
                label: format_value(point_tier),
                enabled: state.is_enabled(),
            }
        })
    }

    pub fn enabled_cells(&self) -> impl Iterator<Item = BoardCell> + '_ {
        self.cells().filter(|cell| cell.enabled)
    }

    pub fn remaining(&self) -> usize {
        self.cells.iter().filter(|state| state.is_enabled()).count()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns whether the cell changed from open to played.
    pub fn mark_played(&mut self, id: CellId) -> Result<bool> {
        let id = self.validate(id)?;
        let cell = &mut self.cells[id.to_nd_index()];
        if cell.is_enabled() {
            *cell = CellState::Played;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
