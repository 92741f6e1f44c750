use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Board position: `tier` is the row (0 = cheapest), `column` indexes the round categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId {
    pub tier: usize,
    pub column: usize,
}

impl CellId {
    pub const fn new(tier: usize, column: usize) -> Self {
        Self { tier, column }
    }

    pub const fn to_nd_index(self) -> [usize; 2] {
        [self.tier, self.column]
    }
}

/// Element id form `"{tier + 1}-{column}"`, e.g. `"2-0"` for the second tier of the first column.
impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.tier + 1, self.column)
    }
}

impl FromStr for CellId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let (tier, column) = s.split_once('-').ok_or(GameError::InvalidCell)?;
        let tier: usize = tier.parse().map_err(|_| GameError::InvalidCell)?;
        let column: usize = column.parse().map_err(|_| GameError::InvalidCell)?;
        let tier = tier.checked_sub(1).ok_or(GameError::InvalidCell)?;
        Ok(Self::new(tier, column))
    }
}

/// The ascending point values of one round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointTiers {
    values: [u32; TIER_COUNT],
}

impl PointTiers {
    const BASE: [u32; TIER_COUNT] = [100, 200, 300, 400, 500];

    /// Round `r` doubles, triples, ... the base values. Round 0 is treated as round 1.
    pub fn for_round(round: u8) -> Self {
        let scale = u32::from(round.max(1));
        Self {
            values: Self::BASE.map(|value| value * scale),
        }
    }

    pub fn values(&self) -> &[u32; TIER_COUNT] {
        &self.values
    }

    pub fn value(&self, tier: usize) -> Option<u32> {
        self.values.get(tier).copied()
    }

    pub fn label(&self, tier: usize) -> Option<String> {
        self.value(tier).map(format_value)
    }

    pub const fn len(&self) -> usize {
        TIER_COUNT
    }

    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Default for PointTiers {
    fn default() -> Self {
        Self::for_round(1)
    }
}

/// Currency label as it appears in question records: `$400`, `$1,200`.
pub fn format_value(value: u32) -> String {
    let digits = value.to_string();
    let mut label = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    label.push('$');
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            label.push(',');
        }
        label.push(digit);
    }
    label
}
