//! Canonical seat order for the supported table formats.
//!
//! Preflop action runs front to back through [`positions_for`]: the first
//! seat after the big blind acts first and the big blind closes the round.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Number of handed seats a scenario is built for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableFormat {
    /// 6-handed: UTG, HJ, CO, BTN, SB, BB
    SixMax,
    /// Full ring: UTG, UTG+1, UTG+2, HJ, CO, BTN, SB, BB
    NineMax,
}

/// A seat label. Which labels exist depends on the [`TableFormat`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "UTG")]
    UnderTheGun,
    #[serde(rename = "UTG+1")]
    UnderTheGun1,
    #[serde(rename = "UTG+2")]
    UnderTheGun2,
    #[serde(rename = "HJ")]
    Hijack,
    #[serde(rename = "CO")]
    Cutoff,
    #[serde(rename = "BTN")]
    Button,
    #[serde(rename = "SB")]
    SmallBlind,
    #[serde(rename = "BB")]
    BigBlind,
}

use Position::*;

const SIX_MAX: [Position; 6] = [UnderTheGun, Hijack, Cutoff, Button, SmallBlind, BigBlind];

const NINE_MAX: [Position; 8] = [
    UnderTheGun,
    UnderTheGun1,
    UnderTheGun2,
    Hijack,
    Cutoff,
    Button,
    SmallBlind,
    BigBlind,
];

/// Returns the preflop acting order for a table format.
///
/// # Examples
///
/// ```
/// use preflop_engine::positions::{positions_for, Position, TableFormat};
///
/// let order = positions_for(TableFormat::SixMax);
/// assert_eq!(order.first(), Some(&Position::UnderTheGun));
/// assert_eq!(order.last(), Some(&Position::BigBlind));
/// ```
pub fn positions_for(format: TableFormat) -> &'static [Position] {
    match format {
        TableFormat::SixMax => &SIX_MAX,
        TableFormat::NineMax => &NINE_MAX,
    }
}

/// Index of `pos` in the acting order of `format`.
///
/// # Errors
///
/// [`EngineError::InvalidPosition`] when the seat does not exist at this table
/// (for example `UTG+1` at a 6-max table).
pub fn index_of(pos: Position, format: TableFormat) -> Result<usize, EngineError> {
    positions_for(format)
        .iter()
        .position(|p| *p == pos)
        .ok_or(EngineError::InvalidPosition {
            position: pos,
            format,
        })
}

/// Seat acting directly after `pos`, `None` for the big blind.
pub fn next(pos: Position, format: TableFormat) -> Result<Option<Position>, EngineError> {
    let idx = index_of(pos, format)?;
    Ok(positions_for(format).get(idx + 1).copied())
}

/// Seat acting directly before `pos`, `None` for the first seat.
pub fn previous(pos: Position, format: TableFormat) -> Result<Option<Position>, EngineError> {
    let idx = index_of(pos, format)?;
    Ok(idx
        .checked_sub(1)
        .and_then(|i| positions_for(format).get(i).copied()))
}

/// Whether `actor` acts after `opponent` on every postflop street.
///
/// Postflop the blinds act first (SB, then BB), followed by the remaining
/// seats in their preflop order, so the button is always last to act.
pub fn in_position(actor: Position, opponent: Position) -> bool {
    postflop_rank(actor) > postflop_rank(opponent)
}

fn postflop_rank(pos: Position) -> usize {
    match pos {
        SmallBlind => 0,
        BigBlind => 1,
        other => {
            2 + NINE_MAX
                .iter()
                .position(|p| *p == other)
                .unwrap_or_default()
        }
    }
}

impl TableFormat {
    pub fn contains(self, pos: Position) -> bool {
        positions_for(self).contains(&pos)
    }

    pub fn label(self) -> &'static str {
        match self {
            TableFormat::SixMax => "6-max",
            TableFormat::NineMax => "9-max",
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TableFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "6-max" | "6max" | "six-max" | "6" => Ok(TableFormat::SixMax),
            "9-max" | "9max" | "nine-max" | "9" | "full-ring" => Ok(TableFormat::NineMax),
            _ => Err(EngineError::UnknownTableFormat {
                label: s.to_string(),
            }),
        }
    }
}

impl Position {
    pub fn label(self) -> &'static str {
        match self {
            UnderTheGun => "UTG",
            UnderTheGun1 => "UTG+1",
            UnderTheGun2 => "UTG+2",
            Hijack => "HJ",
            Cutoff => "CO",
            Button => "BTN",
            SmallBlind => "SB",
            BigBlind => "BB",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Position {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        NINE_MAX
            .iter()
            .copied()
            .find(|p| p.label() == upper)
            .ok_or(EngineError::UnknownPosition {
                label: s.to_string(),
            })
    }
}
