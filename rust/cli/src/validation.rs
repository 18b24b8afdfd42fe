//! Parsing of command-line values into engine types.
//!
//! Labels are parsed through the engine's `FromStr` impls so that the CLI
//! and hand-edited records accept the same spellings.

use crate::error::CliError;
use preflop_engine::action::ActionKind;
use preflop_engine::positions::{Position, TableFormat};
use preflop_engine::scenario::NodeId;
use preflop_engine::sizing::parse_sizing_label;

pub fn parse_action(label: &str) -> Result<ActionKind, CliError> {
    Ok(label.parse()?)
}

pub fn parse_format(label: &str) -> Result<TableFormat, CliError> {
    Ok(label.parse()?)
}

pub fn parse_position(label: &str) -> Result<Position, CliError> {
    Ok(label.parse()?)
}

pub fn parse_node_id(raw: u32) -> NodeId {
    NodeId(raw)
}

/// Accepts `2.5` as well as `2.5bb`.
pub fn parse_sizing(label: &str) -> Result<f64, CliError> {
    parse_sizing_label(label).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "sizing must be a positive number of big blinds, got '{}'",
            label
        ))
    })
}
