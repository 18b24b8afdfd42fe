//! `legal`: the actions a node may take in a saved scenario.

use crate::error::CliError;
use crate::formatters::format_actions;
use crate::io_utils::read_scenario;
use crate::validation::parse_node_id;
use preflop_engine::builder::legal_actions;
use std::io::Write;

pub fn handle_legal_command(input: &str, node: u32, out: &mut dyn Write) -> Result<(), CliError> {
    let state = read_scenario(input)?;
    let node_id = parse_node_id(node);
    let actions = legal_actions(&state, node_id)?;
    let position = state
        .node(node_id)
        .map(|n| n.position().label())
        .unwrap_or("?");
    writeln!(
        out,
        "node {} ({}): {}",
        node_id,
        position,
        format_actions(&actions)
    )?;
    Ok(())
}
