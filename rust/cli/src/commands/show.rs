//! `show`: a saved scenario as a node table.

use crate::error::CliError;
use crate::formatters::{format_actions, format_scenario};
use crate::io_utils::read_scenario;
use preflop_engine::builder::legal_actions;
use std::io::Write;

pub fn handle_show_command(input: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let state = read_scenario(input)?;
    writeln!(out, "{}", format_scenario(&state))?;
    if let Some(next) = state.next_to_act() {
        let actions = legal_actions(&state, next)?;
        writeln!(out, "legal: {}", format_actions(&actions))?;
    }
    Ok(())
}
