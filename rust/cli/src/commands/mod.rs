//! Command handler modules for the preflop CLI.
//!
//! Each command lives in its own file and exposes
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`. Output
//! streams are passed in as `&mut dyn Write` so tests can capture them.

mod apply;
mod cfg;
mod legal;
mod seed;
mod show;
mod sizes;

pub use apply::{ApplyArgs, handle_apply_command};
pub use cfg::handle_cfg_command;
pub use legal::handle_legal_command;
pub use seed::handle_seed_command;
pub use show::handle_show_command;
pub use sizes::handle_sizes_command;

use crate::error::CliError;
use crate::io_utils;
use preflop_engine::scenario::ScenarioState;
use std::io::Write;
use std::path::Path;

/// Write `state` to `output` if given, otherwise print it to `out`.
fn emit_scenario(
    state: &ScenarioState,
    output: Option<&Path>,
    pretty: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match output {
        Some(path) => {
            io_utils::write_scenario(path, state, pretty)?;
            writeln!(
                out,
                "Wrote {} nodes to {}",
                state.nodes().len(),
                path.display()
            )?;
        }
        None => writeln!(out, "{}", io_utils::scenario_json(state, pretty)?)?,
    }
    Ok(())
}
