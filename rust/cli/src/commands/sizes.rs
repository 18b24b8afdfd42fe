//! `sizes`: sizing presets and defaults for an action.

use crate::error::CliError;
use crate::validation::parse_action;
use preflop_engine::sizing::{default_sizing, default_sizing_options, format_sizing};
use std::io::Write;

pub fn handle_sizes_command(action: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let action = parse_action(action)?;
    let options = default_sizing_options(action);
    if options.is_empty() {
        writeln!(out, "{}: no sizing", action.label())?;
        return Ok(());
    }
    writeln!(out, "{}: {}", action.label(), options.join(", "))?;

    let ip = default_sizing(action, true);
    let oop = default_sizing(action, false);
    if ip == oop {
        writeln!(out, "default: {}", format_sizing(ip))?;
    } else {
        writeln!(
            out,
            "default: {} in position, {} out of position",
            format_sizing(ip),
            format_sizing(oop)
        )?;
    }
    Ok(())
}
