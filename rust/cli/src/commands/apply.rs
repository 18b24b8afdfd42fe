//! `apply`: run one command against a saved scenario.
//!
//! The input file is only ever read; the new state goes to `--output` or
//! stdout, so a rejected command leaves everything on disk as it was.

use super::emit_scenario;
use crate::config;
use crate::error::CliError;
use crate::io_utils::read_scenario;
use crate::ui;
use crate::validation::{parse_action, parse_node_id, parse_sizing};
use preflop_engine::builder::apply_action;
use std::io::Write;
use std::path::PathBuf;

pub struct ApplyArgs {
    pub input: String,
    pub node: u32,
    pub action: String,
    pub sizing: Option<String>,
    pub output: Option<PathBuf>,
}

pub fn handle_apply_command(
    args: ApplyArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let action = parse_action(&args.action)?;
    let sizing = args.sizing.as_deref().map(parse_sizing).transpose()?;
    if sizing.is_some() && !action.is_aggressive() {
        ui::display_warning(err, &format!("--sizing is ignored for {}", action.label()))?;
    }
    let node_id = parse_node_id(args.node);

    let state = read_scenario(&args.input)?;
    let next = apply_action(&state, node_id, action, sizing)?;

    let added = next.nodes().len() - state.nodes().len();
    match next.next_to_act().and_then(|id| next.node(id)) {
        Some(node) => writeln!(
            err,
            "{} by node {}; {} node(s) added; next to act: node {} ({})",
            action.label(),
            node_id,
            added,
            node.id(),
            node.position()
        )?,
        None => writeln!(
            err,
            "{} by node {}; {} node(s) added; action is closed",
            action.label(),
            node_id,
            added
        )?,
    }

    emit_scenario(&next, args.output.as_deref(), cfg.pretty, out)
}
