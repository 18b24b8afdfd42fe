//! `seed`: a fresh scenario with one undecided node per seat.

use super::emit_scenario;
use crate::config;
use crate::error::CliError;
use crate::validation::{parse_format, parse_position};
use preflop_engine::builder::{assign_hero, seed_initial_nodes};
use preflop_engine::positions::index_of;
use std::io::Write;
use std::path::PathBuf;

/// Flags override the configured table format and hero seat.
pub fn handle_seed_command(
    format: Option<String>,
    hero: Option<String>,
    output: Option<PathBuf>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let format = match format {
        Some(label) => parse_format(&label)?,
        None => cfg.table_format,
    };
    let hero = match hero {
        Some(label) => Some(parse_position(&label)?),
        None => cfg.hero,
    };

    let mut state = seed_initial_nodes(format);
    if let Some(hero) = hero {
        index_of(hero, format)?;
        let node = state
            .nodes_at(hero)
            .next()
            .map(|n| n.id())
            .ok_or_else(|| CliError::InvalidInput(format!("no seat {} at the table", hero)))?;
        state = assign_hero(&state, node, None)?;
    }

    emit_scenario(&state, output.as_deref(), cfg.pretty, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use preflop_engine::record::ScenarioRecord;
    use preflop_engine::EngineError;

    #[test]
    fn prints_nine_max_record() {
        let mut out = Vec::new();
        handle_seed_command(Some("nine-max".into()), None, None, &mut out).unwrap();
        let record = ScenarioRecord::from_json(&String::from_utf8(out).unwrap()).unwrap();
        assert_eq!(record.nodes.len(), 8);
    }

    #[test]
    fn hero_must_exist_in_format() {
        let mut out = Vec::new();
        let result = handle_seed_command(
            Some("six-max".into()),
            Some("UTG+2".into()),
            None,
            &mut out,
        );
        assert!(matches!(
            result,
            Err(CliError::Engine(EngineError::InvalidPosition { .. }))
        ));
        assert!(out.is_empty());
    }
}
