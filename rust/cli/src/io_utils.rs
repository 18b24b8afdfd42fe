//! File I/O utilities for scenario files.
//!
//! Scenarios travel between commands as [`ScenarioRecord`] JSON documents.
//! Reading strips a UTF-8 BOM; writing creates missing parent directories.

use crate::error::CliError;
use preflop_engine::record::ScenarioRecord;
use preflop_engine::scenario::ScenarioState;
use std::path::Path;

/// Read a text file, stripping a leading UTF-8 BOM if present.
pub fn read_text(path: &str) -> Result<String, CliError> {
    let mut content = std::fs::read_to_string(path)?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Load and validate a scenario file.
///
/// # Errors
///
/// - [`CliError::Io`] if the file cannot be read
/// - [`CliError::Json`] if the document is not a scenario record
/// - [`CliError::Engine`] if the record fails validation
pub fn read_scenario(path: &str) -> Result<ScenarioState, CliError> {
    let text = read_text(path)?;
    let record = ScenarioRecord::from_json(&text)?;
    Ok(record.into_state()?)
}

/// Serialize a scenario as a record, pretty or compact.
pub fn scenario_json(state: &ScenarioState, pretty: bool) -> Result<String, CliError> {
    let record = ScenarioRecord::from_state(state);
    let json = if pretty {
        record.to_json()?
    } else {
        serde_json::to_string(&record)?
    };
    Ok(json)
}

/// Write a scenario to `path`, creating parent directories as needed.
pub fn write_scenario(path: &Path, state: &ScenarioState, pretty: bool) -> Result<(), CliError> {
    ensure_parent_dir(path)?;
    let mut json = scenario_json(state, pretty)?;
    json.push('\n');
    std::fs::write(path, json)?;
    Ok(())
}

/// Ensure parent directory exists for given path, creating if needed.
pub fn ensure_parent_dir(path: &Path) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            CliError::InvalidInput(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
