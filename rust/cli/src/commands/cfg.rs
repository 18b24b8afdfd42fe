//! `cfg`: the resolved configuration with the source of each value
//! (`default`, `file` or `env`).
//!
//! ```json
//! {
//!   "table_format": { "value": "six_max", "source": "default" },
//!   "hero": { "value": null, "source": "default" },
//!   "pretty": { "value": true, "source": "default" }
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "table_format": {
            "value": config.table_format,
            "source": sources.table_format,
        },
        "hero": {
            "value": config.hero,
            "source": sources.hero,
        },
        "pretty": {
            "value": config.pretty,
            "source": sources.pretty,
        }
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&display)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_every_key_with_source() {
        let mut out = Vec::new();

        let result = handle_cfg_command(&mut out);
        assert!(result.is_ok(), "cfg command should succeed");

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        for key in ["table_format", "hero", "pretty"] {
            assert!(json[key].get("value").is_some(), "missing {}", key);
            assert!(json[key].get("source").is_some(), "missing {}", key);
        }
    }
}
