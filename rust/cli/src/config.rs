use preflop_engine::positions::{Position, TableFormat};
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "PREFLOP_CONFIG";
pub const TABLE_FORMAT_ENV: &str = "PREFLOP_TABLE_FORMAT";
pub const HERO_ENV: &str = "PREFLOP_HERO";
pub const PRETTY_ENV: &str = "PREFLOP_PRETTY";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub table_format: TableFormat,
    pub hero: Option<Position>,
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub table_format: ValueSource,
    pub hero: ValueSource,
    pub pretty: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            table_format: ValueSource::Default,
            hero: ValueSource::Default,
            pretty: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_format: TableFormat::SixMax,
            hero: None,
            pretty: true,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.table_format {
            cfg.table_format = parse_format(&v)?;
            sources.table_format = ValueSource::File;
        }
        if let Some(v) = f.hero {
            cfg.hero = Some(parse_position(&v)?);
            sources.hero = ValueSource::File;
        }
        if let Some(v) = f.pretty {
            cfg.pretty = v;
            sources.pretty = ValueSource::File;
        }
    }

    if let Ok(format) = std::env::var(TABLE_FORMAT_ENV)
        && !format.is_empty()
    {
        cfg.table_format = parse_format(&format)?;
        sources.table_format = ValueSource::Env;
    }
    if let Ok(hero) = std::env::var(HERO_ENV)
        && !hero.is_empty()
    {
        cfg.hero = Some(parse_position(&hero)?);
        sources.hero = ValueSource::Env;
    }
    if let Ok(pretty) = std::env::var(PRETTY_ENV)
        && !pretty.is_empty()
    {
        cfg.pretty =
            parse_bool(&pretty).ok_or_else(|| ConfigError::Invalid("Invalid pretty flag".into()))?;
        sources.pretty = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    table_format: Option<String>,
    #[serde(default)]
    hero: Option<String>,
    #[serde(default)]
    pretty: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(hero) = cfg.hero
        && !cfg.table_format.contains(hero)
    {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: hero {} is not a {} seat",
            hero, cfg.table_format
        )));
    }
    Ok(())
}

fn parse_format(s: &str) -> Result<TableFormat, ConfigError> {
    s.parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid table format: {}", s)))
}

fn parse_position(s: &str) -> Result<Position, ConfigError> {
    s.parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid hero position: {}", s)))
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
