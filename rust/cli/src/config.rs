use serde::{Deserialize, Serialize};
use std::fs;

use bingo_engine::variant;

pub const ENV_CONFIG: &str = "BINGO_CONFIG";
pub const ENV_TYPE: &str = "BINGO_TYPE";
pub const ENV_CARDS: &str = "BINGO_CARDS";
pub const ENV_SEED: &str = "BINGO_SEED";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub variant: String,
    pub cards: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub variant: ValueSource,
    pub cards: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            variant: ValueSource::Default,
            cards: ValueSource::Default,
            seed: ValueSource::Default,
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
            variant: variant::DEFAULT_VARIANT.into(),
            cards: 10,
            seed: None,
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

/// Resolves defaults, then the TOML file named by `BINGO_CONFIG`, then env overrides.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(ENV_CONFIG)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.variant {
            cfg.variant = v;
            sources.variant = ValueSource::File;
        }
        if let Some(v) = f.cards {
            cfg.cards = v;
            sources.cards = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(v) = std::env::var(ENV_TYPE)
        && !v.is_empty()
    {
        cfg.variant = v;
        sources.variant = ValueSource::Env;
    }
    if let Ok(cards) = std::env::var(ENV_CARDS)
        && !cards.is_empty()
    {
        cfg.cards = cards
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid card count".into()))?;
        sources.cards = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var(ENV_SEED)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    variant: Option<String>,
    #[serde(default)]
    cards: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !variant::is_supported_type(&cfg.variant) {
        return Err(ConfigError::Invalid(format!(
            "unknown variant '{}'",
            cfg.variant
        )));
    }
    if cfg.cards == 0 {
        return Err(ConfigError::Invalid(
            "cards must be >0".into(),
        ));
    }
    Ok(())
}
