use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::id::FirstDigitPolicy;
use crate::logger::Logger;

/// Config file picked up from the working directory when no `--config` path
/// was given.
pub const DEFAULT_CONFIG_FILE: &str = "thaid.toml";

/// Default ceiling for a single generate invocation.
pub const DEFAULT_MAX_COUNT: usize = 20;

/// Raw shape of the TOML file: every field optional, defaults applied when
/// resolving into [`Config`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfig {
    pub max_count: Option<usize>,
    pub first_digit: Option<FirstDigitPolicy>,
    pub formatted: Option<bool>,
    pub json: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub max_count: usize,
    pub first_digit: FirstDigitPolicy,
    pub formatted: bool,
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_count: DEFAULT_MAX_COUNT,
            first_digit: FirstDigitPolicy::default(),
            formatted: false,
            json: false,
        }
    }
}

impl Config {
    /// Loads an explicit config file, or `thaid.toml` when it exists, or the
    /// built-in defaults. An explicit path must be readable; the implicit
    /// default file is optional.
    pub fn load_or_default(path: Option<&Path>, logger: &Logger) -> Result<Config, ConfigError> {
        match path {
            Some(path) => load_config(path, logger),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    load_config(default, logger)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("max_count must be at least 1")]
    InvalidMaxCount,
}

pub fn load_config(path: &Path, logger: &Logger) -> Result<Config, ConfigError> {
    logger.info(&format!("Loading config from {}...", path.display()));
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let raw: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    resolve(raw)
}

fn resolve(raw: RawConfig) -> Result<Config, ConfigError> {
    let max_count = raw.max_count.unwrap_or(DEFAULT_MAX_COUNT);
    if max_count < 1 {
        return Err(ConfigError::InvalidMaxCount);
    }
    Ok(Config {
        max_count,
        first_digit: raw.first_digit.unwrap_or_default(),
        formatted: raw.formatted.unwrap_or(false),
        json: raw.json.unwrap_or(false),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_when_everything_is_omitted() {
        let raw: RawConfig = toml::from_str("").unwrap();
        let config = resolve(raw).unwrap();
        assert_eq!(config.max_count, DEFAULT_MAX_COUNT);
        assert_eq!(config.first_digit, FirstDigitPolicy::Category);
        assert!(!config.formatted);
        assert!(!config.json);
    }

    #[test]
    fn parses_every_field() {
        let raw: RawConfig = toml::from_str(
            "max_count = 5\nfirst_digit = \"any\"\nformatted = true\njson = true\n",
        )
        .unwrap();
        let config = resolve(raw).unwrap();
        assert_eq!(config.max_count, 5);
        assert_eq!(config.first_digit, FirstDigitPolicy::Any);
        assert!(config.formatted);
        assert!(config.json);
    }

    #[test]
    fn rejects_zero_max_count() {
        let raw: RawConfig = toml::from_str("max_count = 0").unwrap();
        assert!(matches!(resolve(raw), Err(ConfigError::InvalidMaxCount)));
    }

    #[test]
    fn loads_from_a_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "max_count = 3").unwrap();
        let config = load_config(file.path(), &Logger::new(false)).unwrap();
        assert_eq!(config.max_count, 3);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = load_config(Path::new("does-not-exist.toml"), &Logger::new(false));
        assert!(matches!(err, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "max_count = \"lots\"").unwrap();
        let err = load_config(file.path(), &Logger::new(false));
        assert!(matches!(err, Err(ConfigError::Parse { .. })));
    }
}
