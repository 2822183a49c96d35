use std::{
    env::{self, VarError},
    path::PathBuf,
};

use anyhow::{Context, Result};
use tracing::Level;

use crate::{
    constant::env_keys::{LOG_LEVEL, SEED_PATH},
    seed::Seed,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: Level,
    /// Json seed to start from instead of the builtin one.
    pub seed_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: Level::INFO,
            seed_path: None,
        }
    }
}

impl Config {
    /// Reads `LOG_LEVEL` and `SEED_PATH`. Call `dotenv` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        let log_level = level_from(env::var(LOG_LEVEL))?;
        let seed_path = env::var_os(SEED_PATH)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(Config {
            log_level,
            seed_path,
        })
    }

    pub fn load_seed(&self) -> Result<Seed> {
        match &self.seed_path {
            Some(path) => Seed::from_file(path)
                .with_context(|| format!("Failed to load seed from {}", path.display())),
            None => Ok(Seed::builtin()),
        }
    }
}

fn level_from(var: Result<String, VarError>) -> Result<Level> {
    match var {
        Ok(level) => parse_level(&level),
        Err(VarError::NotPresent) => Ok(Level::INFO),
        Err(e) => Err(e).with_context(|| format!("Failed to read {LOG_LEVEL}")),
    }
}

fn parse_level(level: &str) -> Result<Level> {
    level
        .trim()
        .parse::<Level>()
        .with_context(|| format!("Invalid {LOG_LEVEL}: {level}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels_case_insensitively() {
        assert_eq!(parse_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_level(" WARN ").unwrap(), Level::WARN);
        assert!(parse_level("loud").is_err());
    }

    #[test]
    fn unset_level_defaults_but_unreadable_level_fails() {
        assert_eq!(level_from(Err(VarError::NotPresent)).unwrap(), Level::INFO);
        assert_eq!(level_from(Ok("trace".to_string())).unwrap(), Level::TRACE);

        let error = level_from(Err(VarError::NotUnicode("\u{fffd}".into()))).unwrap_err();
        assert!(error.to_string().contains(LOG_LEVEL));
    }

    #[test]
    fn default_config_uses_builtin_seed() {
        let config = Config::default();
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.load_seed().unwrap(), Seed::builtin());
    }

    #[test]
    fn bad_seed_path_reports_the_path() {
        let config = Config {
            seed_path: Some(PathBuf::from("/missing/seed.json")),
            ..Config::default()
        };
        let error = config.load_seed().unwrap_err();
        assert!(error.to_string().contains("/missing/seed.json"));
    }
}
