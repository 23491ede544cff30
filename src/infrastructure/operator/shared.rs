//! Shared helper routines for operator implementations.

use tracing::debug;

use crate::domain::Principle;
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::config::settings::Config;

/// Parse `config_toml` (or take defaults), apply the log level override and
/// initialize logging.
pub(super) fn load_config(config_toml: Option<&str>, log_level: Option<&str>) -> Result<Config> {
    let mut config = match config_toml {
        Some(content) => Config::parse_toml(content)?,
        None => Config::default(),
    };
    config.logging = config.logging.with_level(log_level);
    config.init_logging();
    debug!(from_file = config_toml.is_some(), level = %config.logging.level, "configuration loaded");
    Ok(config)
}

/// Lessons named on the command line, or the `[runner]` selection when none
/// are. Empty means all.
pub(super) fn resolve_lessons(overrides: &[String], config: &Config) -> Result<Vec<Principle>> {
    if overrides.is_empty() {
        return config.selected_lessons();
    }
    overrides
        .iter()
        .map(|name| {
            name.parse::<Principle>().map_err(|err| {
                Error::from(ConfigError::InvalidValue {
                    field: "lesson",
                    reason: err.to_string(),
                })
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win_over_config() {
        let config = Config::parse_toml("[runner]\nlessons = [\"srp\"]\n").unwrap();
        let names = vec!["LSP".to_string(), "interface-segregation".to_string()];
        assert_eq!(
            resolve_lessons(&names, &config).unwrap(),
            vec![Principle::LiskovSubstitution, Principle::InterfaceSegregation]
        );
    }

    #[test]
    fn test_falls_back_to_config_selection() {
        let config = Config::parse_toml("[runner]\nlessons = [\"srp\"]\n").unwrap();
        assert_eq!(
            resolve_lessons(&[], &config).unwrap(),
            vec![Principle::SingleResponsibility]
        );
    }

    #[test]
    fn test_unknown_override_is_invalid_value() {
        let names = vec!["dry".to_string()];
        assert!(matches!(
            resolve_lessons(&names, &Config::default()),
            Err(Error::Config(ConfigError::InvalidValue { field: "lesson", .. }))
        ));
    }

    #[test]
    fn test_load_config_applies_level_override() {
        let config = load_config(Some("[logging]\nlevel = \"info\"\n"), Some("debug")).unwrap();
        assert_eq!(config.logging.level, "debug");

        let config = load_config(None, None).unwrap();
        assert_eq!(config.logging.level, "warn");
    }
}
