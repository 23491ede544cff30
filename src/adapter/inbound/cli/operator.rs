//! Inbound operator accessor for CLI handlers.

use std::path::Path;
use std::sync::OnceLock;

use crate::error::{ConfigError, Error, Result};
use crate::port::inbound::operator::port::OperatorPort;

static OPERATOR: OnceLock<Box<dyn OperatorPort>> = OnceLock::new();

/// Installs the operator implementation used by CLI handlers.
pub fn install(operator: Box<dyn OperatorPort>) -> std::result::Result<(), Box<dyn OperatorPort>> {
    OPERATOR.set(operator)
}

/// Returns the configured operator capability surface for CLI handlers.
///
/// # Errors
///
/// Returns [`Error::NotInstalled`] until [`install`] has been called.
pub fn operator() -> Result<&'static dyn OperatorPort> {
    OPERATOR
        .get()
        .map(|operator| &**operator)
        .ok_or(Error::NotInstalled("CLI operator"))
}

/// Load config TOML from disk for operator-facing use-cases.
pub fn read_config_toml(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile(e).into())
}

/// Like [`read_config_toml`], but `None` stays `None` so defaults apply.
pub fn read_optional_config_toml(path: Option<&Path>) -> Result<Option<String>> {
    path.map(read_config_toml).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_config_absent_stays_none() {
        assert!(read_optional_config_toml(None).unwrap().is_none());
    }

    #[test]
    fn test_missing_config_file_is_read_error() {
        let result = read_config_toml(Path::new("/nonexistent/solid-lessons.toml"));
        assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
    }
}
