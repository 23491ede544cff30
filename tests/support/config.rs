use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A config file in its own temporary directory. The directory is removed
/// when the value is dropped.
pub struct TempConfig {
    _dir: TempDir,
    pub path: PathBuf,
}

pub fn write_temp_config(contents: &str) -> TempConfig {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    TempConfig { _dir: dir, path }
}
