//! Source scanning behind the layer contracts.
//!
//! Each source file is split into its production part and its trailing
//! `#[cfg(test)]` module. Layer rules only look at the production part, so
//! unit tests may reach across layers.

use std::fs;
use std::path::{Path, PathBuf};

/// Code under `layer` must not mention any of `forbidden`.
pub struct LayerRule {
    pub layer: &'static str,
    pub forbidden: &'static [&'static str],
}

/// A source line that breaks a contract.
#[derive(Debug)]
pub struct Violation {
    pub file: String,
    pub line: usize,
    pub text: String,
}

struct SourceFile {
    relative: String,
    lines: Vec<String>,
    /// Index of the `#[cfg(test)]` line, or `lines.len()`.
    test_start: usize,
}

impl SourceFile {
    fn production_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines[..self.test_start]
            .iter()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.as_str()))
    }

    fn is_mod_rs(&self) -> bool {
        self.relative.ends_with("/mod.rs")
    }

    fn violation(&self, line: usize, text: &str) -> Violation {
        Violation {
            file: self.relative.clone(),
            line,
            text: text.trim().to_string(),
        }
    }
}

fn manifest_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

fn rust_files_under(dir: &Path) -> Vec<PathBuf> {
    let mut pending = vec![dir.to_path_buf()];
    let mut found = Vec::new();

    while let Some(dir) = pending.pop() {
        let entries = fs::read_dir(&dir)
            .unwrap_or_else(|e| panic!("cannot list {}: {e}", dir.display()));
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                found.push(path);
            }
        }
    }

    found.sort();
    found
}

fn sources(layer: &str) -> Vec<SourceFile> {
    rust_files_under(&manifest_dir().join(layer))
        .into_iter()
        .map(|path| {
            let content = fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
            let lines: Vec<String> = content.lines().map(String::from).collect();
            let test_start = lines
                .iter()
                .position(|line| line.trim() == "#[cfg(test)]")
                .unwrap_or(lines.len());
            let relative = path
                .strip_prefix(manifest_dir())
                .unwrap_or(&path)
                .to_string_lossy()
                .replace('\\', "/");
            SourceFile {
                relative,
                lines,
                test_start,
            }
        })
        .collect()
}

/// Production lines under `rule.layer` that mention a forbidden path.
pub fn check(rule: &LayerRule) -> Vec<Violation> {
    sources(rule.layer)
        .iter()
        .flat_map(|file| {
            file.production_lines()
                .filter(|(_, text)| rule.forbidden.iter().any(|p| text.contains(p)))
                .map(|(line, text)| file.violation(line, text))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Lines in `mod.rs` files under `layer` that do more than declare or
/// re-export modules. Test modules count too.
pub fn mod_files_with_logic(layer: &str) -> Vec<Violation> {
    const ALLOWED: [&str; 5] = ["//", "pub mod ", "mod ", "pub use ", "#[cfg"];

    sources(layer)
        .iter()
        .filter(|file| file.is_mod_rs())
        .flat_map(|file| {
            file.lines
                .iter()
                .enumerate()
                .filter(|(_, raw)| {
                    let line = raw.trim();
                    !line.is_empty() && !ALLOWED.iter().any(|p| line.starts_with(p))
                })
                .map(|(idx, raw)| file.violation(idx + 1, raw))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// File stems of the modules directly under `layer`, without `mod`.
pub fn module_names(layer: &str) -> Vec<String> {
    let dir = manifest_dir().join(layer);
    sources(layer)
        .iter()
        .filter(|file| !file.is_mod_rs())
        .filter_map(|file| {
            let path = manifest_dir().join(&file.relative);
            (path.parent() == Some(dir.as_path()))
                .then(|| path.file_stem()?.to_str().map(String::from))
                .flatten()
        })
        .collect()
}
