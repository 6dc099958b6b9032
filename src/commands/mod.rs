//! Command implementations for the prop card CLI

pub mod build_cards;
pub mod common;
pub mod fetch_data;
pub mod ingest_gamelogs;
pub mod show_cards;


use std::path::PathBuf;


/// Default file names, relative to the working directory.
pub const DEFAULT_LINES_FILE: &str = "prop_lines.json";
pub const DEFAULT_GAMELOGS_FILE: &str = "gamelogs.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "player_cards.json";
pub const DEFAULT_SPREADS_FILE: &str = "odds/latest.json";

/// Where a resolved path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSource {
    /// `--flag` or environment variable; the file must exist.
    Explicit(PathBuf),
    /// Built-in default; may be absent.
    Default(PathBuf),
}

impl PathSource {
    pub fn path(&self) -> &PathBuf {
        match self {
            PathSource::Explicit(p) | PathSource::Default(p) => p,
        }
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self, PathSource::Explicit(_))
    }
}

/// CLI value, else `env_var`, else `default`.
pub fn resolve_path(cli: Option<PathBuf>, env_var: &str, default: &str) -> PathSource {
    if let Some(path) = cli {
        return PathSource::Explicit(path);
    }
    match std::env::var(env_var) {
        Ok(value) if !value.trim().is_empty() => PathSource::Explicit(PathBuf::from(value.trim())),
        _ => PathSource::Default(PathBuf::from(default)),
    }
}

/// CLI value, else `env_var`, else `default`; blank values count as unset.
pub fn resolve_setting(cli: Option<String>, env_var: &str, default: &str) -> String {
    if let Some(value) = cli.filter(|v| !v.trim().is_empty()) {
        return value;
    }
    match std::env::var(env_var) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => default.to_string(),
    }
}
