//! File system locations and helpers for feed snapshots and card output
//!
//! Output artifacts are consumed by other processes while a refresh may be
//! running, so every write goes to a sibling temp file first and is then
//! renamed over the target.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

/// Path: ~/.cache/nba-props
pub fn data_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("nba-props")
}

/// `cards.json` -> `cards.meta.json`
pub fn meta_path_for(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "cards".to_string());
    output.with_file_name(format!("{}.meta.json", stem))
}

/// Write a string to file via write-to-temp-then-rename
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let tmp = path.with_file_name(format!(".{}.tmp", file_name));

    {
        let mut f = fs::File::create(&tmp)?;
        f.write_all(contents.as_bytes())?;
        f.sync_all()?;
    }
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_data_dir() {
        let path = data_dir();
        assert!(path.to_string_lossy().contains("nba-props"));
    }

    #[test]
    fn test_meta_path_for() {
        let meta = meta_path_for(Path::new("/tmp/out/player_cards.json"));
        assert_eq!(
            meta,
            PathBuf::from("/tmp/out/player_cards.meta.json")
        );
    }

    #[test]
    fn test_write_string_replaces_and_leaves_no_temp() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("cards.json");

        write_string(&file_path, "[1]").unwrap();
        write_string(&file_path, "[2]").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "[2]");
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_write_string_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("subdir").join("output.txt");

        write_string(&file_path, "test content").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "test content");
    }
}
