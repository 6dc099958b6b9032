//! Database schema and connection management

use crate::{core::cache::data_dir, DB_PATH_ENV_VAR};
use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Database connection manager for game logs and card runs
pub struct PlayerDatabase {
    pub(crate) conn: Connection,
}

impl PlayerDatabase {
    /// Open the default database and ensure tables exist
    pub fn new() -> Result<Self> {
        Self::open(&Self::database_path())
    }

    /// Open (or create) a database file at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Fresh in-memory database, used by tests and `--no-store` dry runs
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// `$NBA_PROPS_DB`, else `~/.cache/nba-props/props.db`
    pub fn database_path() -> PathBuf {
        std::env::var(DB_PATH_ENV_VAR)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir().join("props.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute("PRAGMA foreign_keys = ON", [])?;

        // Latest game-log snapshot; replaced wholesale on ingest
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS game_logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                player_name TEXT NOT NULL,
                player_id INTEGER,
                team TEXT,
                matchup TEXT,
                game_date TEXT NOT NULL,
                stats TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_game_logs_player_date
             ON game_logs(player_name, game_date)",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS card_runs (
                run_id INTEGER PRIMARY KEY AUTOINCREMENT,
                generated_at TEXT NOT NULL,
                score_formula TEXT NOT NULL,
                card_count INTEGER NOT NULL,
                skipped_count INTEGER NOT NULL,
                skipped TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS player_cards (
                run_id INTEGER NOT NULL,
                rank INTEGER NOT NULL,
                player_name TEXT NOT NULL,
                prop TEXT NOT NULL,
                last_10_pct REAL NOT NULL,
                card TEXT NOT NULL,
                PRIMARY KEY (run_id, rank),
                FOREIGN KEY (run_id) REFERENCES card_runs(run_id) ON DELETE CASCADE
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_player_cards_prop
             ON player_cards(run_id, prop)",
            [],
        )?;

        Ok(())
    }
}
