//! Replace the stored game-log snapshot from a file

use std::path::PathBuf;

use super::{
    common::{open_database, store_game_logs},
    resolve_path, DEFAULT_GAMELOGS_FILE,
};
use crate::{feeds::load_gamelogs, storage::PlayerDatabase, Result, GAMELOGS_PATH_ENV_VAR};

/// Load `gamelogs` (or its env/default) into `db`; returns records stored.
pub fn ingest_gamelogs(gamelogs: Option<PathBuf>, db: &mut PlayerDatabase) -> Result<usize> {
    let source = resolve_path(gamelogs, GAMELOGS_PATH_ENV_VAR, DEFAULT_GAMELOGS_FILE);
    let batch = load_gamelogs(source.path())?;
    let stored = store_game_logs(db, &batch)?;
    if batch.rejected > 0 {
        println!("⚠ {} rows skipped (missing player name or date)", batch.rejected);
    }
    Ok(stored)
}

/// Handle the ingest-gamelogs command
pub fn handle_ingest_gamelogs(gamelogs: Option<PathBuf>, verbose: bool) -> Result<()> {
    let mut db = open_database()?;
    let stored = ingest_gamelogs(gamelogs, &mut db)?;

    println!("✓ {} game records stored", stored);
    if verbose {
        println!("Database: {}", PlayerDatabase::database_path().display()); // tarpaulin::skip
    }
    Ok(())
}
