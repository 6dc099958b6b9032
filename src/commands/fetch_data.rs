//! Fetch raw feeds over HTTP

use serde_json::Value;
use std::path::{Path, PathBuf};

use super::{
    common::{open_database, store_game_logs},
    resolve_path, resolve_setting, DEFAULT_LINES_FILE,
};
use crate::{
    cli::types::Season,
    core::cache::{data_dir, write_string},
    feeds::{
        decode_prop_feed,
        http::{
            build_client, get_league_gamelog, get_prop_lines, DEFAULT_PROPS_FEED_URL,
            LEAGUE_GAMELOG_URL,
        },
        GameLogTable,
    },
    storage::PlayerDatabase,
    Result, FEED_TOKEN_ENV_VAR, FEED_URL_ENV_VAR, LINES_PATH_ENV_VAR,
};

/// Raw stats-API snapshot location for a season when `--out` is not given.
pub fn default_gamelog_snapshot(season: Season) -> PathBuf {
    data_dir().join(format!("leaguegamelog_{}.json", season))
}

fn write_json(path: &Path, value: &Value) -> Result<()> {
    write_string(path, &serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Decode a stats-API payload and replace the stored snapshot with it.
pub fn ingest_fetched_gamelogs(raw: Value, db: &mut PlayerDatabase) -> Result<usize> {
    let batch = GameLogTable::from_json(raw)?.into_batch();
    store_game_logs(db, &batch)
}

/// Handle the fetch-gamelogs command
pub async fn handle_fetch_gamelogs(season: Season, out: Option<PathBuf>, ingest: bool) -> Result<()> {
    println!("Fetching {} player game logs...", season);

    let client = build_client()?;
    // tarpaulin::skip - HTTP call, tested via wiremock in feeds::http
    let raw = get_league_gamelog(&client, LEAGUE_GAMELOG_URL, season).await?;

    let path = out.unwrap_or_else(|| default_gamelog_snapshot(season));
    write_json(&path, &raw)?;
    println!("✓ Game logs saved to {}", path.display());

    if ingest {
        let mut db = open_database()?;
        let stored = ingest_fetched_gamelogs(raw, &mut db)?;
        println!("✓ {} game records stored", stored);
    }

    Ok(())
}

/// Handle the fetch-lines command
pub async fn handle_fetch_lines(url: Option<String>, out: Option<PathBuf>) -> Result<()> {
    let url = resolve_setting(url, FEED_URL_ENV_VAR, DEFAULT_PROPS_FEED_URL);
    let token = std::env::var(FEED_TOKEN_ENV_VAR).ok();

    println!("Fetching prop lines from {}...", url);
    let client = build_client()?;
    // tarpaulin::skip - HTTP call, tested via wiremock in feeds::http
    let raw = get_prop_lines(&client, &url, token.as_deref()).await?;

    // Decode before writing so an unusable payload never replaces a good file
    let lines = decode_prop_feed(raw.clone())?;

    let path = resolve_path(out, LINES_PATH_ENV_VAR, DEFAULT_LINES_FILE);
    write_json(path.path(), &raw)?;
    println!("✓ {} prop lines saved to {}", lines.len(), path.path().display());

    Ok(())
}

