//! Common utilities and helper functions shared across commands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use super::{resolve_path, PathSource, DEFAULT_GAMELOGS_FILE};
use crate::{
    core::cache::{meta_path_for, write_string},
    engine::{GameRecord, PassOutcome, PlayerCard, SkipCounts},
    error::PropsError,
    feeds::{load_gamelogs, GameLogBatch},
    storage::PlayerDatabase,
    Result, GAMELOGS_PATH_ENV_VAR,
};

/// Sidecar written next to the card output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputMeta {
    pub generated_at: DateTime<Utc>,
    pub cards: usize,
    pub skipped: SkipCounts,
    pub output: String,
}

/// Write cards and their meta file; returns the meta path.
pub fn write_card_output(output: &Path, outcome: &PassOutcome) -> Result<PathBuf> {
    write_string(output, &serde_json::to_string_pretty(&outcome.cards)?)?;

    let meta = OutputMeta {
        generated_at: outcome.generated_at,
        cards: outcome.cards.len(),
        skipped: outcome.skipped.clone(),
        output: output.display().to_string(),
    };
    let meta_path = meta_path_for(output);
    write_string(&meta_path, &serde_json::to_string_pretty(&meta)?)?;
    Ok(meta_path)
}

/// Game records from a file, or from the stored snapshot when no file is
/// named and the default file is absent.
pub fn load_game_records(cli: Option<PathBuf>, db: Option<&PlayerDatabase>) -> Result<Vec<GameRecord>> {
    let source = resolve_path(cli, GAMELOGS_PATH_ENV_VAR, DEFAULT_GAMELOGS_FILE);

    match (&source, db) {
        (PathSource::Default(path), Some(db)) if !path.exists() => {
            let records = db.load_game_logs()?;
            info!(records = records.len(), "using stored game log snapshot");
            Ok(records)
        }
        _ => {
            let batch = load_gamelogs(source.path())?;
            info!(
                records = batch.records.len(),
                rejected = batch.rejected,
                path = %source.path().display(),
                "loaded game logs"
            );
            Ok(batch.records)
        }
    }
}

/// Replace the stored snapshot with `batch`.
///
/// An empty batch is refused so a bad export cannot wipe a good snapshot.
pub fn store_game_logs(db: &mut PlayerDatabase, batch: &GameLogBatch) -> Result<usize> {
    if batch.records.is_empty() {
        return Err(PropsError::EmptyGameLogs);
    }
    let stored = db.replace_game_logs(&batch.records)?;
    info!(stored, rejected = batch.rejected, "replaced stored game log snapshot");
    Ok(stored)
}

/// One line per card for terminal output.
pub fn format_card_line(rank: usize, card: &PlayerCard) -> String {
    let score = card
        .score
        .map(|s| format!("{:.2}", s))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:>3}. {} ({}) vs {} | {} {} | L5 {} L10 {} ({:.1}%) L20 {} SZN {} | avg {:.1} proj {:.2} min {:.1} | score {}",
        rank,
        card.name,
        card.team.as_deref().unwrap_or("-"),
        card.opponent,
        card.prop,
        card.line,
        card.last_5,
        card.last_10,
        card.last_10_pct,
        card.last_20,
        card.season,
        card.avg,
        card.projection,
        card.expected_minutes,
        score,
    )
}

pub fn print_cards(cards: &[PlayerCard]) {
    for (i, card) in cards.iter().enumerate() {
        println!("{}", format_card_line(i + 1, card)); // tarpaulin::skip
    }
}

/// Skip counts as `reason=count` pairs.
pub fn format_skips(skipped: &SkipCounts) -> String {
    if skipped.total() == 0 {
        return "none".to_string();
    }
    skipped
        .iter()
        .map(|(reason, count)| format!("{}={}", reason, count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Open the default database, mapping failures into the command error type.
pub fn open_database() -> Result<PlayerDatabase> {
    PlayerDatabase::new().map_err(PropsError::from)
}
