//! Game-log snapshot operations

use super::schema::PlayerDatabase;
use crate::cli::types::PlayerId;
use crate::engine::{GameRecord, StatCode};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::params;
use std::collections::BTreeMap;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw row as stored; dates and stats are decoded after the query.
type GameLogRow = (
    String,
    Option<u64>,
    Option<String>,
    Option<String>,
    String,
    String,
);

impl PlayerDatabase {
    /// Replace the stored snapshot with `records` in one transaction
    pub fn replace_game_logs(&mut self, records: &[GameRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM game_logs", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO game_logs (player_name, player_id, team, matchup, game_date, stats)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )?;
            for record in records {
                stmt.execute(params![
                    record.player_name,
                    record.player_id.map(|id| id.as_u64()),
                    record.team,
                    record.matchup,
                    record.game_date.format(DATE_FORMAT).to_string(),
                    serde_json::to_string(&record.stats)?,
                ])?;
            }
        }
        tx.commit()?;
        Ok(records.len())
    }

    /// All stored records in insertion order
    pub fn load_game_logs(&self) -> Result<Vec<GameRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_name, player_id, team, matchup, game_date, stats
             FROM game_logs
             ORDER BY id",
        )?;

        let rows = stmt.query_map([], |row| -> rusqlite::Result<GameLogRow> {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (player_name, player_id, team, matchup, game_date, stats) = row?;
            let game_date = NaiveDate::parse_from_str(&game_date, DATE_FORMAT)
                .with_context(|| format!("bad stored game date {:?}", game_date))?;
            let stats: BTreeMap<StatCode, f64> = serde_json::from_str(&stats)?;

            let mut record = GameRecord::new(player_name, game_date);
            record.player_id = player_id.map(PlayerId::new);
            record.team = team;
            record.matchup = matchup;
            record.stats = stats;
            records.push(record);
        }
        Ok(records)
    }

    pub fn game_log_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM game_logs", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
