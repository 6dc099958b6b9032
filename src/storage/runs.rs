//! Card run history

use super::{models::CardRun, schema::PlayerDatabase};
use crate::cli::types::ScoreFormula;
use crate::engine::{PassOutcome, PlayerCard, SkipCounts};
use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension};

type CardRunRow = (i64, String, String, i64, i64, String);

impl PlayerDatabase {
    /// Persist a pass and its cards in rank order; returns the new run id
    pub fn record_card_run(&mut self, outcome: &PassOutcome, formula: ScoreFormula) -> Result<i64> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO card_runs (generated_at, score_formula, card_count, skipped_count, skipped)
             VALUES (?, ?, ?, ?, ?)",
            params![
                outcome.generated_at.to_rfc3339(),
                formula.to_string(),
                outcome.cards.len(),
                outcome.skipped.total(),
                serde_json::to_string(&outcome.skipped)?,
            ],
        )?;
        let run_id = tx.last_insert_rowid();

        {
            let mut stmt = tx.prepare(
                "INSERT INTO player_cards (run_id, rank, player_name, prop, last_10_pct, card)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )?;
            for (rank, card) in outcome.cards.iter().enumerate() {
                stmt.execute(params![
                    run_id,
                    rank,
                    card.name,
                    card.prop,
                    card.last_10_pct,
                    serde_json::to_string(card)?,
                ])?;
            }
        }
        tx.commit()?;
        Ok(run_id)
    }

    /// Most recent run, if any
    pub fn latest_run(&self) -> Result<Option<CardRun>> {
        let row: Option<CardRunRow> = self
            .conn
            .query_row(
                "SELECT run_id, generated_at, score_formula, card_count, skipped_count, skipped
                 FROM card_runs
                 ORDER BY run_id DESC
                 LIMIT 1",
                [],
                |row| {
                    Ok((
                        row.get(0)?,
                        row.get(1)?,
                        row.get(2)?,
                        row.get(3)?,
                        row.get(4)?,
                        row.get(5)?,
                    ))
                },
            )
            .optional()?;

        let Some((run_id, generated_at, formula, card_count, skipped_count, skipped)) = row else {
            return Ok(None);
        };

        Ok(Some(CardRun {
            run_id,
            generated_at: DateTime::parse_from_rfc3339(&generated_at)?.with_timezone(&Utc),
            score_formula: formula.parse::<ScoreFormula>().map_err(|e| anyhow!(e))?,
            card_count: card_count as usize,
            skipped_count: skipped_count as usize,
            skipped: serde_json::from_str::<SkipCounts>(&skipped)?,
        }))
    }

    /// Cards of one run in rank order, optionally filtered by prop label
    pub fn cards_for_run(
        &self,
        run_id: i64,
        prop: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<PlayerCard>> {
        let mut stmt = self.conn.prepare(
            "SELECT card FROM player_cards
             WHERE run_id = ?1 AND (?2 IS NULL OR prop = ?2 COLLATE NOCASE)
             ORDER BY rank
             LIMIT ?3",
        )?;

        // SQLite treats a negative LIMIT as unbounded
        let limit = limit.map(|l| l as i64).unwrap_or(-1);
        let rows = stmt.query_map(params![run_id, prop, limit], |row| row.get::<_, String>(0))?;

        let mut cards = Vec::new();
        for row in rows {
            cards.push(serde_json::from_str(&row?)?);
        }
        Ok(cards)
    }
}
