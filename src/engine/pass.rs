//! Refresh Pass: the whole prop feed against the whole store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

use super::card::{CardAssembler, PlayerCard, SkipReason, TeamSpreads};
use super::projection::ProjectionArena;
use super::record::PropLine;
use super::resolver::StatResolver;
use super::score::CardScorer;
use super::store::GameLogStore;
use crate::error::{PropsError, Result};

/// Skipped lines per reason.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkipCounts(BTreeMap<SkipReason, usize>);

impl SkipCounts {
    pub fn record(&mut self, reason: SkipReason) {
        *self.0.entry(reason).or_insert(0) += 1;
    }

    pub fn get(&self, reason: SkipReason) -> usize {
        self.0.get(&reason).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SkipReason, usize)> + '_ {
        self.0.iter().map(|(reason, count)| (*reason, *count))
    }
}

/// Result of one pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassOutcome {
    /// Sorted by `last_10_pct` descending; ties keep feed order.
    pub cards: Vec<PlayerCard>,
    pub skipped: SkipCounts,
    pub generated_at: DateTime<Utc>,
}

// generated_at is the only time-dependent field and is left out.
impl PartialEq for PassOutcome {
    fn eq(&self, other: &Self) -> bool {
        self.cards == other.cards && self.skipped == other.skipped
    }
}

/// One batch run. Owns its projection arena, which is dropped with the pass.
pub struct RefreshPass<'a> {
    store: &'a GameLogStore,
    resolver: &'a StatResolver,
    scorer: &'a dyn CardScorer,
    spreads: Option<&'a TeamSpreads>,
}

impl<'a> RefreshPass<'a> {
    pub fn new(
        store: &'a GameLogStore,
        resolver: &'a StatResolver,
        scorer: &'a dyn CardScorer,
    ) -> Self {
        Self {
            store,
            resolver,
            scorer,
            spreads: None,
        }
    }

    pub fn with_spreads(mut self, spreads: &'a TeamSpreads) -> Self {
        self.spreads = Some(spreads);
        self
    }

    /// Build cards for `lines` in feed order.
    ///
    /// # Errors
    ///
    /// [`PropsError::EmptyGameLogs`] when the store holds no records and
    /// [`PropsError::EmptyPropFeed`] when `lines` is empty.
    pub fn run(&self, lines: &[PropLine]) -> Result<PassOutcome> {
        if self.store.is_empty() {
            return Err(PropsError::EmptyGameLogs);
        }
        if lines.is_empty() {
            return Err(PropsError::EmptyPropFeed);
        }

        let mut assembler = CardAssembler::new(self.store, self.resolver, self.scorer);
        if let Some(spreads) = self.spreads {
            assembler = assembler.with_spreads(spreads);
        }

        let mut arena = ProjectionArena::new();
        let mut cards = Vec::with_capacity(lines.len());
        let mut skipped = SkipCounts::default();

        for line in lines {
            match assembler.assemble(line, &mut arena) {
                Ok(card) => cards.push(card),
                Err(reason) => {
                    debug!(
                        player = line.player_name.as_deref().unwrap_or("?"),
                        stat = line.stat_label.as_deref().unwrap_or("?"),
                        %reason,
                        "skipping prop line"
                    );
                    skipped.record(reason);
                }
            }
        }

        // sort_by is stable
        cards.sort_by(|a, b| b.last_10_pct.total_cmp(&a.last_10_pct));

        info!(
            cards = cards.len(),
            skipped = skipped.total(),
            scorer = self.scorer.name(),
            players = self.store.player_count(),
            "refresh pass complete"
        );

        Ok(PassOutcome {
            cards,
            skipped,
            generated_at: Utc::now(),
        })
    }
}
