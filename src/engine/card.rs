//! Card Assembler: one prop line plus history in, one [`PlayerCard`] out.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::aggregate::{aggregate, round_to, window_median, Window};
use super::projection::{expected_minutes, project_stat, ProjectionArena};
use super::record::PropLine;
use super::resolver::StatResolver;
use super::score::{CardScorer, ScoreInput};
use super::store::GameLogStore;
use crate::cli::types::PlayerId;
use crate::core::names::make_slug;

/// Fewest game records that still produce a card.
pub const MIN_GAMES: usize = 5;

/// Opponent shown when the feed does not name one.
pub const UNKNOWN_OPPONENT: &str = "???";

/// Team abbreviation → point spread for tonight's game.
pub type TeamSpreads = HashMap<String, f64>;

/// Finished card, serialized as one flat JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCard {
    pub name: String,
    pub player_slug: String,
    pub player_id: Option<PlayerId>,
    pub team: Option<String>,
    pub opponent: String,
    pub prop: String,
    pub line: f64,
    pub last_5: String,
    pub last_5_pct: f64,
    pub last_10: String,
    pub last_10_pct: f64,
    pub last_20: String,
    pub last_20_pct: f64,
    pub season: String,
    pub season_pct: f64,
    pub avg: f64,
    /// Median of the last ten values.
    pub median: f64,
    pub games: usize,
    pub last_10_values: Vec<f64>,
    pub projection: f64,
    pub expected_minutes: f64,
    pub score: Option<f64>,
    pub spread: Option<f64>,
    pub over_odds: Option<f64>,
    pub under_odds: Option<f64>,
}

/// Why a prop line produced no card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Name, stat label or line absent.
    MissingField,
    UnknownStat,
    NoHistory,
    InsufficientHistory,
    /// Enough games, but none carries the stat's columns.
    NoStatValues,
}

impl SkipReason {
    pub const ALL: [SkipReason; 5] = [
        SkipReason::MissingField,
        SkipReason::UnknownStat,
        SkipReason::NoHistory,
        SkipReason::InsufficientHistory,
        SkipReason::NoStatValues,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::MissingField => "missing_field",
            SkipReason::UnknownStat => "unknown_stat",
            SkipReason::NoHistory => "no_history",
            SkipReason::InsufficientHistory => "insufficient_history",
            SkipReason::NoStatValues => "no_stat_values",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed view of everything a pass shares across lines.
pub struct CardAssembler<'a> {
    store: &'a GameLogStore,
    resolver: &'a StatResolver,
    scorer: &'a dyn CardScorer,
    spreads: Option<&'a TeamSpreads>,
}

impl<'a> CardAssembler<'a> {
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

    pub fn assemble(
        &self,
        line: &PropLine,
        arena: &mut ProjectionArena,
    ) -> std::result::Result<PlayerCard, SkipReason> {
        let (name, label, line_value) = match (
            line.player_name.as_deref().map(str::trim),
            line.stat_label.as_deref(),
            line.line_value,
        ) {
            (Some(name), Some(label), Some(value)) if !name.is_empty() => (name, label, value),
            _ => return Err(SkipReason::MissingField),
        };

        let kind = self
            .resolver
            .resolve(label)
            .ok_or(SkipReason::UnknownStat)?;

        let history = self.store.lookup(name).ok_or(SkipReason::NoHistory)?;
        if history.games.len() < MIN_GAMES {
            return Err(SkipReason::InsufficientHistory);
        }

        let series = kind.series(history.games);
        if series.is_empty() {
            return Err(SkipReason::NoStatValues);
        }
        let agg = aggregate(&series, line_value);
        let (projection, _) = project_stat(arena, history.name, kind, &series);

        let team = line
            .team
            .clone()
            .or_else(|| history.games.iter().find_map(|g| g.team.clone()));
        let spread = team
            .as_ref()
            .and_then(|t| self.spreads.and_then(|s| s.get(t).copied()));

        let score = self.scorer.score(&ScoreInput {
            projection,
            line: line_value,
            l10_pct: agg.l10.pct(),
            l10_average: agg.l10.average,
            spread,
        });

        Ok(PlayerCard {
            name: name.to_string(),
            player_slug: make_slug(name),
            player_id: history.games.iter().find_map(|g| g.player_id),
            team,
            opponent: line
                .opponent
                .clone()
                .unwrap_or_else(|| UNKNOWN_OPPONENT.to_string()),
            prop: kind.label().to_string(),
            line: line_value,
            last_5: agg.l5.record(),
            last_5_pct: agg.l5.pct(),
            last_10: agg.l10.record(),
            last_10_pct: agg.l10.pct(),
            last_20: agg.l20.record(),
            last_20_pct: agg.l20.pct(),
            season: agg.season.record(),
            season_pct: agg.season.pct(),
            avg: round_to(agg.season.average, 1),
            median: round_to(window_median(&series, Window::L10), 1),
            games: history.games.len(),
            last_10_values: agg.last_10_values,
            projection,
            expected_minutes: expected_minutes(history.games),
            score,
            spread,
            over_odds: line.over_price,
            under_odds: line.under_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::record::{GameRecord, StatCode};
    use crate::engine::score::{BlendScorer, RatioScorer};
    use chrono::NaiveDate;

    fn history(name: &str, pts: &[f64]) -> Vec<GameRecord> {
        pts.iter()
            .enumerate()
            .map(|(i, p)| {
                // most recent first: day 30, 29, ...
                let date = NaiveDate::from_ymd_opt(2025, 11, 30 - i as u32).unwrap();
                GameRecord::new(name, date)
                    .with_team("NYK")
                    .with_stat(StatCode::Pts, *p)
                    .with_stat(StatCode::Min, 32.0)
            })
            .collect()
    }

    #[test]
    fn test_player_a_card() {
        let store = GameLogStore::from_records(history(
            "Player A",
            &[20.0, 18.0, 25.0, 22.0, 19.0, 30.0],
        ));
        let resolver = StatResolver::default();
        let assembler = CardAssembler::new(&store, &resolver, &RatioScorer);
        let mut arena = ProjectionArena::new();

        let card = assembler
            .assemble(&PropLine::new("Player A", "Points", 20.0), &mut arena)
            .unwrap();

        assert_eq!(card.last_5, "2/5");
        assert_eq!(card.last_5_pct, 40.0);
        assert_eq!(card.season, "3/6");
        assert_eq!(card.season_pct, 50.0);
        assert_eq!(card.last_10, "3/6");
        assert_eq!(card.avg, 22.3);
        assert_eq!(card.median, 21.0);
        assert_eq!(card.games, 6);
        assert_eq!(card.last_10_values, vec![30.0, 19.0, 22.0, 25.0, 18.0, 20.0]);
        assert_eq!(card.projection, 21.87);
        assert_eq!(card.expected_minutes, 32.0);
        assert_eq!(card.team.as_deref(), Some("NYK"));
        assert_eq!(card.opponent, UNKNOWN_OPPONENT);
        assert_eq!(card.player_slug, "player-a");
        assert_eq!(card.prop, "Points");
        assert!(card.score.is_some());
        assert_eq!(arena.base("Player A", crate::engine::StatKind::Points), Some(21.87));
    }

    #[test]
    fn test_skip_reasons() {
        let mut records = history("Five", &[1.0; 5]);
        records.extend(history("Four", &[1.0; 4]));
        let store = GameLogStore::from_records(records);
        let resolver = StatResolver::default();
        let assembler = CardAssembler::new(&store, &resolver, &RatioScorer);
        let mut arena = ProjectionArena::new();

        let missing = PropLine {
            player_name: Some("Five".to_string()),
            stat_label: Some("Points".to_string()),
            ..PropLine::default()
        };
        assert_eq!(
            assembler.assemble(&missing, &mut arena),
            Err(SkipReason::MissingField)
        );
        assert_eq!(
            assembler.assemble(&PropLine::new("  ", "Points", 1.0), &mut arena),
            Err(SkipReason::MissingField)
        );
        assert_eq!(
            assembler.assemble(&PropLine::new("Five", "Fouls Drawn", 1.0), &mut arena),
            Err(SkipReason::UnknownStat)
        );
        assert_eq!(
            assembler.assemble(&PropLine::new("Nobody", "Points", 1.0), &mut arena),
            Err(SkipReason::NoHistory)
        );
        assert_eq!(
            assembler.assemble(&PropLine::new("Four", "Points", 1.0), &mut arena),
            Err(SkipReason::InsufficientHistory)
        );
        assert!(assembler
            .assemble(&PropLine::new("Five", "Points", 1.0), &mut arena)
            .is_ok());
    }

    #[test]
    fn test_zero_line_has_no_ratio_score() {
        let store = GameLogStore::from_records(history("A", &[3.0; 6]));
        let resolver = StatResolver::default();
        let assembler = CardAssembler::new(&store, &resolver, &RatioScorer);
        let card = assembler
            .assemble(&PropLine::new("A", "Points", 0.0), &mut ProjectionArena::new())
            .unwrap();
        assert_eq!(card.line, 0.0);
        assert_eq!(card.score, None);
        assert_eq!(card.last_10, "6/6");
    }

    #[test]
    fn test_spread_attached_by_team() {
        let store = GameLogStore::from_records(history("A", &[22.0; 10]));
        let resolver = StatResolver::default();
        let mut spreads = TeamSpreads::new();
        spreads.insert("NYK".to_string(), -6.5);
        let assembler = CardAssembler::new(&store, &resolver, &BlendScorer).with_spreads(&spreads);

        let card = assembler
            .assemble(
                &PropLine::new("A", "Points", 20.0).with_opponent("BOS"),
                &mut ProjectionArena::new(),
            )
            .unwrap();
        assert_eq!(card.spread, Some(-6.5));
        assert_eq!(card.opponent, "BOS");
        // 100 * 0.4 + 1.1 * 40 + 20
        assert_eq!(card.score, Some(104.0));
    }

    #[test]
    fn test_player_id_taken_from_history() {
        let records: Vec<GameRecord> = history("A", &[5.0; 5])
            .into_iter()
            .map(|g| g.with_player_id(PlayerId::new(42)))
            .collect();
        let store = GameLogStore::from_records(records);
        let resolver = StatResolver::default();
        let card = CardAssembler::new(&store, &resolver, &RatioScorer)
            .assemble(&PropLine::new("A", "pts", 4.5), &mut ProjectionArena::new())
            .unwrap();
        assert_eq!(card.player_id, Some(PlayerId::new(42)));
    }

    #[test]
    fn test_stat_without_column_values_is_skipped() {
        let store = GameLogStore::from_records(history("A", &[25.0; 6]));
        let resolver = StatResolver::default();
        let assembler = CardAssembler::new(&store, &resolver, &RatioScorer);
        let mut arena = ProjectionArena::new();

        assert_eq!(
            assembler.assemble(&PropLine::new("A", "Fantasy Score", 30.5), &mut arena),
            Err(SkipReason::NoStatValues)
        );
        assert_eq!(
            assembler.assemble(&PropLine::new("A", "Rebounds", 4.5), &mut arena),
            Err(SkipReason::NoStatValues)
        );
        assert!(arena.is_empty());
        assert!(assembler
            .assemble(&PropLine::new("A", "Points", 24.5), &mut arena)
            .is_ok());
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(SkipReason::UnknownStat.to_string(), "unknown_stat");
        assert_eq!(SkipReason::NoStatValues.to_string(), "no_stat_values");
    }
}
