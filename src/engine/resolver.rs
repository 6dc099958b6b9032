//! Stat Resolver: prop labels to canonical stats and per-game values.
//!
//! Feeds spell the same market many ways ("PRA", "Pts+Rebs+Asts",
//! "pts_rebs_asts"). [`StatResolver::resolve`] is the only place a label is
//! canonicalized; everything after it works with [`StatKind`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::record::{GameRecord, StatCode};

/// How a stat's per-game value is built from box-score columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatMapping {
    /// Sum of the listed columns; absent columns contribute zero.
    Sum(&'static [StatCode]),
    /// `max(0, minuend - subtrahend)`.
    Difference {
        minuend: StatCode,
        subtrahend: StatCode,
    },
}

impl StatMapping {
    /// Columns read by this mapping, in order.
    pub fn columns(&self) -> Vec<StatCode> {
        match self {
            StatMapping::Sum(codes) => codes.to_vec(),
            StatMapping::Difference {
                minuend,
                subtrahend,
            } => vec![*minuend, *subtrahend],
        }
    }

    /// Combined value for one game.
    ///
    /// `None` when the game carries none of the summed columns (or lacks the
    /// minuend), so the game drops out of the series instead of counting as 0.
    pub fn value_for(&self, record: &GameRecord) -> Option<f64> {
        match self {
            StatMapping::Sum(codes) => {
                let mut total = 0.0;
                let mut seen = false;
                for code in codes.iter() {
                    if let Some(v) = record.stat(*code) {
                        total += v;
                        seen = true;
                    }
                }
                seen.then_some(total)
            }
            StatMapping::Difference {
                minuend,
                subtrahend,
            } => {
                let base = record.stat(*minuend)?;
                let less = record.stat(*subtrahend).unwrap_or(0.0);
                Some((base - less).max(0.0))
            }
        }
    }
}

/// Canonical prop markets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatKind {
    Points,
    Rebounds,
    Assists,
    ThreesMade,
    Steals,
    Blocks,
    Turnovers,
    FantasyScore,
    StealsBlocks,
    TwoPointAttempts,
    ThreePointAttempts,
    FieldGoalAttempts,
    DefensiveRebounds,
    OffensiveRebounds,
    PtsRebs,
    PtsAsts,
    RebsAsts,
    PtsRebsAsts,
}

impl StatKind {
    pub const ALL: [StatKind; 18] = [
        StatKind::Points,
        StatKind::Rebounds,
        StatKind::Assists,
        StatKind::ThreesMade,
        StatKind::Steals,
        StatKind::Blocks,
        StatKind::Turnovers,
        StatKind::FantasyScore,
        StatKind::StealsBlocks,
        StatKind::TwoPointAttempts,
        StatKind::ThreePointAttempts,
        StatKind::FieldGoalAttempts,
        StatKind::DefensiveRebounds,
        StatKind::OffensiveRebounds,
        StatKind::PtsRebs,
        StatKind::PtsAsts,
        StatKind::RebsAsts,
        StatKind::PtsRebsAsts,
    ];

    /// Display label written on cards.
    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Points => "Points",
            StatKind::Rebounds => "Rebounds",
            StatKind::Assists => "Assists",
            StatKind::ThreesMade => "3PM",
            StatKind::Steals => "Steals",
            StatKind::Blocks => "Blocks",
            StatKind::Turnovers => "Turnovers",
            StatKind::FantasyScore => "Fantasy Score",
            StatKind::StealsBlocks => "Steals + Blocks",
            StatKind::TwoPointAttempts => "2PT Att",
            StatKind::ThreePointAttempts => "3PT Att",
            StatKind::FieldGoalAttempts => "FG Att",
            StatKind::DefensiveRebounds => "Defensive Rebounds",
            StatKind::OffensiveRebounds => "Offensive Rebounds",
            StatKind::PtsRebs => "Pts+Rebs",
            StatKind::PtsAsts => "Pts+Asts",
            StatKind::RebsAsts => "Rebs+Asts",
            StatKind::PtsRebsAsts => "Pts+Rebs+Asts",
        }
    }

    pub fn mapping(&self) -> StatMapping {
        use StatCode::*;
        match self {
            StatKind::Points => StatMapping::Sum(&[Pts]),
            StatKind::Rebounds => StatMapping::Sum(&[Reb]),
            StatKind::Assists => StatMapping::Sum(&[Ast]),
            StatKind::ThreesMade => StatMapping::Sum(&[ThreesMade]),
            StatKind::Steals => StatMapping::Sum(&[Stl]),
            StatKind::Blocks => StatMapping::Sum(&[Blk]),
            StatKind::Turnovers => StatMapping::Sum(&[Tov]),
            StatKind::FantasyScore => StatMapping::Sum(&[Fp]),
            StatKind::StealsBlocks => StatMapping::Sum(&[Stl, Blk]),
            StatKind::TwoPointAttempts => StatMapping::Difference {
                minuend: Fga,
                subtrahend: ThreesAttempted,
            },
            StatKind::ThreePointAttempts => StatMapping::Sum(&[ThreesAttempted]),
            StatKind::FieldGoalAttempts => StatMapping::Sum(&[Fga]),
            StatKind::DefensiveRebounds => StatMapping::Sum(&[Dreb]),
            StatKind::OffensiveRebounds => StatMapping::Sum(&[Oreb]),
            StatKind::PtsRebs => StatMapping::Sum(&[Pts, Reb]),
            StatKind::PtsAsts => StatMapping::Sum(&[Pts, Ast]),
            StatKind::RebsAsts => StatMapping::Sum(&[Reb, Ast]),
            StatKind::PtsRebsAsts => StatMapping::Sum(&[Pts, Reb, Ast]),
        }
    }

    /// Base stats whose projections add up to this combo's projection.
    pub fn combo_components(&self) -> Option<&'static [StatKind]> {
        match self {
            StatKind::PtsRebs => Some(&[StatKind::Points, StatKind::Rebounds]),
            StatKind::PtsAsts => Some(&[StatKind::Points, StatKind::Assists]),
            StatKind::RebsAsts => Some(&[StatKind::Rebounds, StatKind::Assists]),
            StatKind::PtsRebsAsts => Some(&[
                StatKind::Points,
                StatKind::Rebounds,
                StatKind::Assists,
            ]),
            _ => None,
        }
    }

    /// Stats whose projections are kept for combo composition.
    pub fn is_base(&self) -> bool {
        matches!(
            self,
            StatKind::Points | StatKind::Rebounds | StatKind::Assists
        )
    }

    /// Per-game combined values over `games`, preserving their order.
    pub fn series(&self, games: &[GameRecord]) -> Vec<f64> {
        let mapping = self.mapping();
        games.iter().filter_map(|g| mapping.value_for(g)).collect()
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Alternate spellings accepted on top of each canonical label.
const ALIASES: &[(&str, StatKind)] = &[
    ("pts", StatKind::Points),
    ("rebs", StatKind::Rebounds),
    ("reb", StatKind::Rebounds),
    ("asts", StatKind::Assists),
    ("ast", StatKind::Assists),
    ("Threes", StatKind::ThreesMade),
    ("Threes Made", StatKind::ThreesMade),
    ("Three Pointers Made", StatKind::ThreesMade),
    ("3-PT Made", StatKind::ThreesMade),
    ("stl", StatKind::Steals),
    ("Blocked Shots", StatKind::Blocks),
    ("blk", StatKind::Blocks),
    ("tov", StatKind::Turnovers),
    ("to", StatKind::Turnovers),
    ("Fantasy Points", StatKind::FantasyScore),
    ("Stls+Blks", StatKind::StealsBlocks),
    ("Blks+Stls", StatKind::StealsBlocks),
    ("sb", StatKind::StealsBlocks),
    ("Two Pointers Attempted", StatKind::TwoPointAttempts),
    ("Three Pointers Attempted", StatKind::ThreePointAttempts),
    ("FG Attempted", StatKind::FieldGoalAttempts),
    ("dreb", StatKind::DefensiveRebounds),
    ("oreb", StatKind::OffensiveRebounds),
    ("pr", StatKind::PtsRebs),
    ("pa", StatKind::PtsAsts),
    ("ra", StatKind::RebsAsts),
    ("PRA", StatKind::PtsRebsAsts),
];

/// Lowercase, `_` read as `+`, whitespace dropped.
fn alias_key(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '_' { '+' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Label lookup table.
#[derive(Debug, Clone)]
pub struct StatResolver {
    aliases: HashMap<String, StatKind>,
}

impl Default for StatResolver {
    fn default() -> Self {
        let mut aliases = HashMap::new();
        for kind in StatKind::ALL {
            aliases.insert(alias_key(kind.label()), kind);
        }
        for (alias, kind) in ALIASES {
            aliases.insert(alias_key(alias), *kind);
        }
        Self { aliases }
    }
}

impl StatResolver {
    /// Register an extra spelling.
    pub fn with_alias(mut self, alias: &str, kind: StatKind) -> Self {
        self.aliases.insert(alias_key(alias), kind);
        self
    }

    pub fn resolve(&self, label: &str) -> Option<StatKind> {
        self.aliases.get(&alias_key(label)).copied()
    }

    /// Columns combined for `label`, or `None` for an unknown label.
    pub fn resolve_columns(&self, label: &str) -> Option<Vec<StatCode>> {
        self.resolve(label).map(|kind| kind.mapping().columns())
    }
}
