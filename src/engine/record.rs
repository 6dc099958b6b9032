//! Canonical input records for the engine.
//!
//! Feed decoders produce these shapes once at ingestion; nothing downstream
//! looks at raw feed keys again.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::cli::types::PlayerId;

/// Upper bound applied to minutes before they feed the minutes projection.
pub const MAX_MINUTES: f64 = 60.0;

/// Box-score column codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatCode {
    #[serde(rename = "PTS")]
    Pts,
    #[serde(rename = "REB")]
    Reb,
    #[serde(rename = "AST")]
    Ast,
    #[serde(rename = "MIN")]
    Min,
    #[serde(rename = "3PM")]
    ThreesMade,
    #[serde(rename = "3PA")]
    ThreesAttempted,
    #[serde(rename = "FGM")]
    Fgm,
    #[serde(rename = "FGA")]
    Fga,
    #[serde(rename = "FTM")]
    Ftm,
    #[serde(rename = "FTA")]
    Fta,
    #[serde(rename = "OREB")]
    Oreb,
    #[serde(rename = "DREB")]
    Dreb,
    #[serde(rename = "STL")]
    Stl,
    #[serde(rename = "BLK")]
    Blk,
    #[serde(rename = "TOV")]
    Tov,
    #[serde(rename = "FP")]
    Fp,
}

impl StatCode {
    pub const ALL: [StatCode; 16] = [
        StatCode::Pts,
        StatCode::Reb,
        StatCode::Ast,
        StatCode::Min,
        StatCode::ThreesMade,
        StatCode::ThreesAttempted,
        StatCode::Fgm,
        StatCode::Fga,
        StatCode::Ftm,
        StatCode::Fta,
        StatCode::Oreb,
        StatCode::Dreb,
        StatCode::Stl,
        StatCode::Blk,
        StatCode::Tov,
        StatCode::Fp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatCode::Pts => "PTS",
            StatCode::Reb => "REB",
            StatCode::Ast => "AST",
            StatCode::Min => "MIN",
            StatCode::ThreesMade => "3PM",
            StatCode::ThreesAttempted => "3PA",
            StatCode::Fgm => "FGM",
            StatCode::Fga => "FGA",
            StatCode::Ftm => "FTM",
            StatCode::Fta => "FTA",
            StatCode::Oreb => "OREB",
            StatCode::Dreb => "DREB",
            StatCode::Stl => "STL",
            StatCode::Blk => "BLK",
            StatCode::Tov => "TOV",
            StatCode::Fp => "FP",
        }
    }

    /// Map a game-log column header onto a stat code.
    ///
    /// Accepts the table headers (`3PM`) and the stats-API names (`FG3M`).
    pub fn from_column(header: &str) -> Option<StatCode> {
        let code = match header.trim().to_ascii_uppercase().as_str() {
            "PTS" => StatCode::Pts,
            "REB" => StatCode::Reb,
            "AST" => StatCode::Ast,
            "MIN" => StatCode::Min,
            "3PM" | "FG3M" => StatCode::ThreesMade,
            "3PA" | "FG3A" => StatCode::ThreesAttempted,
            "FGM" => StatCode::Fgm,
            "FGA" => StatCode::Fga,
            "FTM" => StatCode::Ftm,
            "FTA" => StatCode::Fta,
            "OREB" => StatCode::Oreb,
            "DREB" => StatCode::Dreb,
            "STL" => StatCode::Stl,
            "BLK" => StatCode::Blk,
            "TOV" | "TO" => StatCode::Tov,
            "FP" | "FANTASY_PTS" | "NBA_FANTASY_PTS" => StatCode::Fp,
            _ => return None,
        };
        Some(code)
    }
}

impl fmt::Display for StatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One player's box-score line for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub player_name: String,
    pub player_id: Option<PlayerId>,
    pub team: Option<String>,
    pub matchup: Option<String>,
    pub game_date: NaiveDate,
    /// Only numeric cells are present; missing or malformed cells are absent.
    pub stats: BTreeMap<StatCode, f64>,
}

impl GameRecord {
    pub fn new(player_name: impl Into<String>, game_date: NaiveDate) -> Self {
        Self {
            player_name: player_name.into(),
            player_id: None,
            team: None,
            matchup: None,
            game_date,
            stats: BTreeMap::new(),
        }
    }

    /// Builder-style stat insert; non-finite values are dropped.
    pub fn with_stat(mut self, code: StatCode, value: f64) -> Self {
        if value.is_finite() {
            self.stats.insert(code, value);
        }
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn with_player_id(mut self, id: PlayerId) -> Self {
        self.player_id = Some(id);
        self
    }

    pub fn stat(&self, code: StatCode) -> Option<f64> {
        self.stats.get(&code).copied()
    }

    /// Minutes played, clamped to `[0, MAX_MINUTES]`.
    pub fn minutes(&self) -> Option<f64> {
        self.stat(StatCode::Min).map(|m| m.clamp(0.0, MAX_MINUTES))
    }
}

/// One market line for one player, in canonical shape.
///
/// Name, stat label and line are optional because incomplete feed entries are
/// carried through to the assembler, which skips and counts them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropLine {
    pub player_name: Option<String>,
    pub team: Option<String>,
    pub stat_label: Option<String>,
    pub line_value: Option<f64>,
    pub opponent: Option<String>,
    pub over_price: Option<f64>,
    pub under_price: Option<f64>,
}

impl PropLine {
    pub fn new(player_name: impl Into<String>, stat_label: impl Into<String>, line: f64) -> Self {
        Self {
            player_name: Some(player_name.into()),
            stat_label: Some(stat_label.into()),
            line_value: Some(line),
            ..Self::default()
        }
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn with_opponent(mut self, opponent: impl Into<String>) -> Self {
        self.opponent = Some(opponent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, d).unwrap()
    }

    #[test]
    fn test_stat_code_from_column_aliases() {
        assert_eq!(StatCode::from_column("FG3M"), Some(StatCode::ThreesMade));
        assert_eq!(StatCode::from_column("3pa"), Some(StatCode::ThreesAttempted));
        assert_eq!(StatCode::from_column(" FANTASY_PTS "), Some(StatCode::Fp));
        assert_eq!(StatCode::from_column("FG%"), None);
        assert_eq!(StatCode::from_column("+/-"), None);
    }

    #[test]
    fn test_stat_code_round_trips_through_str() {
        for code in StatCode::ALL {
            assert_eq!(StatCode::from_column(code.as_str()), Some(code));
        }
    }

    #[test]
    fn test_with_stat_drops_non_finite() {
        let record = GameRecord::new("A", date(1))
            .with_stat(StatCode::Pts, f64::NAN)
            .with_stat(StatCode::Reb, 7.0);
        assert_eq!(record.stat(StatCode::Pts), None);
        assert_eq!(record.stat(StatCode::Reb), Some(7.0));
    }

    #[test]
    fn test_minutes_are_clamped() {
        let over = GameRecord::new("A", date(1)).with_stat(StatCode::Min, 75.0);
        let under = GameRecord::new("A", date(2)).with_stat(StatCode::Min, -3.0);
        let missing = GameRecord::new("A", date(3));
        assert_eq!(over.minutes(), Some(60.0));
        assert_eq!(under.minutes(), Some(0.0));
        assert_eq!(missing.minutes(), None);
    }

    #[test]
    fn test_prop_line_builder() {
        let line = PropLine::new("Player A", "Points", 20.5)
            .with_team("NYK")
            .with_opponent("BOS");
        assert_eq!(line.player_name.as_deref(), Some("Player A"));
        assert_eq!(line.line_value, Some(20.5));
        assert_eq!(line.opponent.as_deref(), Some("BOS"));
        assert!(line.over_price.is_none());
    }
}
