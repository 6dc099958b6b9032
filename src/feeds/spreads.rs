//! Team point spreads from an odds snapshot.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::engine::TeamSpreads;
use crate::error::Result;

/// Full franchise name to the abbreviation used in game logs.
pub const TEAM_NAME_TO_ABBR: [(&str, &str); 30] = [
    ("Atlanta Hawks", "ATL"),
    ("Boston Celtics", "BOS"),
    ("Brooklyn Nets", "BKN"),
    ("Charlotte Hornets", "CHA"),
    ("Chicago Bulls", "CHI"),
    ("Cleveland Cavaliers", "CLE"),
    ("Dallas Mavericks", "DAL"),
    ("Denver Nuggets", "DEN"),
    ("Detroit Pistons", "DET"),
    ("Golden State Warriors", "GSW"),
    ("Houston Rockets", "HOU"),
    ("Indiana Pacers", "IND"),
    ("Los Angeles Clippers", "LAC"),
    ("Los Angeles Lakers", "LAL"),
    ("Memphis Grizzlies", "MEM"),
    ("Miami Heat", "MIA"),
    ("Milwaukee Bucks", "MIL"),
    ("Minnesota Timberwolves", "MIN"),
    ("New Orleans Pelicans", "NOP"),
    ("New York Knicks", "NYK"),
    ("Oklahoma City Thunder", "OKC"),
    ("Orlando Magic", "ORL"),
    ("Philadelphia 76ers", "PHI"),
    ("Phoenix Suns", "PHX"),
    ("Portland Trail Blazers", "POR"),
    ("Sacramento Kings", "SAC"),
    ("San Antonio Spurs", "SAS"),
    ("Toronto Raptors", "TOR"),
    ("Utah Jazz", "UTA"),
    ("Washington Wizards", "WAS"),
];

/// Abbreviation for a full team name; unknown names pass through unchanged.
pub fn team_abbreviation(full_name: &str) -> &str {
    TEAM_NAME_TO_ABBR
        .iter()
        .find(|(name, _)| *name == full_name)
        .map(|(_, abbr)| *abbr)
        .unwrap_or(full_name)
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OddsSnapshot {
    #[serde(default)]
    pub events: Vec<OddsEvent>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OddsEvent {
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
    #[serde(default)]
    pub best_spread: BestSpread,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BestSpread {
    #[serde(default)]
    pub home: Option<SpreadQuote>,
    #[serde(default)]
    pub away: Option<SpreadQuote>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpreadQuote {
    #[serde(default)]
    pub point: Option<f64>,
}

impl OddsSnapshot {
    /// Later events overwrite earlier ones for the same team.
    pub fn team_spreads(&self) -> TeamSpreads {
        let mut spreads = TeamSpreads::new();
        for event in &self.events {
            let sides = [
                (&event.home_team, &event.best_spread.home),
                (&event.away_team, &event.best_spread.away),
            ];
            for (team, quote) in sides {
                let point = quote.as_ref().and_then(|q| q.point);
                if let (Some(team), Some(point)) = (team, point) {
                    spreads.insert(team_abbreviation(team).to_string(), point);
                }
            }
        }
        spreads
    }
}

pub fn decode_team_spreads(raw: &str) -> Result<TeamSpreads> {
    let snapshot: OddsSnapshot = serde_json::from_str(raw)?;
    Ok(snapshot.team_spreads())
}

pub fn load_team_spreads(path: &Path) -> Result<TeamSpreads> {
    let text = std::fs::read_to_string(path)?;
    decode_team_spreads(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_spreads_from_snapshot() {
        let raw = r#"{
            "generated_at": "2025-11-01T15:00:00Z",
            "events": [
                {"home_team": "New York Knicks", "away_team": "Boston Celtics",
                 "best_spread": {"home": {"point": -4.5, "price": -110}, "away": {"point": 4.5}}},
                {"home_team": "Seattle SuperSonics", "away_team": "Utah Jazz",
                 "best_spread": {"home": {"point": 1.0}, "away": null}},
                {"home_team": "Miami Heat", "away_team": "Orlando Magic"}
            ]
        }"#;
        let spreads = decode_team_spreads(raw).unwrap();

        assert_eq!(spreads.get("NYK"), Some(&-4.5));
        assert_eq!(spreads.get("BOS"), Some(&4.5));
        assert_eq!(spreads.get("Seattle SuperSonics"), Some(&1.0));
        assert!(!spreads.contains_key("UTA"));
        assert!(!spreads.contains_key("MIA"));
        assert_eq!(spreads.len(), 3);
    }

    #[test]
    fn test_team_abbreviation() {
        assert_eq!(team_abbreviation("Golden State Warriors"), "GSW");
        assert_eq!(team_abbreviation("Philadelphia 76ers"), "PHI");
        assert_eq!(team_abbreviation("GSW"), "GSW");
    }

    #[test]
    fn test_empty_snapshot() {
        assert!(decode_team_spreads("{}").unwrap().is_empty());
        assert!(decode_team_spreads("not json").is_err());
    }
}
