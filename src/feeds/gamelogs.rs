//! Game-log table decoding.
//!
//! Three sources share one tabular shape: a CSV export, a JSON array of row
//! objects and the stats API's `resultSets` payload. Each is read into a
//! [`GameLogTable`] of optional string cells, then converted to
//! [`GameRecord`]s with one column index.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::cli::types::PlayerId;
use crate::engine::{GameRecord, StatCode};
use crate::error::{PropsError, Result};

const NAME_HEADERS: &[&str] = &["PLAYER NAME", "PLAYER_NAME", "PLAYER"];
const DATE_HEADERS: &[&str] = &["GAME DATE", "GAME_DATE"];
const TEAM_HEADERS: &[&str] = &["TEAM", "TEAM_ABBREVIATION"];
const ID_HEADERS: &[&str] = &["PLAYER_ID", "PLAYER ID"];
const MATCHUP_HEADERS: &[&str] = &["MATCHUP", "MATCH UP"];

/// Header row plus string cells; `None` for null cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameLogTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

/// Decoded records plus the number of rows that could not be used.
#[derive(Debug, Clone, Default)]
pub struct GameLogBatch {
    pub records: Vec<GameRecord>,
    pub rejected: usize,
}

#[derive(Debug, Deserialize)]
struct ResultSet {
    headers: Vec<String>,
    #[serde(rename = "rowSet")]
    row_set: Vec<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GameLogJson {
    ResultSets {
        #[serde(rename = "resultSets")]
        result_sets: Vec<ResultSet>,
    },
    Records(Vec<Map<String, Value>>),
}

fn cell_from_json(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl GameLogTable {
    pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = rdr.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            match result {
                Ok(record) => rows.push(record.iter().map(|c| Some(c.to_string())).collect()),
                Err(e) => warn!(row = i + 2, error = %e, "skipping malformed game log row"),
            }
        }

        Ok(Self { headers, rows })
    }

    /// `resultSets` payload or an array of row objects.
    pub fn from_json(raw: Value) -> Result<Self> {
        let parsed: GameLogJson =
            serde_json::from_value(raw).map_err(|_| PropsError::UnrecognizedFeed {
                feed: "game log".to_string(),
            })?;

        match parsed {
            GameLogJson::ResultSets { result_sets } => {
                let set = result_sets
                    .into_iter()
                    .next()
                    .ok_or_else(|| PropsError::UnrecognizedFeed {
                        feed: "game log".to_string(),
                    })?;
                let rows = set
                    .row_set
                    .iter()
                    .map(|row| row.iter().map(cell_from_json).collect())
                    .collect();
                Ok(Self {
                    headers: set.headers,
                    rows,
                })
            }
            GameLogJson::Records(records) => {
                let mut headers: Vec<String> = Vec::new();
                for record in &records {
                    for key in record.keys() {
                        if !headers.iter().any(|h| h == key) {
                            headers.push(key.clone());
                        }
                    }
                }
                let rows = records
                    .iter()
                    .map(|record| {
                        headers
                            .iter()
                            .map(|h| record.get(h).and_then(cell_from_json))
                            .collect()
                    })
                    .collect();
                Ok(Self { headers, rows })
            }
        }
    }

    /// Convert rows into records. Rows without a name or a readable date are
    /// rejected and counted.
    pub fn into_batch(self) -> GameLogBatch {
        let index = ColumnIndex::new(&self.headers);
        let mut batch = GameLogBatch::default();

        for row in &self.rows {
            match index.record(row) {
                Some(record) => batch.records.push(record),
                None => batch.rejected += 1,
            }
        }

        if batch.rejected > 0 {
            warn!(
                rejected = batch.rejected,
                "game log rows without player name or date"
            );
        }
        debug!(records = batch.records.len(), "decoded game log table");
        batch
    }
}

struct ColumnIndex {
    name: Option<usize>,
    date: Option<usize>,
    team: Option<usize>,
    id: Option<usize>,
    matchup: Option<usize>,
    stats: Vec<(usize, StatCode)>,
}

impl ColumnIndex {
    fn new(headers: &[String]) -> Self {
        let normalized: Vec<String> = headers
            .iter()
            .map(|h| h.trim().to_ascii_uppercase())
            .collect();
        let find = |names: &[&str]| {
            names
                .iter()
                .find_map(|n| normalized.iter().position(|h| h.as_str() == *n))
        };

        // First column wins when both spellings of a stat are present.
        let mut seen: HashMap<StatCode, usize> = HashMap::new();
        for (i, header) in normalized.iter().enumerate() {
            if let Some(code) = StatCode::from_column(header) {
                seen.entry(code).or_insert(i);
            }
        }
        let mut stats: Vec<(usize, StatCode)> = seen.into_iter().map(|(c, i)| (i, c)).collect();
        stats.sort();

        Self {
            name: find(NAME_HEADERS),
            date: find(DATE_HEADERS),
            team: find(TEAM_HEADERS),
            id: find(ID_HEADERS),
            matchup: find(MATCHUP_HEADERS),
            stats,
        }
    }

    fn cell<'r>(row: &'r [Option<String>], idx: Option<usize>) -> Option<&'r str> {
        let cell = row.get(idx?)?.as_deref()?.trim();
        (!cell.is_empty() && cell != "-").then_some(cell)
    }

    fn record(&self, row: &[Option<String>]) -> Option<GameRecord> {
        let name = Self::cell(row, self.name)?;
        let date = parse_game_date(Self::cell(row, self.date)?)?;

        let mut record = GameRecord::new(name, date);
        record.team = Self::cell(row, self.team).map(str::to_string);
        record.matchup = Self::cell(row, self.matchup).map(str::to_string);
        record.player_id = Self::cell(row, self.id).and_then(|s| s.parse::<PlayerId>().ok());

        for (idx, code) in &self.stats {
            let value = Self::cell(row, Some(*idx)).and_then(|s| {
                if *code == StatCode::Min {
                    parse_minutes(s)
                } else {
                    parse_number(s)
                }
            });
            if let Some(value) = value {
                record = record.with_stat(*code, value);
            }
        }
        Some(record)
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `"34"`, `"33.5"` or `"33:30"`.
fn parse_minutes(s: &str) -> Option<f64> {
    match s.split_once(':') {
        Some((m, sec)) => {
            let m = parse_number(m)?;
            let sec = parse_number(sec)?;
            Some(m + sec / 60.0)
        }
        None => parse_number(s),
    }
}

/// Calendar date from the formats the feeds use.
///
/// `YYYY-MM-DD`, ISO datetimes, `MM/DD/YYYY`, `Mon DD, YYYY` and epoch
/// milliseconds.
pub fn parse_game_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if s.len() > 10 && s.is_char_boundary(10) {
        if let Ok(d) = NaiveDate::parse_from_str(&s[..10], "%Y-%m-%d") {
            return Some(d);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%m/%d/%Y") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%b %d, %Y") {
        return Some(d);
    }
    if s.len() >= 11 && s.bytes().all(|b| b.is_ascii_digit()) {
        let ms: i64 = s.parse().ok()?;
        return DateTime::<Utc>::from_timestamp_millis(ms).map(|dt| dt.date_naive());
    }
    None
}

/// Read a game-log file, choosing the decoder by extension.
pub fn load_gamelogs(path: &Path) -> Result<GameLogBatch> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let table = if is_json {
        let text = std::fs::read_to_string(path)?;
        GameLogTable::from_json(serde_json::from_str(&text)?)?
    } else {
        GameLogTable::from_csv_reader(std::fs::File::open(path)?)?
    };
    Ok(table.into_batch())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_csv_with_missing_cells() {
        let csv = "PLAYER NAME,TEAM,GAME DATE,MATCHUP,PTS,REB,AST,MIN,3PM,FG%\n\
                   Player A,NYK,2025-11-03,NYK vs. BOS,25,-,7,34:30,3,.500\n\
                   Player A,NYK,2025-11-01,NYK @ MIA,,8,5,31,,.400\n\
                   ,NYK,2025-11-01,NYK @ MIA,10,1,1,20,0,.1\n";
        let batch = GameLogTable::from_csv_reader(csv.as_bytes())
            .unwrap()
            .into_batch();

        assert_eq!(batch.records.len(), 2);
        assert_eq!(batch.rejected, 1);

        let first = &batch.records[0];
        assert_eq!(first.game_date, ymd(2025, 11, 3));
        assert_eq!(first.stat(StatCode::Pts), Some(25.0));
        assert_eq!(first.stat(StatCode::Reb), None);
        assert_eq!(first.stat(StatCode::Min), Some(34.5));
        assert_eq!(first.matchup.as_deref(), Some("NYK vs. BOS"));

        let second = &batch.records[1];
        assert_eq!(second.stat(StatCode::Pts), None);
        assert_eq!(second.stat(StatCode::ThreesMade), None);
        assert_eq!(second.stat(StatCode::Reb), Some(8.0));
    }

    #[test]
    fn test_result_sets_payload() {
        let raw = json!({
            "resource": "leaguegamelog",
            "resultSets": [{
                "name": "LeagueGameLog",
                "headers": ["PLAYER_ID", "PLAYER_NAME", "TEAM_ABBREVIATION", "GAME_DATE", "MATCHUP", "MIN", "FG3M", "FG3A", "PTS"],
                "rowSet": [
                    [203999, "Nikola Jokić", "DEN", "2025-11-02", "DEN vs. LAL", 36, 2, 5, 31],
                    [203999, "Nikola Jokić", "DEN", "2025-10-31", "DEN @ POR", 33, null, 4, 27]
                ]
            }]
        });
        let batch = GameLogTable::from_json(raw).unwrap().into_batch();

        assert_eq!(batch.records.len(), 2);
        let game = &batch.records[0];
        assert_eq!(game.player_id, Some(PlayerId::new(203999)));
        assert_eq!(game.team.as_deref(), Some("DEN"));
        assert_eq!(game.stat(StatCode::ThreesMade), Some(2.0));
        assert_eq!(game.stat(StatCode::ThreesAttempted), Some(5.0));
        assert_eq!(batch.records[1].stat(StatCode::ThreesMade), None);
    }

    #[test]
    fn test_json_record_array() {
        let raw = json!([
            {"PLAYER": "Player A", "GAME DATE": 1730419200000_i64, "PTS": 12, "FANTASY_PTS": 30.5},
            {"PLAYER": "Player A", "GAME DATE": "2024-11-02T00:00:00", "PTS": "14", "STL": 2}
        ]);
        let batch = GameLogTable::from_json(raw).unwrap().into_batch();

        assert_eq!(batch.records.len(), 2);
        assert_eq!(batch.records[0].game_date, ymd(2024, 11, 1));
        assert_eq!(batch.records[0].stat(StatCode::Fp), Some(30.5));
        assert_eq!(batch.records[0].stat(StatCode::Stl), None);
        assert_eq!(batch.records[1].game_date, ymd(2024, 11, 2));
        assert_eq!(batch.records[1].stat(StatCode::Pts), Some(14.0));
    }

    #[test]
    fn test_first_column_wins_for_duplicate_stat() {
        let csv = "PLAYER,GAME_DATE,3PM,FG3M\nA,2025-11-01,4,9\n";
        let batch = GameLogTable::from_csv_reader(csv.as_bytes())
            .unwrap()
            .into_batch();
        assert_eq!(batch.records[0].stat(StatCode::ThreesMade), Some(4.0));
    }

    #[test]
    fn test_parse_game_date_formats() {
        let expected = ymd(2025, 11, 1);
        assert_eq!(parse_game_date("2025-11-01"), Some(expected));
        assert_eq!(parse_game_date("2025-11-01T00:00:00"), Some(expected));
        assert_eq!(parse_game_date("11/01/2025"), Some(expected));
        assert_eq!(parse_game_date("Nov 01, 2025"), Some(expected));
        assert_eq!(parse_game_date("yesterday"), None);
    }

    #[test]
    fn test_unrecognized_json() {
        assert!(matches!(
            GameLogTable::from_json(json!({"foo": 1})),
            Err(PropsError::UnrecognizedFeed { .. })
        ));
        assert!(matches!(
            GameLogTable::from_json(json!({"resultSets": []})),
            Err(PropsError::UnrecognizedFeed { .. })
        ));
    }

    #[test]
    fn test_load_gamelogs_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("logs.csv");
        std::fs::write(&csv_path, "PLAYER NAME,GAME DATE,PTS\nA,2025-11-01,10\n").unwrap();
        let json_path = dir.path().join("logs.json");
        std::fs::write(
            &json_path,
            r#"[{"PLAYER_NAME":"A","GAME_DATE":"2025-11-01","PTS":10}]"#,
        )
        .unwrap();

        let from_csv = load_gamelogs(&csv_path).unwrap();
        let from_json = load_gamelogs(&json_path).unwrap();
        assert_eq!(from_csv.records, from_json.records);
    }
}
