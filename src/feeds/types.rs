//! Prop-line feed decoding.
//!
//! Feeds arrive in several envelopes and with several spellings of each field.
//! Everything is normalized here into [`PropLine`]; the engine never sees raw
//! feed JSON.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

use crate::engine::PropLine;
use crate::error::{PropsError, Result};

#[cfg(test)]
mod tests;

const NAME_KEYS: &[&str] = &["Name", "name", "Player", "player", "player_name"];
const STAT_KEYS: &[&str] = &["Stat", "stat", "Prop", "prop", "stat_type"];
const LINE_KEYS: &[&str] = &["Line", "line", "Value", "value"];
const TEAM_KEYS: &[&str] = &["Team", "team"];
const OPPONENT_KEYS: &[&str] = &["Versus", "versus", "Opponent", "opponent"];
const OVER_KEYS: &[&str] = &["overPrice", "over_price", "Over"];
const UNDER_KEYS: &[&str] = &["underPrice", "under_price", "Under"];

/// Summary keys holding the line inside a nested projection, in priority order.
const SUMMARY_LINE_KEYS: &[&str] = &["manualOU", "line", "value"];

/// Accepted envelopes, tried in order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PropFeed {
    List(Vec<Value>),
    Lines { lines: Vec<Value> },
    Data { data: Vec<Value> },
    Keyed(Map<String, Value>),
}

impl PropFeed {
    /// Entries of the feed, whatever the envelope.
    pub fn into_entries(self) -> Vec<Value> {
        match self {
            PropFeed::List(entries) => entries,
            PropFeed::Lines { lines } => lines,
            PropFeed::Data { data } => data,
            PropFeed::Keyed(map) => map.into_iter().map(|(_, v)| v).collect(),
        }
    }
}

/// Number, or a string holding one.
pub fn value_as_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// First alias key present with a usable value.
fn pick<'a, T>(
    record: &'a Map<String, Value>,
    keys: &[&str],
    convert: impl Fn(&'a Value) -> Option<T>,
) -> Option<T> {
    keys.iter()
        .filter_map(|k| record.get(*k))
        .find_map(convert)
}

fn base_line(record: &Map<String, Value>) -> PropLine {
    PropLine {
        player_name: pick(record, NAME_KEYS, value_as_string),
        team: pick(record, TEAM_KEYS, value_as_string),
        opponent: pick(record, OPPONENT_KEYS, value_as_string),
        ..PropLine::default()
    }
}

/// One feed entry to zero or more lines.
///
/// Flat records produce one line. Records with a `projection` object produce
/// one line per stat key holding an object.
pub fn decode_entry(entry: &Value) -> Vec<PropLine> {
    let Some(record) = entry.as_object() else {
        return Vec::new();
    };

    if let Some(Value::Object(projection)) = record.get("projection") {
        let base = base_line(record);
        return projection
            .iter()
            .filter_map(|(stat_key, stat)| {
                let stat = stat.as_object()?;
                let summary = stat.get("summary").and_then(Value::as_object);
                let mut line = base.clone();
                line.stat_label = Some(stat_key.clone());
                if let Some(summary) = summary {
                    line.line_value = pick(summary, SUMMARY_LINE_KEYS, value_as_f64);
                    line.over_price = pick(summary, OVER_KEYS, value_as_f64);
                    line.under_price = pick(summary, UNDER_KEYS, value_as_f64);
                }
                Some(line)
            })
            .collect();
    }

    let mut line = base_line(record);
    line.stat_label = pick(record, STAT_KEYS, value_as_string);
    line.line_value = pick(record, LINE_KEYS, value_as_f64);
    line.over_price = pick(record, OVER_KEYS, value_as_f64);
    line.under_price = pick(record, UNDER_KEYS, value_as_f64);
    vec![line]
}

/// Decode any accepted feed shape into canonical lines.
pub fn decode_prop_feed(raw: Value) -> Result<Vec<PropLine>> {
    let feed: PropFeed = serde_json::from_value(raw).map_err(|_| PropsError::UnrecognizedFeed {
        feed: "prop line".to_string(),
    })?;

    let entries = feed.into_entries();
    let lines: Vec<PropLine> = entries.iter().flat_map(decode_entry).collect();
    debug!(
        entries = entries.len(),
        lines = lines.len(),
        "decoded prop feed"
    );
    Ok(lines)
}

pub fn load_prop_lines(path: &Path) -> Result<Vec<PropLine>> {
    let text = std::fs::read_to_string(path)?;
    let raw: Value = serde_json::from_str(&text)?;
    decode_prop_feed(raw)
}
