//! Game Log Store: per-player game history, most recent game first.

use std::collections::BTreeMap;

use super::record::GameRecord;
use crate::core::names::normalize_name;

/// A player's matched history.
#[derive(Debug, Clone, Copy)]
pub struct PlayerHistory<'a> {
    /// Player identity as it appears in the game logs.
    pub name: &'a str,
    /// Sorted by game date, most recent first.
    pub games: &'a [GameRecord],
}

/// Immutable snapshot of the game logs for one refresh pass.
#[derive(Debug, Default, Clone)]
pub struct GameLogStore {
    players: BTreeMap<String, Vec<GameRecord>>,
    normalized: BTreeMap<String, String>,
    record_count: usize,
}

impl GameLogStore {
    /// Index records by player and sort each history by date descending.
    ///
    /// Records with the same date keep their input order.
    pub fn from_records(records: impl IntoIterator<Item = GameRecord>) -> Self {
        let mut players: BTreeMap<String, Vec<GameRecord>> = BTreeMap::new();
        let mut record_count = 0;
        for record in records {
            record_count += 1;
            players
                .entry(record.player_name.clone())
                .or_default()
                .push(record);
        }

        for games in players.values_mut() {
            games.sort_by(|a, b| b.game_date.cmp(&a.game_date));
        }

        // BTreeMap iteration keeps the first-wins choice deterministic when two
        // spellings normalize to the same key.
        let mut normalized = BTreeMap::new();
        for name in players.keys() {
            normalized
                .entry(normalize_name(name))
                .or_insert_with(|| name.clone());
        }

        Self {
            players,
            normalized,
            record_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Total number of game records.
    pub fn len(&self) -> usize {
        self.record_count
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn player_names(&self) -> impl Iterator<Item = &str> {
        self.players.keys().map(String::as_str)
    }

    /// Exact name match first, then diacritic/case-insensitive match.
    pub fn lookup(&self, name: &str) -> Option<PlayerHistory<'_>> {
        if let Some((key, games)) = self.players.get_key_value(name) {
            return Some(PlayerHistory { name: key, games });
        }
        let canonical = self.normalized.get(&normalize_name(name))?;
        self.players
            .get_key_value(canonical)
            .map(|(key, games)| PlayerHistory { name: key, games })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::record::StatCode;
    use chrono::NaiveDate;

    fn game(name: &str, day: u32, pts: f64) -> GameRecord {
        GameRecord::new(name, NaiveDate::from_ymd_opt(2025, 11, day).unwrap())
            .with_stat(StatCode::Pts, pts)
    }

    #[test]
    fn test_histories_sorted_most_recent_first() {
        let store = GameLogStore::from_records(vec![
            game("Player A", 3, 10.0),
            game("Player A", 9, 30.0),
            game("Player A", 5, 20.0),
        ]);
        let history = store.lookup("Player A").unwrap();
        let pts: Vec<_> = history
            .games
            .iter()
            .map(|g| g.stat(StatCode::Pts).unwrap())
            .collect();
        assert_eq!(pts, vec![30.0, 20.0, 10.0]);
    }

    #[test]
    fn test_lookup_exact_then_normalized() {
        let store = GameLogStore::from_records(vec![
            game("Nikola Jokić", 1, 30.0),
            game("Nikola Jokic", 2, 25.0),
            game("Luka Dončić", 1, 35.0),
        ]);

        // Exact spelling wins even though both normalize identically.
        assert_eq!(store.lookup("Nikola Jokic").unwrap().name, "Nikola Jokic");
        assert_eq!(store.lookup("Nikola Jokić").unwrap().name, "Nikola Jokić");

        let luka = store.lookup("LUKA DONCIC").unwrap();
        assert_eq!(luka.name, "Luka Dončić");
        assert_eq!(luka.games.len(), 1);

        assert!(store.lookup("Nobody").is_none());
    }

    #[test]
    fn test_counts() {
        let store = GameLogStore::from_records(vec![
            game("A", 1, 1.0),
            game("A", 2, 1.0),
            game("B", 1, 1.0),
        ]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.player_count(), 2);
        assert!(!store.is_empty());
        assert!(GameLogStore::default().is_empty());
        assert_eq!(store.player_names().collect::<Vec<_>>(), vec!["A", "B"]);
    }
}
