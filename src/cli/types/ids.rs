//! ID types for NBA players.

use crate::error::{PropsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for stats-provider player IDs.
///
/// Game logs carry a numeric `PLAYER_ID` column when they come from the stats
/// API; scraped tables often do not, so the id is optional on records and cards.
///
/// # Examples
///
/// ```rust
/// use nba_props::PlayerId;
///
/// let id = PlayerId::new(1628973);
/// assert_eq!(id.as_u64(), 1628973);
/// assert_eq!(id.to_string(), "1628973");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = PropsError;

    /// Accepts `"1628973"` as well as float renderings such as `"1628973.0"`
    /// that JSON exports of the game log produce.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix(".0").unwrap_or(trimmed);
        Ok(Self(digits.parse()?))
    }
}
