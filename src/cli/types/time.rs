//! Season type for NBA schedules.

use crate::error::{PropsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for an NBA season, stored as its starting year.
///
/// Displays in the stats API's `2025-26` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(start_year: u16) -> Self {
        Self(start_year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.0, (u32::from(self.0) + 1) % 100)
    }
}

impl FromStr for Season {
    type Err = PropsError;

    /// Accepts `2025` or `2025-26`.
    fn from_str(s: &str) -> Result<Self> {
        let start = s.split('-').next().unwrap_or(s);
        Ok(Self(start.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_display() {
        assert_eq!(Season::new(2025).to_string(), "2025-26");
        assert_eq!(Season::new(2099).to_string(), "2099-00");
        assert_eq!(Season::new(u16::MAX).to_string(), "65535-36");
    }

    #[test]
    fn test_season_parse() {
        assert_eq!("2024".parse::<Season>().unwrap(), Season::new(2024));
        assert_eq!("2024-25".parse::<Season>().unwrap(), Season::new(2024));
        assert!("twenty".parse::<Season>().is_err());
    }

    #[test]
    fn test_season_round_trips_through_display() {
        let season = Season::default();
        assert_eq!(season.to_string().parse::<Season>().unwrap(), season);
    }
}
