//! Score formula selection for CLI commands.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ranking score applied uniformly to every card of a pass.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ScoreFormula {
    /// `projection / line * 50`
    #[default]
    Ratio,
    /// L10 hit rate, average-to-line ratio and a team spread bonus
    Blend,
}

impl fmt::Display for ScoreFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScoreFormula::Ratio => "ratio",
            ScoreFormula::Blend => "blend",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ScoreFormula {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ratio" => Ok(ScoreFormula::Ratio),
            "blend" => Ok(ScoreFormula::Blend),
            other => Err(format!("unknown score formula: {}", other)),
        }
    }
}
