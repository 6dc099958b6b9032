//! Card scoring formulas.

use super::aggregate::round_to;
use crate::cli::types::ScoreFormula;

/// Everything a scorer may look at for one card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreInput {
    pub projection: f64,
    pub line: f64,
    pub l10_pct: f64,
    pub l10_average: f64,
    pub spread: Option<f64>,
}

/// A ranking score chosen once per pass.
pub trait CardScorer: Send + Sync {
    fn name(&self) -> &'static str;

    /// `None` when the formula is undefined for this input.
    fn score(&self, input: &ScoreInput) -> Option<f64>;
}

/// `projection / line * 50`
#[derive(Debug, Clone, Copy, Default)]
pub struct RatioScorer;

impl CardScorer for RatioScorer {
    fn name(&self) -> &'static str {
        "ratio"
    }

    fn score(&self, input: &ScoreInput) -> Option<f64> {
        if input.line > 0.0 {
            Some(round_to(input.projection / input.line * 50.0, 2))
        } else {
            None
        }
    }
}

/// Hit rate, average-to-line ratio and a favourite bonus from the spread.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlendScorer;

impl BlendScorer {
    fn spread_bonus(spread: Option<f64>) -> f64 {
        match spread {
            Some(s) if s < -3.0 => 20.0,
            Some(s) if s < 0.0 => 10.0,
            _ => 0.0,
        }
    }
}

impl CardScorer for BlendScorer {
    fn name(&self) -> &'static str {
        "blend"
    }

    fn score(&self, input: &ScoreInput) -> Option<f64> {
        let ratio = (input.l10_average / input.line.max(1.0)).min(1.5);
        let raw = input.l10_pct * 0.4 + ratio * 40.0 + Self::spread_bonus(input.spread);
        Some(round_to(raw, 1))
    }
}

impl ScoreFormula {
    pub fn scorer(&self) -> &'static dyn CardScorer {
        match self {
            ScoreFormula::Ratio => &RatioScorer,
            ScoreFormula::Blend => &BlendScorer,
        }
    }
}
