//! Data models for the storage layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cli::types::ScoreFormula;
use crate::engine::SkipCounts;

/// One persisted refresh pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRun {
    pub run_id: i64,
    pub generated_at: DateTime<Utc>,
    pub score_formula: ScoreFormula,
    pub card_count: usize,
    pub skipped_count: usize,
    pub skipped: SkipCounts,
}
