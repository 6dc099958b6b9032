//! Projection Engine: recency-weighted blends and combo composition.

use std::collections::HashMap;

use super::aggregate::{round_to, window_average, Window};
use super::record::GameRecord;
use super::resolver::StatKind;

/// Window weights as integer percents.
pub const RECENCY_WEIGHTS: [(Window, u32); 4] = [
    (Window::L5, 30),
    (Window::L10, 40),
    (Window::L20, 20),
    (Window::Season, 10),
];

const _: () = {
    let mut total = 0;
    let mut i = 0;
    while i < RECENCY_WEIGHTS.len() {
        total += RECENCY_WEIGHTS[i].1;
        i += 1;
    }
    assert!(total == 100, "recency weights must sum to 100");
};

/// Window means over one most-recent-first series.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowAverages {
    pub l5: f64,
    pub l10: f64,
    pub l20: f64,
    pub season: f64,
}

impl WindowAverages {
    pub fn from_series(values: &[f64]) -> Self {
        Self {
            l5: window_average(values, Window::L5),
            l10: window_average(values, Window::L10),
            l20: window_average(values, Window::L20),
            season: window_average(values, Window::Season),
        }
    }

    fn get(&self, window: Window) -> f64 {
        match window {
            Window::Last(5) => self.l5,
            Window::Last(10) => self.l10,
            Window::Last(20) => self.l20,
            _ => self.season,
        }
    }
}

/// Unrounded weighted blend of window averages.
pub fn project(averages: &WindowAverages) -> f64 {
    RECENCY_WEIGHTS
        .iter()
        .map(|(window, weight)| averages.get(*window) * f64::from(*weight))
        .sum::<f64>()
        / 100.0
}

/// Weighted projection of a most-recent-first series, rounded to 2 dp.
pub fn weighted_projection(values: &[f64]) -> f64 {
    round_to(project(&WindowAverages::from_series(values)), 2)
}

/// Weighted projection of clamped minutes, rounded to 1 dp.
pub fn expected_minutes(games: &[GameRecord]) -> f64 {
    let minutes: Vec<f64> = games.iter().filter_map(GameRecord::minutes).collect();
    round_to(project(&WindowAverages::from_series(&minutes)), 1)
}

/// Where a card's projection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionSource {
    /// Weighted projection of the stat's own series.
    Direct,
    /// Sum of base projections already recorded in the arena.
    Composed,
}

/// Base projections recorded during one pass.
///
/// Keyed by the player identity matched in the store, so a later combo line
/// spelled differently still finds its components.
#[derive(Debug, Default, Clone)]
pub struct ProjectionArena {
    base: HashMap<(String, StatKind), f64>,
}

impl ProjectionArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_base(&mut self, player: &str, kind: StatKind, projection: f64) {
        if kind.is_base() {
            self.base.insert((player.to_string(), kind), projection);
        }
    }

    pub fn base(&self, player: &str, kind: StatKind) -> Option<f64> {
        self.base.get(&(player.to_string(), kind)).copied()
    }

    /// Sum of all component projections, or `None` if any is missing.
    pub fn compose(&self, player: &str, components: &[StatKind]) -> Option<f64> {
        let mut total = 0.0;
        for kind in components {
            total += self.base(player, *kind)?;
        }
        Some(round_to(total, 2))
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }
}

/// Projection for `kind`, preferring composition for combos.
///
/// Base stats are recorded in the arena as a side effect.
pub fn project_stat(
    arena: &mut ProjectionArena,
    player: &str,
    kind: StatKind,
    series: &[f64],
) -> (f64, ProjectionSource) {
    if let Some(components) = kind.combo_components() {
        if let Some(total) = arena.compose(player, components) {
            return (total, ProjectionSource::Composed);
        }
    }

    let projection = weighted_projection(series);
    arena.record_base(player, kind, projection);
    (projection, ProjectionSource::Direct)
}
