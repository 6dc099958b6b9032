//! Windowed Aggregator: trailing-window hit counts and averages.
//!
//! Inputs are most-recent-first; sorting belongs to the caller.

use std::fmt;

/// Number of recent values kept for charting.
pub const CHART_LENGTH: usize = 10;

/// A trailing slice of a player's games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Window {
    Last(usize),
    Season,
}

impl Window {
    pub const L5: Window = Window::Last(5);
    pub const L10: Window = Window::Last(10);
    pub const L20: Window = Window::Last(20);
    pub const ALL: [Window; 4] = [Window::L5, Window::L10, Window::L20, Window::Season];

    /// The first `min(n, len)` values.
    pub fn slice<'a>(&self, values: &'a [f64]) -> &'a [f64] {
        match self {
            Window::Last(n) => &values[..(*n).min(values.len())],
            Window::Season => values,
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Window::Last(n) => write!(f, "L{}", n),
            Window::Season => f.write_str("Season"),
        }
    }
}

/// Hits, denominator and mean for one window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowStats {
    pub hits: usize,
    pub games: usize,
    pub average: f64,
}

impl WindowStats {
    /// `round(hits / games * 100, 1)`, 0 for an empty window.
    pub fn pct(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        round_to(self.hits as f64 / self.games as f64 * 100.0, 1)
    }

    /// `"hits/games"`
    pub fn record(&self) -> String {
        format!("{}/{}", self.hits, self.games)
    }
}

/// Per-window statistics plus the charting series.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub l5: WindowStats,
    pub l10: WindowStats,
    pub l20: WindowStats,
    pub season: WindowStats,
    /// Up to ten most recent values, oldest first.
    pub last_10_values: Vec<f64>,
}

impl Aggregate {
    pub fn window(&self, window: Window) -> WindowStats {
        match window {
            Window::Last(5) => self.l5,
            Window::Last(10) => self.l10,
            Window::Last(20) => self.l20,
            Window::Season => self.season,
            Window::Last(_) => self.season,
        }
    }
}

/// Mean of the window's slice; 0 when empty.
pub fn window_average(values: &[f64], window: Window) -> f64 {
    let slice = window.slice(values);
    if slice.is_empty() {
        return 0.0;
    }
    slice.iter().sum::<f64>() / slice.len() as f64
}

/// Median of the window's slice; 0 when empty.
pub fn window_median(values: &[f64], window: Window) -> f64 {
    let mut slice = window.slice(values).to_vec();
    if slice.is_empty() {
        return 0.0;
    }
    slice.sort_by(f64::total_cmp);
    let mid = slice.len() / 2;
    if slice.len() % 2 == 0 {
        (slice[mid - 1] + slice[mid]) / 2.0
    } else {
        slice[mid]
    }
}

/// Hit = strictly greater than the line.
pub fn window_stats(values: &[f64], window: Window, line: f64) -> WindowStats {
    let slice = window.slice(values);
    WindowStats {
        hits: slice.iter().filter(|v| **v > line).count(),
        games: slice.len(),
        average: window_average(values, window),
    }
}

pub fn aggregate(values: &[f64], line: f64) -> Aggregate {
    let mut last_10_values = Window::L10.slice(values).to_vec();
    last_10_values.reverse();

    Aggregate {
        l5: window_stats(values, Window::L5, line),
        l10: window_stats(values, Window::L10, line),
        l20: window_stats(values, Window::L20, line),
        season: window_stats(values, Window::Season, line),
        last_10_values,
    }
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
