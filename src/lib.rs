//! NBA Prop Card Library
//!
//! Joins player prop lines against historical game logs and produces ranked
//! "player cards": multi-window hit rates, a recency-weighted projection,
//! expected minutes and a ranking score.
//!
//! ## Layout
//!
//! - **`engine`**: the projection engine (game log store, stat resolver,
//!   windowed aggregator, projection, card assembly, refresh pass)
//! - **`feeds`**: decoding of prop-line, game-log and odds feeds, plus HTTP fetchers
//! - **`storage`**: SQLite snapshot of game logs and history of card runs
//! - **`commands`**: CLI command handlers
//!
//! ## Quick Start
//!
//! ```rust
//! use nba_props::engine::{GameLogStore, PropLine, RatioScorer, RefreshPass, StatResolver};
//!
//! # fn example(records: Vec<nba_props::engine::GameRecord>) -> nba_props::Result<()> {
//! let store = GameLogStore::from_records(records);
//! let resolver = StatResolver::default();
//! let lines = vec![PropLine::new("Jalen Brunson", "Points", 26.5)];
//!
//! let outcome = RefreshPass::new(&store, &resolver, &RatioScorer).run(&lines)?;
//! println!("{} cards, {} skipped", outcome.cards.len(), outcome.skipped.total());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Input and output paths can be set once instead of on every command:
//! ```bash
//! export PP_LINES_PATH=data/prop_lines.json
//! export GAMELOGS_PATH=data/gamelogs.csv
//! export OUTPUT_PATH=site/player_cards.json
//! export NBA_PROPS_DB=data/props.db
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod engine;
pub mod error;
pub mod feeds;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{PlayerId, ScoreFormula, Season};
pub use engine::{GameRecord, PlayerCard, StatCode, StatKind};
pub use error::{PropsError, Result};

pub const LINES_PATH_ENV_VAR: &str = "PP_LINES_PATH";
pub const GAMELOGS_PATH_ENV_VAR: &str = "GAMELOGS_PATH";
pub const OUTPUT_PATH_ENV_VAR: &str = "OUTPUT_PATH";
pub const SPREADS_PATH_ENV_VAR: &str = "SPREADS_PATH";
pub const FEED_URL_ENV_VAR: &str = "PROPS_FEED_URL";
pub const FEED_TOKEN_ENV_VAR: &str = "PROPS_FEED_TOKEN";
pub const DB_PATH_ENV_VAR: &str = "NBA_PROPS_DB";
