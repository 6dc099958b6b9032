//! Player card projection engine.
//!
//! Pure, synchronous computation over in-memory inputs. Feed decoding, HTTP
//! and storage live in [`crate::feeds`] and [`crate::storage`]; this module
//! only ever sees canonical [`PropLine`] and [`GameRecord`] values.
//!
//! - [`store`]: per-player histories, most recent game first
//! - [`resolver`]: prop labels to stat kinds and per-game values
//! - [`aggregate`]: trailing-window hit rates and averages
//! - [`projection`]: recency-weighted projections and combo composition
//! - [`score`]: pluggable card scoring
//! - [`card`]: per-line card assembly
//! - [`pass`]: a full refresh over one feed

pub mod aggregate;
pub mod card;
pub mod pass;
pub mod projection;
pub mod record;
pub mod resolver;
pub mod score;
pub mod store;

pub use aggregate::{aggregate, Aggregate, Window, WindowStats};
pub use card::{CardAssembler, PlayerCard, SkipReason, TeamSpreads, MIN_GAMES};
pub use pass::{PassOutcome, RefreshPass, SkipCounts};
pub use projection::{weighted_projection, ProjectionArena};
pub use record::{GameRecord, PropLine, StatCode};
pub use resolver::{StatKind, StatMapping, StatResolver};
pub use score::{BlendScorer, CardScorer, RatioScorer, ScoreInput};
pub use store::{GameLogStore, PlayerHistory};
