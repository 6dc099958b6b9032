//! Feed boundary: external JSON/CSV shapes in, canonical engine records out.

pub mod gamelogs;
pub mod http;
pub mod spreads;
pub mod types;

pub use gamelogs::{load_gamelogs, GameLogBatch, GameLogTable};
pub use spreads::{load_team_spreads, OddsSnapshot};
pub use types::{decode_prop_feed, load_prop_lines};
