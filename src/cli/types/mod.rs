//! Type-safe wrappers and enums for prop card data.

pub mod ids;
pub mod scoring;
pub mod time;

pub use ids::PlayerId;
pub use scoring::ScoreFormula;
pub use time::Season;
