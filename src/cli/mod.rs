//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{ScoreFormula, Season};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download the league-wide player game log from the stats API.
    FetchGamelogs {
        /// Season start year (e.g. 2025 for 2025-26).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Where to write the raw JSON (defaults to the cache directory).
        #[clap(long)]
        out: Option<PathBuf>,

        /// Also replace the stored game-log snapshot with the fetched rows.
        #[clap(long)]
        ingest: bool,
    },

    /// Download the prop-line feed.
    ///
    /// Sends `PROPS_FEED_TOKEN` as a bearer token when set.
    FetchLines {
        /// Feed URL (or set `PROPS_FEED_URL`).
        #[clap(long)]
        url: Option<String>,

        /// Output path (or set `PP_LINES_PATH`).
        #[clap(long)]
        out: Option<PathBuf>,
    },

    /// Load a game-log file (CSV or JSON) into the local database.
    IngestGamelogs {
        /// Game-log file (or set `GAMELOGS_PATH`).
        #[clap(long, short)]
        gamelogs: Option<PathBuf>,
    },

    /// Build player cards for every prop line and write them to disk.
    ///
    /// Uses the stored game-log snapshot when no game-log file is found.
    BuildCards {
        /// Prop-line feed JSON (or set `PP_LINES_PATH`).
        #[clap(long, short)]
        lines: Option<PathBuf>,

        /// Game-log file (or set `GAMELOGS_PATH`).
        #[clap(long, short)]
        gamelogs: Option<PathBuf>,

        /// Odds snapshot with team spreads (or set `SPREADS_PATH`).
        #[clap(long)]
        spreads: Option<PathBuf>,

        /// Card output path (or set `OUTPUT_PATH`).
        #[clap(long, short)]
        output: Option<PathBuf>,

        /// Ranking score applied to every card.
        #[clap(long, value_enum, default_value_t = ScoreFormula::default())]
        score: ScoreFormula,

        /// Print the cards as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Do not open the database: no snapshot fallback, no run history.
        #[clap(long)]
        no_store: bool,
    },

    /// Show cards from the most recent stored run.
    ShowCards {
        /// Maximum number of cards.
        #[clap(long, short = 'n')]
        limit: Option<usize>,

        /// Only cards for this prop (aliases accepted, e.g. `PRA`).
        #[clap(long, short)]
        prop: Option<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

/// NBA player prop cards: hit rates, projections and scores.
#[derive(Debug, Parser)]
#[clap(name = "nba-props", version, about)]
pub struct NbaProps {
    /// Debug logging (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_cards() {
        let cli = NbaProps::try_parse_from([
            "nba-props",
            "build-cards",
            "--lines",
            "l.json",
            "--score",
            "blend",
            "--no-store",
        ])
        .unwrap();

        match cli.command {
            Commands::BuildCards {
                lines,
                score,
                no_store,
                json,
                ..
            } => {
                assert_eq!(lines, Some(PathBuf::from("l.json")));
                assert_eq!(score, ScoreFormula::Blend);
                assert!(no_store);
                assert!(!json);
            }
            _ => panic!("Expected BuildCards"),
        }
    }

    #[test]
    fn test_parse_fetch_gamelogs_season() {
        let cli =
            NbaProps::try_parse_from(["nba-props", "-v", "fetch-gamelogs", "--season", "2024-25"])
                .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::FetchGamelogs { season, ingest, .. } => {
                assert_eq!(season, Season::new(2024));
                assert!(!ingest);
            }
            _ => panic!("Expected FetchGamelogs"),
        }
    }

    #[test]
    fn test_parse_show_cards_defaults() {
        let cli = NbaProps::try_parse_from(["nba-props", "show-cards", "-n", "5"]).unwrap();
        match cli.command {
            Commands::ShowCards { limit, prop, json } => {
                assert_eq!(limit, Some(5));
                assert!(prop.is_none());
                assert!(!json);
            }
            _ => panic!("Expected ShowCards"),
        }
    }

    #[test]
    fn test_rejects_unknown_score() {
        assert!(
            NbaProps::try_parse_from(["nba-props", "build-cards", "--score", "median"]).is_err()
        );
    }
}
