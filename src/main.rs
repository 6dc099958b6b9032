//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_props::{
    cli::{Commands, NbaProps},
    commands::{
        build_cards::{handle_build_cards, BuildCardsParams},
        fetch_data::{handle_fetch_gamelogs, handle_fetch_lines},
        ingest_gamelogs::handle_ingest_gamelogs,
        show_cards::{handle_show_cards, ShowCardsParams},
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = NbaProps::parse();

    let default_level = if app.verbose { "debug" } else { "info" };
    // stdout is reserved for card output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    match app.command {
        Commands::FetchGamelogs {
            season,
            out,
            ingest,
        } => handle_fetch_gamelogs(season, out, ingest).await?,

        Commands::FetchLines { url, out } => handle_fetch_lines(url, out).await?,

        Commands::IngestGamelogs { gamelogs } => handle_ingest_gamelogs(gamelogs, app.verbose)?,

        Commands::BuildCards {
            lines,
            gamelogs,
            spreads,
            output,
            score,
            json,
            no_store,
        } => handle_build_cards(BuildCardsParams {
            lines,
            gamelogs,
            spreads,
            output,
            score,
            as_json: json,
            no_store,
        })?,

        Commands::ShowCards { limit, prop, json } => handle_show_cards(ShowCardsParams {
            limit,
            prop,
            as_json: json,
        })?,
    }

    Ok(())
}
