//! Build player cards from a prop feed and game logs

use std::path::PathBuf;
use tracing::{info, warn};

use super::{
    common::{format_skips, load_game_records, open_database, print_cards, write_card_output},
    resolve_path, PathSource, DEFAULT_LINES_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_SPREADS_FILE,
};
use crate::{
    cli::types::ScoreFormula,
    engine::{GameLogStore, PassOutcome, RefreshPass, StatResolver, TeamSpreads},
    feeds::{load_prop_lines, load_team_spreads},
    storage::PlayerDatabase,
    Result, LINES_PATH_ENV_VAR, OUTPUT_PATH_ENV_VAR, SPREADS_PATH_ENV_VAR,
};

/// Parameters for the build-cards command
#[derive(Debug, Default)]
pub struct BuildCardsParams {
    pub lines: Option<PathBuf>,
    pub gamelogs: Option<PathBuf>,
    pub spreads: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub score: ScoreFormula,
    pub as_json: bool,
    pub no_store: bool,
}

fn load_spreads(source: &PathSource) -> Result<TeamSpreads> {
    let path = source.path();
    if path.exists() {
        let spreads = load_team_spreads(path)?;
        info!(teams = spreads.len(), "loaded team spreads");
        Ok(spreads)
    } else {
        if source.is_explicit() {
            warn!(path = %path.display(), "spreads file not found; continuing without spreads");
        }
        Ok(TeamSpreads::new())
    }
}

/// Run one refresh pass and write its artifacts.
///
/// `db` is used for the stored game-log fallback and to record the run.
pub fn build_cards(params: &BuildCardsParams, db: Option<&mut PlayerDatabase>) -> Result<PassOutcome> {
    let lines_source = resolve_path(params.lines.clone(), LINES_PATH_ENV_VAR, DEFAULT_LINES_FILE);
    let lines = load_prop_lines(lines_source.path())?;
    info!(lines = lines.len(), path = %lines_source.path().display(), "loaded prop lines");

    let records = load_game_records(params.gamelogs.clone(), db.as_deref())?;
    let store = GameLogStore::from_records(records);

    let spreads = load_spreads(&resolve_path(
        params.spreads.clone(),
        SPREADS_PATH_ENV_VAR,
        DEFAULT_SPREADS_FILE,
    ))?;

    let resolver = StatResolver::default();
    let outcome = RefreshPass::new(&store, &resolver, params.score.scorer())
        .with_spreads(&spreads)
        .run(&lines)?;

    let output = resolve_path(params.output.clone(), OUTPUT_PATH_ENV_VAR, DEFAULT_OUTPUT_FILE);
    let meta_path = write_card_output(output.path(), &outcome)?;
    info!(
        output = %output.path().display(),
        meta = %meta_path.display(),
        "wrote player cards"
    );

    if let Some(db) = db {
        let run_id = db.record_card_run(&outcome, params.score)?;
        info!(run_id, "recorded card run");
    }

    Ok(outcome)
}

/// Handle the build-cards command
pub fn handle_build_cards(params: BuildCardsParams) -> Result<()> {
    let mut db = if params.no_store {
        None
    } else {
        Some(open_database()?)
    };

    let outcome = build_cards(&params, db.as_mut())?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&outcome.cards)?); // tarpaulin::skip
    } else {
        print_cards(&outcome.cards);
        println!(
            "✓ {} cards built ({} scoring), skipped: {}",
            outcome.cards.len(),
            params.score,
            format_skips(&outcome.skipped)
        );
    }

    Ok(())
}
