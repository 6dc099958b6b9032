//! Show cards from the latest stored run

use super::common::{format_skips, open_database, print_cards};
use crate::{
    engine::PlayerCard,
    error::PropsError,
    storage::{CardRun, PlayerDatabase},
    Result,
};

/// Parameters for the show-cards command
#[derive(Debug, Default)]
pub struct ShowCardsParams {
    pub limit: Option<usize>,
    pub prop: Option<String>,
    pub as_json: bool,
}

/// Latest run and its cards, filtered by prop label.
///
/// The label goes through the stat resolver first so `PRA` finds
/// `Pts+Rebs+Asts` cards.
pub fn latest_cards(
    db: &PlayerDatabase,
    params: &ShowCardsParams,
) -> Result<(CardRun, Vec<PlayerCard>)> {
    let run = db.latest_run()?.ok_or(PropsError::NoStoredCards)?;

    let resolver = crate::engine::StatResolver::default();
    let prop = params.prop.as_deref().map(|label| {
        resolver
            .resolve(label)
            .map(|kind| kind.label().to_string())
            .unwrap_or_else(|| label.to_string())
    });

    let cards = db.cards_for_run(run.run_id, prop.as_deref(), params.limit)?;
    Ok((run, cards))
}

/// Handle the show-cards command
pub fn handle_show_cards(params: ShowCardsParams) -> Result<()> {
    let db = open_database()?;
    let (run, cards) = latest_cards(&db, &params)?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&cards)?); // tarpaulin::skip
        return Ok(());
    }

    println!(
        "Run #{} generated {} ({} scoring): {} cards, skipped: {}",
        run.run_id,
        run.generated_at.format("%Y-%m-%d %H:%M UTC"),
        run.score_formula,
        run.card_count,
        format_skips(&run.skipped)
    );
    print_cards(&cards);
    Ok(())
}
