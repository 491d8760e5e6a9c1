use chrono::NaiveDate;

use crate::cli::OutputFormat;
use crate::error::GrindstoneError;
use crate::output;
use crate::stats;
use crate::store::Store;

pub fn run(store: &Store, today: NaiveDate, format: &OutputFormat) -> Result<(), GrindstoneError> {
    let progress = store.load_flashcards()?;
    let rows = stats::deck_progress(&progress.cards, today);
    output::format_decks(&rows, format);
    Ok(())
}
