use chrono::NaiveDate;
use rand::seq::SliceRandom;

use crate::catalog;
use crate::cli::OutputFormat;
use crate::due;
use crate::error::GrindstoneError;
use crate::output;
use crate::store::Store;

pub fn run(
    store: &Store,
    deck: Option<&str>,
    due_only: bool,
    shuffle: bool,
    today: NaiveDate,
    format: &OutputFormat,
) -> Result<(), GrindstoneError> {
    if let Some(d) = deck {
        if catalog::find_deck(d).is_none() {
            return Err(GrindstoneError::InvalidArgument(format!("unknown deck {d}")));
        }
    }

    let progress = store.load_flashcards()?;
    let mut cards = if due_only {
        due::due_cards(&progress.cards, deck, today)
    } else {
        due::cards_in_deck(&progress.cards, deck)
    };

    if shuffle {
        cards.shuffle(&mut rand::thread_rng());
    }

    output::format_cards(&cards, today, format);
    Ok(())
}
