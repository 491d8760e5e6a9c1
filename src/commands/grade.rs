use chrono::NaiveDate;

use crate::cli::{Grade, OutputFormat};
use crate::error::GrindstoneError;
use crate::output;
use crate::progress;
use crate::srs;
use crate::store::Store;

pub fn run(
    store: &Store,
    id: &str,
    grade: Grade,
    today: NaiveDate,
    format: &OutputFormat,
) -> Result<(), GrindstoneError> {
    let before = store.load_flashcards()?;
    let after = progress::grade_flashcard(&before, id, grade.is_correct(), today)?;
    store.save_flashcards(&after)?;

    let card = after
        .cards
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| GrindstoneError::CardNotFound(id.to_string()))?;
    let interval = srs::describe_interval(card.review_count.saturating_sub(1));

    output::format_grade(card, grade.is_correct(), &interval, today, format);
    Ok(())
}
