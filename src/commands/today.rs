use chrono::NaiveDate;

use crate::cli::OutputFormat;
use crate::due;
use crate::error::GrindstoneError;
use crate::output::{self, Dashboard};
use crate::store::Store;

pub fn run(store: &Store, today: NaiveDate, format: &OutputFormat) -> Result<(), GrindstoneError> {
    let progress = store.load_progress()?;
    let cards = store.load_flashcards()?;

    let solved_today = due::solved_today(&progress.problems, today);
    let remaining = (progress.settings.daily_goal as usize).saturating_sub(solved_today);

    let view = Dashboard {
        streak: progress.streak.effective_count(today),
        streak_status: progress.streak.status(today),
        solved_today,
        daily_goal: progress.settings.daily_goal,
        review: due::review_queue(&progress.problems, today),
        suggested: due::suggest_new(&progress.problems, remaining),
        due_cards: due::select_due(&cards.cards, today).len(),
    };

    output::format_today(&view, today, format);
    Ok(())
}
