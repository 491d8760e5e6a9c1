use chrono::NaiveDate;

use crate::cli::OutputFormat;
use crate::error::GrindstoneError;
use crate::models::ProblemStatus;
use crate::output;
use crate::progress;
use crate::srs;
use crate::store::Store;

pub fn run(
    store: &Store,
    id: &str,
    status: ProblemStatus,
    today: NaiveDate,
    format: &OutputFormat,
) -> Result<(), GrindstoneError> {
    let before = store.load_progress()?;
    let after = progress::update_problem_status(&before, id, status, today)?;
    store.save_progress(&after)?;

    let problem = after
        .problems
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| GrindstoneError::ProblemNotFound(id.to_string()))?;

    // interval picked by the scheduler, from the pre-change count
    let interval = match status {
        ProblemStatus::Solved => Some(srs::describe_interval(problem.review_count.saturating_sub(1))),
        ProblemStatus::NeedsReview => Some(srs::describe_interval(0)),
        ProblemStatus::Attempted | ProblemStatus::NotStarted => None,
    };

    output::format_mark(problem, interval.as_deref(), &after.streak, today, format);
    Ok(())
}
