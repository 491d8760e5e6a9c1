use chrono::NaiveDate;

use crate::cli::OutputFormat;
use crate::error::GrindstoneError;
use crate::output;
use crate::store::Store;

pub fn run(
    store: &Store,
    id: &str,
    today: NaiveDate,
    format: &OutputFormat,
) -> Result<(), GrindstoneError> {
    let progress = store.load_progress()?;
    let problem = progress
        .problems
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| GrindstoneError::ProblemNotFound(id.to_string()))?;

    output::format_problem_detail(problem, today, format);
    Ok(())
}
