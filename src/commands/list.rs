use chrono::NaiveDate;

use crate::cli::OutputFormat;
use crate::error::GrindstoneError;
use crate::models::{Difficulty, ProblemStatus};
use crate::output;
use crate::store::Store;

pub struct Filters {
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub status: Option<ProblemStatus>,
    pub search: Option<String>,
}

pub fn run(
    store: &Store,
    filters: &Filters,
    today: NaiveDate,
    format: &OutputFormat,
) -> Result<(), GrindstoneError> {
    let progress = store.load_progress()?;
    let needle = filters.search.as_deref().map(str::to_lowercase);

    let matches: Vec<_> = progress
        .problems
        .iter()
        .filter(|p| filters.category.as_deref().map_or(true, |c| p.category == c))
        .filter(|p| filters.difficulty.map_or(true, |d| p.difficulty == d))
        .filter(|p| filters.status.map_or(true, |s| p.status == s))
        .filter(|p| {
            needle
                .as_deref()
                .map_or(true, |n| p.name.to_lowercase().contains(n))
        })
        .collect();

    output::format_problem_list(&matches, today, format);
    Ok(())
}
