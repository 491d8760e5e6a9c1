use chrono::NaiveDate;

use crate::cli::OutputFormat;
use crate::error::GrindstoneError;
use crate::output;
use crate::store::Store;

pub fn run(store: &Store, today: NaiveDate, format: &OutputFormat) -> Result<(), GrindstoneError> {
    let progress = store.load_progress()?;
    output::format_streak(&progress.streak, today, format);
    Ok(())
}
