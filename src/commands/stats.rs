use crate::cli::OutputFormat;
use crate::error::GrindstoneError;
use crate::output;
use crate::stats;
use crate::store::Store;

pub fn run(store: &Store, format: &OutputFormat) -> Result<(), GrindstoneError> {
    let progress = store.load_progress()?;
    let overview = stats::overview(&progress.problems);
    output::format_stats(&overview, format);
    Ok(())
}
