use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::cli::OutputFormat;
use crate::error::GrindstoneError;
use crate::output;
use crate::store::{self, Store};

pub fn run(
    store: &Store,
    path: Option<&Path>,
    today: NaiveDate,
    format: &OutputFormat,
) -> Result<(), GrindstoneError> {
    let progress = store.load_progress()?;
    let dest = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(format!("grindstone-progress-{today}.json")));

    store::export(&progress, &dest)?;
    output::format_export(&dest, progress.problems.len(), format);
    Ok(())
}
