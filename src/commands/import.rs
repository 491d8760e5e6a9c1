use std::path::Path;

use tracing::info;

use crate::cli::OutputFormat;
use crate::error::GrindstoneError;
use crate::output;
use crate::store::{self, Store};

pub fn run(store: &Store, path: &Path, format: &OutputFormat) -> Result<(), GrindstoneError> {
    let progress = store::import(path)?;
    store.save_progress(&progress)?;
    info!(path = %path.display(), problems = progress.problems.len(), "progress imported");

    output::format_import(path, progress.problems.len(), format);
    Ok(())
}
