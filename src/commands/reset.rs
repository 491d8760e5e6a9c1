use tracing::info;

use crate::cli::OutputFormat;
use crate::error::GrindstoneError;
use crate::output;
use crate::store::Store;

pub fn run(store: &Store, format: &OutputFormat) -> Result<(), GrindstoneError> {
    store.reset()?;
    info!("progress reset to catalog defaults");
    output::format_reset(format);
    Ok(())
}
