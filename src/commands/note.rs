use crate::cli::OutputFormat;
use crate::error::GrindstoneError;
use crate::output;
use crate::progress;
use crate::store::Store;

pub fn run(store: &Store, id: &str, text: &str, format: &OutputFormat) -> Result<(), GrindstoneError> {
    let before = store.load_progress()?;
    let after = progress::set_notes(&before, id, text)?;
    store.save_progress(&after)?;

    if let Some(problem) = after.problems.iter().find(|p| p.id == id) {
        output::format_note(problem, format);
    }
    Ok(())
}
