use crate::cli::OutputFormat;
use crate::error::GrindstoneError;
use crate::output;
use crate::progress;
use crate::store::Store;

pub fn run(
    store: &Store,
    daily_goal: Option<u32>,
    format: &OutputFormat,
) -> Result<(), GrindstoneError> {
    let mut current = store.load_progress()?;

    if let Some(goal) = daily_goal {
        if goal == 0 {
            return Err(GrindstoneError::InvalidArgument(
                "daily goal must be at least 1".into(),
            ));
        }
        current = progress::set_daily_goal(&current, goal);
        store.save_progress(&current)?;
    }

    output::format_settings(&current.settings, format);
    Ok(())
}
