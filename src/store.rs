use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog;
use crate::config::Config;
use crate::error::GrindstoneError;
use crate::models::{FlashcardProgress, UserProgress};

const PROGRESS_FILE: &str = "progress.json";
const FLASHCARDS_FILE: &str = "flashcards.json";

/// JSON snapshots in one data directory: problem progress (with streak and
/// settings) and flashcard progress, stored separately.
pub struct Store {
    dir: PathBuf,
    daily_goal: u32,
    dark_mode: bool,
}

impl Store {
    pub fn open(dir: PathBuf, config: &Config) -> Self {
        Self {
            dir,
            daily_goal: config.daily_goal(),
            dark_mode: config.dark_mode(),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub fn load_progress(&self) -> Result<UserProgress, GrindstoneError> {
        let loaded = read_json(&self.path(PROGRESS_FILE))?;
        Ok(loaded.unwrap_or_else(|| catalog::initial_progress(self.daily_goal, self.dark_mode)))
    }

    pub fn save_progress(&self, progress: &UserProgress) -> Result<(), GrindstoneError> {
        write_json(&self.path(PROGRESS_FILE), progress, false)
    }

    pub fn load_flashcards(&self) -> Result<FlashcardProgress, GrindstoneError> {
        let loaded = read_json(&self.path(FLASHCARDS_FILE))?;
        Ok(loaded.unwrap_or_else(catalog::initial_flashcard_progress))
    }

    pub fn save_flashcards(&self, cards: &FlashcardProgress) -> Result<(), GrindstoneError> {
        write_json(&self.path(FLASHCARDS_FILE), cards, false)
    }

    /// Restore both collections to the seeded catalog state.
    pub fn reset(&self) -> Result<(), GrindstoneError> {
        self.save_progress(&catalog::initial_progress(self.daily_goal, self.dark_mode))?;
        self.save_flashcards(&catalog::initial_flashcard_progress())
    }
}

/// Write the progress document, pretty-printed, to `path`.
pub fn export(progress: &UserProgress, path: &Path) -> Result<(), GrindstoneError> {
    write_json(path, progress, true)
}

/// Read an exported progress document. Only the structure is checked;
/// individual fields decode leniently.
pub fn import(path: &Path) -> Result<UserProgress, GrindstoneError> {
    let progress: UserProgress = read_json(path)?
        .ok_or_else(|| GrindstoneError::Storage(format!("{}: file not found", path.display())))?;

    let known = catalog::initial_problems();
    let unknown = progress
        .problems
        .iter()
        .filter(|p| !known.iter().any(|k| k.id == p.id))
        .count();
    if unknown > 0 {
        warn!(unknown, "imported document contains problems outside the catalog");
    }

    Ok(progress)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, GrindstoneError> {
    let data = match std::fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no snapshot, using seed");
            return Ok(None);
        }
        Err(e) => {
            return Err(GrindstoneError::Storage(format!(
                "failed to read {}: {e}",
                path.display()
            )))
        }
    };

    let value = serde_json::from_str(&data)
        .map_err(|e| GrindstoneError::ParseError(format!("{}: {e}", path.display())))?;
    debug!(path = %path.display(), "snapshot loaded");
    Ok(Some(value))
}

fn write_json<T: Serialize>(path: &Path, value: &T, pretty: bool) -> Result<(), GrindstoneError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            GrindstoneError::DataDir(format!("failed to create {}: {e}", parent.display()))
        })?;
    }

    let data = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| GrindstoneError::Storage(format!("failed to encode {}: {e}", path.display())))?;

    // Atomic save: write to temp file then rename
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, &data)
        .and_then(|_| std::fs::rename(&tmp, path))
        .map_err(|e| GrindstoneError::Storage(format!("failed to write {}: {e}", path.display())))?;

    debug!(path = %path.display(), bytes = data.len(), "snapshot saved");
    Ok(())
}
