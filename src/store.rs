use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use log::debug;

use crate::error::ScoutError;
use crate::model::Recipe;

/// Persistence for the bookmark list.
///
/// The list is read once at startup and rewritten in full on every
/// mutation. Last writer wins; there is no cross-process coordination.
pub trait BookmarkStore {
    fn load(&self) -> Result<Vec<Recipe>, ScoutError>;
    fn save(&self, bookmarks: &[Recipe]) -> Result<(), ScoutError>;
}

/// Bookmarks as a single JSON document on disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }
}

impl BookmarkStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Recipe>, ScoutError> {
        // A missing file just means nothing has been bookmarked yet
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        let bookmarks: Vec<Recipe> = serde_json::from_str(&raw)?;
        debug!("loaded {} bookmarks from {}", bookmarks.len(), self.path.display());
        Ok(bookmarks)
    }

    fn save(&self, bookmarks: &[Recipe]) -> Result<(), ScoutError> {
        let raw = serde_json::to_string(bookmarks)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-process store for embedding and tests.
#[derive(Default)]
pub struct MemoryStore {
    bookmarks: Mutex<Vec<Recipe>>,
}

impl BookmarkStore for MemoryStore {
    fn load(&self) -> Result<Vec<Recipe>, ScoutError> {
        Ok(self.bookmarks.lock().expect("store poisoned").clone())
    }

    fn save(&self, bookmarks: &[Recipe]) -> Result<(), ScoutError> {
        *self.bookmarks.lock().expect("store poisoned") = bookmarks.to_vec();
        Ok(())
    }
}
