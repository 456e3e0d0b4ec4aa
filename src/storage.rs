use crate::store::TodoStore;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML file persistence for [`TodoStore`]
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load the store, or an empty one when the file does not exist yet
    ///
    /// Files with duplicate or missing ids, blank content or a newer
    /// `format_version` are rejected.
    pub fn load(&self) -> Result<TodoStore> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "no data file, starting empty");
            return Ok(TodoStore::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let store: TodoStore = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.file_path.display()))?;
        store
            .validate()
            .with_context(|| format!("Invalid data in {}", self.file_path.display()))?;
        debug!(path = %self.file_path.display(), todos = store.len(), "loaded todos");
        Ok(store)
    }

    pub fn save(&self, store: &TodoStore) -> Result<()> {
        let content = toml::to_string_pretty(store)?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        debug!(path = %self.file_path.display(), todos = store.len(), "saved todos");
        Ok(())
    }
}
