//! Ordered in-memory folder collection.

use folderhub_core::error::AppError;
use folderhub_core::result::AppResult;
use folderhub_entity::folder::Folder;

/// Holds the working set of folders in insertion order.
///
/// No validation is performed at construction time; callers are expected
/// to supply records whose final path segment matches their name and
/// whose names are unique. The store provides no internal locking and is
/// not safe for concurrent mutation.
#[derive(Debug, Clone, Default)]
pub struct FolderStore {
    folders: Vec<Folder>,
}

impl FolderStore {
    /// Create a store from an initial snapshot of folder records.
    pub fn new(folders: Vec<Folder>) -> Self {
        Self { folders }
    }

    /// The full collection, insertion order preserved.
    pub fn all(&self) -> &[Folder] {
        &self.folders
    }

    /// Number of folders in the store.
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// True if the store holds no folders.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Find the first folder with the given name.
    pub fn find_by_name(&self, name: &str) -> AppResult<&Folder> {
        self.folders
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| AppError::not_found(format!("folder '{name}' not found")))
    }

    /// Overwrite the stored folder matching `name`, preserving its
    /// position in the collection.
    pub fn replace(&mut self, name: &str, updated: Folder) -> AppResult<()> {
        let slot = self
            .folders
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| AppError::not_found(format!("folder '{name}' not found")))?;
        *slot = updated;
        Ok(())
    }
}
