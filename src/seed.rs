//! Seed snapshot loading.
//!
//! The engine core operates on a snapshot it is handed at construction
//! time; producing that snapshot is the job of this loader. The snapshot
//! is a JSON array of folder records.

use std::fs;

use tracing::warn;

use folderhub_core::result::AppResult;
use folderhub_entity::folder::{Folder, path};

/// Load folder records from a JSON snapshot file.
///
/// Records are handed to the store exactly as found; rows whose final
/// path segment disagrees with their name are reported but not repaired.
pub fn load(file: &str) -> AppResult<Vec<Folder>> {
    let raw = fs::read_to_string(file)?;
    let folders: Vec<Folder> = serde_json::from_str(&raw)?;

    for folder in &folders {
        if path::leaf_name(&folder.path) != folder.name {
            warn!(
                folder = %folder.name,
                path = %folder.path,
                "seed record path does not end in folder name"
            );
        }
    }

    Ok(folders)
}
