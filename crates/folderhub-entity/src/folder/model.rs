//! Folder entity model.

use serde::{Deserialize, Serialize};

use folderhub_core::types::{FolderId, TenantId};

use super::path;

/// A folder in a tenant's namespace hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// The tenant that owns this folder. Folders never move across
    /// tenants.
    pub tenant_id: TenantId,
    /// Folder name. Expected to be unique within a store; name lookups
    /// return the first match.
    pub name: String,
    /// Full materialized path (e.g., `alpha.reports.weekly`): the chain
    /// of folder names from a root down to and including this folder.
    /// The final segment equals `name`.
    pub path: String,
}

impl Folder {
    /// Check if this is a root folder (single-segment path).
    pub fn is_root(&self) -> bool {
        !self.path.contains(path::SEPARATOR)
    }
}
