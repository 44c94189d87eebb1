//! Folder namespace operations: tenant listings, descendant queries, and
//! subtree moves.

use tracing::{debug, info};

use folderhub_core::error::AppError;
use folderhub_core::result::AppResult;
use folderhub_core::types::TenantId;
use folderhub_entity::folder::path::{self, MatchMode};
use folderhub_entity::folder::Folder;
use folderhub_store::FolderStore;

/// Implements the namespace operations over a [`FolderStore`].
///
/// The service owns its store. Queries are pure reads; [`move_folder`]
/// is the only mutating operation and either applies completely or
/// leaves the store untouched.
///
/// [`move_folder`]: FolderService::move_folder
#[derive(Debug, Clone)]
pub struct FolderService {
    /// The working set of folders.
    store: FolderStore,
    /// Ancestor matching semantics.
    match_mode: MatchMode,
}

impl FolderService {
    /// Creates a folder service with segment-prefix ancestor matching.
    pub fn new(store: FolderStore) -> Self {
        Self::with_match_mode(store, MatchMode::default())
    }

    /// Creates a folder service with an explicit ancestor matching mode.
    pub fn with_match_mode(store: FolderStore, match_mode: MatchMode) -> Self {
        Self { store, match_mode }
    }

    /// The full folder collection, store order preserved.
    pub fn folders(&self) -> &[Folder] {
        self.store.all()
    }

    /// Lists every folder owned by `tenant_id`, in store order.
    ///
    /// An unknown tenant yields an empty list, not an error.
    pub fn list_by_tenant(&self, tenant_id: TenantId) -> Vec<Folder> {
        self.store
            .all()
            .iter()
            .filter(|f| f.tenant_id == tenant_id)
            .cloned()
            .collect()
    }

    /// Lists every descendant of the folder named `name` within
    /// `tenant_id`, in store order. The named folder itself is excluded.
    ///
    /// Fails with `NotFound` when no folder of that name exists in the
    /// tenant.
    pub fn list_descendants(&self, tenant_id: TenantId, name: &str) -> AppResult<Vec<Folder>> {
        let folders = self.list_by_tenant(tenant_id);
        let parent = folders.iter().find(|f| f.name == name).ok_or_else(|| {
            AppError::not_found(format!("folder '{name}' not found in tenant {tenant_id}"))
        })?;

        let descendants = folders
            .iter()
            .filter(|f| f.path != parent.path && self.match_mode.is_ancestor(&parent.path, &f.path))
            .cloned()
            .collect();
        Ok(descendants)
    }

    /// Relocates the folder named `name`, with its entire subtree, to
    /// become a child of the folder named `destination_name`, and returns
    /// the full updated folder collection.
    ///
    /// Validation is fail-fast: source lookup, destination lookup, tenant
    /// check, identity check, cycle check. On any failure the store is
    /// left unmodified.
    pub fn move_folder(&mut self, name: &str, destination_name: &str) -> AppResult<Vec<Folder>> {
        let source = self
            .store
            .find_by_name(name)
            .map_err(|_| {
                AppError::source_not_found(format!("source folder '{name}' does not exist"))
            })?
            .clone();
        let destination = self
            .store
            .find_by_name(destination_name)
            .map_err(|_| {
                AppError::destination_not_found(format!(
                    "destination folder '{destination_name}' does not exist"
                ))
            })?
            .clone();

        if source.tenant_id != destination.tenant_id {
            return Err(AppError::cross_tenant_move(
                "cannot move a folder to a different tenant",
            ));
        }
        if source.path == destination.path {
            return Err(AppError::self_move("cannot move a folder to itself"));
        }
        if self.match_mode.is_ancestor(&source.path, &destination.path) {
            return Err(AppError::move_into_own_descendant(
                "cannot move a folder to a child of itself",
            ));
        }

        let new_source_path = path::child_path(&destination.path, &source.name);

        // Enumerate the subtree under the old path before the source
        // record is rewritten, so descendants never match against the
        // already-updated source path.
        let descendants = self.list_descendants(source.tenant_id, name)?;
        for descendant in descendants {
            let mut updated = descendant.clone();
            updated.path = descendant.path.replacen(&source.path, &new_source_path, 1);
            debug!(
                folder = %updated.name,
                old_path = %descendant.path,
                new_path = %updated.path,
                "rewrote descendant path"
            );
            self.store.replace(&descendant.name, updated)?;
        }

        let mut moved = source.clone();
        moved.path = new_source_path;
        self.store.replace(&source.name, moved)?;

        info!(
            tenant_id = %source.tenant_id,
            folder = %source.name,
            destination = %destination.name,
            "folder moved"
        );

        Ok(self.store.all().to_vec())
    }
}
