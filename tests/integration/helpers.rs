//! Shared fixtures for the integration suite.

use uuid::Uuid;

use folderhub_core::types::{FolderId, TenantId};
use folderhub_entity::folder::Folder;
use folderhub_service::FolderService;
use folderhub_store::FolderStore;

/// First fixture tenant.
pub fn tenant_one() -> TenantId {
    TenantId::from_uuid(Uuid::from_u128(0x1234_5678))
}

/// Second fixture tenant.
pub fn tenant_two() -> TenantId {
    TenantId::from_uuid(Uuid::from_u128(0x9876_5432))
}

/// Build a folder record with a fresh id.
pub fn folder(tenant_id: TenantId, name: &str, path: &str) -> Folder {
    Folder {
        id: FolderId::new(),
        tenant_id,
        name: name.to_string(),
        path: path.to_string(),
    }
}

/// The shared namespace fixture: tenant one holds a nested tree plus a
/// second root, tenant two holds an unrelated tree reusing tenant one's
/// path shapes.
pub fn sample_folders() -> Vec<Folder> {
    vec![
        folder(tenant_one(), "alpha", "alpha"),
        folder(tenant_one(), "reports", "alpha.reports"),
        folder(tenant_one(), "weekly", "alpha.reports.weekly"),
        folder(tenant_one(), "archive", "archive"),
        folder(tenant_one(), "q1", "archive.q1"),
        folder(tenant_two(), "shared", "shared"),
        folder(tenant_two(), "design", "shared.design"),
    ]
}

/// A service over the shared fixture with default (segment) matching.
pub fn sample_service() -> FolderService {
    FolderService::new(FolderStore::new(sample_folders()))
}

/// Project folders down to comparable `(name, path)` pairs.
pub fn paths(folders: &[Folder]) -> Vec<(String, String)> {
    folders
        .iter()
        .map(|f| (f.name.clone(), f.path.clone()))
        .collect()
}
