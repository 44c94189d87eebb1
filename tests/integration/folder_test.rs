//! Integration tests for tenant listings and descendant queries.

use folderhub_core::error::ErrorKind;
use folderhub_entity::folder::MatchMode;
use folderhub_service::FolderService;
use folderhub_store::FolderStore;

use crate::helpers;

#[test]
fn test_list_by_tenant_returns_only_that_tenant() {
    let svc = helpers::sample_service();

    let listed = svc.list_by_tenant(helpers::tenant_one());
    assert_eq!(listed.len(), 5);
    assert!(listed.iter().all(|f| f.tenant_id == helpers::tenant_one()));
}

#[test]
fn test_list_by_tenant_preserves_store_order() {
    let svc = helpers::sample_service();

    let listed = svc.list_by_tenant(helpers::tenant_two());
    assert_eq!(
        helpers::paths(&listed),
        vec![
            ("shared".to_string(), "shared".to_string()),
            ("design".to_string(), "shared.design".to_string()),
        ]
    );
}

#[test]
fn test_list_by_tenant_unknown_tenant() {
    let svc = FolderService::new(FolderStore::new(vec![helpers::folder(
        helpers::tenant_one(),
        "alpha",
        "alpha",
    )]));

    assert!(svc.list_by_tenant(helpers::tenant_two()).is_empty());
}

#[test]
fn test_list_descendants_spans_all_levels() {
    let svc = helpers::sample_service();

    let descendants = svc
        .list_descendants(helpers::tenant_one(), "alpha")
        .expect("should list");
    assert_eq!(
        helpers::paths(&descendants),
        vec![
            ("reports".to_string(), "alpha.reports".to_string()),
            ("weekly".to_string(), "alpha.reports.weekly".to_string()),
        ]
    );
}

#[test]
fn test_list_descendants_does_not_cross_tenants() {
    // Tenant two reuses no names from tenant one, but give it a path that
    // would match tenant one's "alpha" prefix to prove tenant restriction
    // happens before path matching.
    let svc = FolderService::new(FolderStore::new(vec![
        helpers::folder(helpers::tenant_one(), "alpha", "alpha"),
        helpers::folder(helpers::tenant_one(), "reports", "alpha.reports"),
        helpers::folder(helpers::tenant_two(), "intruder", "alpha.intruder"),
    ]));

    let descendants = svc
        .list_descendants(helpers::tenant_one(), "alpha")
        .expect("should list");
    assert_eq!(
        helpers::paths(&descendants),
        vec![("reports".to_string(), "alpha.reports".to_string())]
    );
}

#[test]
fn test_list_descendants_of_leaf() {
    let svc = helpers::sample_service();

    let descendants = svc
        .list_descendants(helpers::tenant_one(), "weekly")
        .expect("should list");
    assert!(descendants.is_empty());
}

#[test]
fn test_list_descendants_unknown_name_is_not_found() {
    let svc = helpers::sample_service();

    let err = svc
        .list_descendants(helpers::tenant_one(), "nonexistent")
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn test_segment_and_substring_modes_disagree_on_prefix_names() {
    let folders = vec![
        helpers::folder(helpers::tenant_one(), "alpha", "alpha"),
        helpers::folder(helpers::tenant_one(), "alpha2", "alpha2"),
        helpers::folder(helpers::tenant_one(), "notes", "alpha2.notes"),
    ];

    let segment = FolderService::new(FolderStore::new(folders.clone()));
    let substring =
        FolderService::with_match_mode(FolderStore::new(folders), MatchMode::Substring);

    let strict = segment
        .list_descendants(helpers::tenant_one(), "alpha")
        .expect("should list");
    assert!(strict.is_empty());

    let loose = substring
        .list_descendants(helpers::tenant_one(), "alpha")
        .expect("should list");
    assert_eq!(
        helpers::paths(&loose),
        vec![
            ("alpha2".to_string(), "alpha2".to_string()),
            ("notes".to_string(), "alpha2.notes".to_string()),
        ]
    );
}
