//! FolderHub — multi-tenant folder namespace engine.
//!
//! Entry point that loads configuration, seeds the in-memory store, and
//! walks the namespace operations over the seeded snapshot.

use tracing_subscriber::{EnvFilter, fmt};

use folderhub_core::config::AppConfig;
use folderhub_core::error::AppError;
use folderhub_core::types::TenantId;
use folderhub_entity::folder::MatchMode;
use folderhub_service::FolderService;
use folderhub_store::FolderStore;

mod seed;

fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config) {
        tracing::error!("FolderHub error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("FOLDERHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Seed the store and walk the namespace operations.
fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting FolderHub v{}", env!("CARGO_PKG_VERSION"));

    let match_mode: MatchMode = config.engine.match_mode.parse()?;
    let folders = seed::load(&config.seed.path)?;
    tracing::info!(
        count = folders.len(),
        mode = %match_mode,
        "Seed snapshot loaded"
    );

    let service = FolderService::with_match_mode(FolderStore::new(folders), match_mode);

    // Per-tenant listing, the way the original sample driver printed it.
    let mut tenants: Vec<TenantId> = Vec::new();
    for folder in service.folders() {
        if !tenants.contains(&folder.tenant_id) {
            tenants.push(folder.tenant_id);
        }
    }

    for tenant_id in &tenants {
        let listed = service.list_by_tenant(*tenant_id);
        tracing::info!(tenant_id = %tenant_id, count = listed.len(), "Tenant namespace");
        println!("{}", serde_json::to_string_pretty(&listed)?);
    }

    // Descendant queries for every root folder.
    for root in service.folders().iter().filter(|f| f.is_root()) {
        let descendants = service.list_descendants(root.tenant_id, &root.name)?;
        tracing::info!(
            tenant_id = %root.tenant_id,
            folder = %root.name,
            descendants = descendants.len(),
            "Descendant query"
        );
    }

    Ok(())
}
