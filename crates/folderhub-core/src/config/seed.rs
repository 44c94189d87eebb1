//! Seed snapshot configuration.

use serde::{Deserialize, Serialize};

/// Seed snapshot configuration.
///
/// The snapshot is the caller-supplied initial folder collection; the
/// engine core never reads it itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Path to the JSON snapshot of folder records.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> String {
    "seed/folders.json".to_string()
}
