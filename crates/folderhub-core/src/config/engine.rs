//! Tree engine configuration.

use serde::{Deserialize, Serialize};

/// Folder tree engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Ancestor matching mode: `"segment"` (strict segment-prefix
    /// matching) or `"substring"` (legacy-compatible loose matching).
    #[serde(default = "default_match_mode")]
    pub match_mode: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            match_mode: default_match_mode(),
        }
    }
}

fn default_match_mode() -> String {
    "segment".to_string()
}
