//! Materialized-path encoding and ancestor matching.
//!
//! A folder's tree position is encoded as a dot-delimited chain of folder
//! names from the root down to the folder itself (`alpha.reports.weekly`).
//! Ancestor relationships are derived purely from two path strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use folderhub_core::error::AppError;

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Build the path of a child folder under `parent_path`.
pub fn child_path(parent_path: &str, child_name: &str) -> String {
    format!("{parent_path}{SEPARATOR}{child_name}")
}

/// The final segment of a path. For a well-formed record this equals the
/// folder's name.
pub fn leaf_name(path: &str) -> &str {
    path.rsplit(SEPARATOR).next().unwrap_or(path)
}

/// How candidate ancestor paths are matched against folder paths.
///
/// `Segment` requires the ancestor path to be a strict segment prefix.
/// `Substring` reproduces the looser legacy behavior in which the ancestor
/// path may occur anywhere in the candidate descendant's path, and can
/// therefore false-positive on names sharing a prefix (`alpha` flags
/// `alpha2.reports` as a descendant).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// `path` must begin with the ancestor path followed by the separator.
    #[default]
    Segment,
    /// The ancestor path may occur anywhere in `path`.
    Substring,
}

impl MatchMode {
    /// True iff `path` denotes a strict descendant of `ancestor_path`.
    ///
    /// Equal paths are never ancestors of each other under `Segment`;
    /// under `Substring` callers must exclude the folder itself.
    pub fn is_ancestor(self, ancestor_path: &str, path: &str) -> bool {
        match self {
            Self::Segment => path
                .strip_prefix(ancestor_path)
                .is_some_and(|rest| rest.starts_with(SEPARATOR)),
            Self::Substring => path.contains(ancestor_path),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Segment => write!(f, "segment"),
            Self::Substring => write!(f, "substring"),
        }
    }
}

impl FromStr for MatchMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "segment" => Ok(Self::Segment),
            "substring" => Ok(Self::Substring),
            other => Err(AppError::configuration(format!(
                "unknown match mode '{other}' (expected 'segment' or 'substring')"
            ))),
        }
    }
}
