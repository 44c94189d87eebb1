//! Folder domain entities and the materialized-path model.

pub mod model;
pub mod path;

pub use model::Folder;
pub use path::MatchMode;
