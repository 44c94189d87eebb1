//! # folderhub-entity
//!
//! Domain entity models for FolderHub. Every struct in this crate
//! represents a folder namespace record or a domain value object. All
//! entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod folder;
