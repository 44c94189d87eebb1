//! # folderhub-service
//!
//! Business logic service layer for FolderHub. The folder service owns
//! the in-memory store and implements the namespace operations over it:
//! per-tenant listings, descendant queries, and subtree moves.
//!
//! All operations are synchronous and single-threaded; callers needing
//! concurrent access must serialize externally.

pub mod folder;

pub use folder::FolderService;
