//! Folder namespace services.

pub mod service;

pub use service::FolderService;
