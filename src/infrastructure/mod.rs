//! Infrastructure layer - Configuration and file system access

pub mod config;
pub mod repository;

pub use config::GeneratorConfig;
pub use repository::{CalendarRepository, DirStatus, FileSystemRepository};
