//! Configuration module for the personal assistant
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AssistantPaths;
pub use settings::{BackupRetention, Settings, StorageLayout};
