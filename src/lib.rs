//! Personal assistant - terminal address book and notebook
//!
//! This library provides the core functionality for the `assistant` binary:
//! contacts and tagged notes kept in plain JSON files, with validation,
//! substring search and an upcoming-birthday query.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Contacts, notes and field validators
//! - `storage`: JSON file storage layer
//! - `query`: Search and the birthday window
//! - `services`: Add, edit and delete operations
//! - `audit`: Change history
//! - `backup`: Rolling backups and restore
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal formatting
//! - `shell`: Interactive menu
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use assistant::config::{paths::AssistantPaths, settings::Settings};
//! use assistant::services::NoteService;
//! use assistant::storage::Storage;
//!
//! let paths = AssistantPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths, settings.storage_layout)?;
//! storage.load_all()?;
//!
//! NoteService::new(&storage).add("Buy milk", "shopping")?;
//! ```

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod query;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::{AssistantError, AssistantResult};
