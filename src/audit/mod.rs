//! Audit logging for the personal assistant
//!
//! Records every add, edit and delete with before/after values in an
//! append-only audit log, which doubles as the user-visible change history.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single entry with timestamp, operation, record type and
//!   key, and optional before/after snapshots.
//! - `AuditLogger`: appends entries to the log file as JSON lines (JSONL).
//! - `generate_diff`: summarises which fields an edit changed.
//!
//! # Example
//!
//! ```rust,ignore
//! use assistant::audit::{AuditEntry, AuditLogger, EntityType, generate_diff};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(EntityType::Contact, "Ann", &contact))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
