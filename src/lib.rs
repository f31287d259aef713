//! Deprecated-option migration for Plotline chart configuration.
//!
//! Renaming or restructuring configuration keys across versions must not
//! silently break charts that still set the old keys. This crate copies
//! each deprecated option to its current location, optionally transforming
//! the value, and reports one non-fatal warning per migrated option.
//!
//! The engine is generic: a path-based accessor over `serde_json::Value`
//! trees plus an interpreter for declarative rename tables. The tables for
//! every deprecated option family live in [`deprecations::tables`].
//!
//! `copy_deprecated_options` takes exclusive `&mut` access to the tree for
//! the duration of the call and holds no state across calls.

pub mod deprecations;
mod error;
mod path;
mod report;
mod table;

/// Error type returned by the accessor and interpreter.
pub use error::MigrateError;
/// Typed key paths and the generic tree accessor.
pub use path::{OptionPath, get_path, set_path};
/// Warning sinks and the fixed deprecation message format.
pub use report::{LogReporter, WarningReporter, deprecation_message};
/// Rename tables, the mapping interpreter, and migration events.
pub use table::{
    MappingTable, MigrationEvent, RenameEntry, Transform, invert_bool, migrate, migrate_scoped,
};

pub use deprecations::{copy_deprecated_options, report_deprecated_options};
