//! Error types for option migration.

use thiserror::Error;

/// Errors returned by the path accessor and mapping interpreter.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// An empty option path was passed to the accessor.
    #[error("invalid option path: must contain at least one key")]
    EmptyPath,
}
