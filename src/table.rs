//! Declarative rename tables and the mapping interpreter.
//!
//! A [`MappingTable`] is pure data: a shared old root, a shared new root,
//! and a list of old-key to new-path rules. [`migrate`] interprets one
//! table against a config tree, copying each value that is actually set and
//! reporting one [`MigrationEvent`] per copy. Old values are never removed,
//! so re-running a migration is idempotent for tree state.

use crate::MigrateError;
use crate::path::{OptionPath, get_path, set_path};
use log::debug;
use serde::Serialize;
use serde_json::Value;

/// Value transform applied while copying an option to its new location.
///
/// Transforms are plain function pointers so tables stay inert data; a
/// panicking transform propagates to the caller.
pub type Transform = fn(Value) -> Value;

/// Invert a boolean option value, for renames that flip the option's
/// meaning (an opt-out flag becoming an opt-in flag). Non-boolean values
/// pass through unchanged.
pub fn invert_bool(value: Value) -> Value {
    match value.as_bool() {
        Some(flag) => Value::Bool(!flag),
        None => value,
    }
}

/// One deprecated-option rule: `old_key` under the table's old root moves
/// to `new_path` under the table's new root.
#[derive(Debug, Clone)]
pub struct RenameEntry {
    /// Key of the deprecated option, relative to the table's old root.
    pub old_key: String,
    /// Location of the current option, relative to the table's new root.
    pub new_path: OptionPath,
    /// Optional value transform applied during the copy.
    pub transform: Option<Transform>,
}

impl RenameEntry {
    /// Build a plain rename rule.
    pub fn new<I, K>(old_key: &str, new_path: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            old_key: old_key.to_string(),
            new_path: OptionPath::new(new_path),
            transform: None,
        }
    }

    /// Attach a value transform to this rule.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }
}

/// One cohesive migration: all entries share one old root and one new root.
#[derive(Debug, Clone)]
pub struct MappingTable {
    /// Root under which the deprecated keys live.
    pub old_root: OptionPath,
    /// Root under which the current options live. Created lazily on the
    /// first write; it need not exist beforehand.
    pub new_root: OptionPath,
    /// Rename rules, applied in order.
    pub entries: Vec<RenameEntry>,
}

/// Record of one successfully copied deprecated option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationEvent {
    /// Dotted path of the deprecated option that was read.
    pub old_option: String,
    /// Dotted path of the current option that was written.
    pub new_option: String,
}

/// Apply one mapping table to `tree`, emitting one event per copied value.
///
/// A missing or null old root means nothing was configured there: the call
/// returns with no events and no writes. Values are copied, never deleted,
/// and the old value always overwrites whatever currently sits at the new
/// path, including a value the user set there directly.
pub fn migrate(
    tree: &mut Value,
    table: &MappingTable,
    sink: &mut dyn FnMut(MigrationEvent),
) -> Result<(), MigrateError> {
    if get_path(tree, &table.old_root)?.is_none() {
        debug!("skipping migration table, old root absent (root={})", table.old_root);
        return Ok(());
    }
    for entry in &table.entries {
        let old_path = table.old_root.child(&entry.old_key);
        let new_path = table.new_root.join(&entry.new_path);
        let event = MigrationEvent {
            old_option: old_path.to_string(),
            new_option: new_path.to_string(),
        };
        copy_option(tree, &old_path, &new_path, entry.transform, event, sink)?;
    }
    Ok(())
}

/// Apply rename entries directly to an entity-scoped subtree (one axis, one
/// series, one point). Event paths are labeled with the generic `scope`
/// name rather than the entity's position in the parent tree.
pub fn migrate_scoped(
    entity: &mut Value,
    scope: &str,
    entries: &[RenameEntry],
    sink: &mut dyn FnMut(MigrationEvent),
) -> Result<(), MigrateError> {
    for entry in entries {
        let old_path = OptionPath::new([entry.old_key.as_str()]);
        let event = MigrationEvent {
            old_option: format!("{scope}.{}", entry.old_key),
            new_option: format!("{scope}.{}", entry.new_path),
        };
        copy_option(entity, &old_path, &entry.new_path, entry.transform, event, sink)?;
    }
    Ok(())
}

/// Copy a single option from `old` to `new` if it is set, then emit the
/// prepared event. Absent values are skipped silently.
fn copy_option(
    tree: &mut Value,
    old: &OptionPath,
    new: &OptionPath,
    transform: Option<Transform>,
    event: MigrationEvent,
    sink: &mut dyn FnMut(MigrationEvent),
) -> Result<(), MigrateError> {
    let value = match get_path(tree, old)? {
        Some(value) => value.clone(),
        None => return Ok(()),
    };
    let value = match transform {
        Some(transform) => transform(value),
        None => value,
    };
    set_path(tree, new, value)?;
    debug!(
        "migrated deprecated option (old={}, new={})",
        event.old_option, event.new_option
    );
    sink(event);
    Ok(())
}
