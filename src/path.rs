//! Typed key paths and the generic get/set accessor over config trees.
//!
//! Config trees are plain `serde_json::Value` objects with no fixed schema.
//! The accessor reads from and writes into them by dotted key path, creating
//! missing intermediate objects on write.

use crate::MigrateError;
use serde_json::{Map, Value};
use std::fmt;

/// Ordered sequence of keys locating an option within a config tree.
///
/// Equality is structural. `Display` joins the keys with dots, which is the
/// form used in deprecation warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionPath(Vec<String>);

impl OptionPath {
    /// Build a path from a sequence of keys.
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self(keys.into_iter().map(Into::into).collect())
    }

    /// The keys of this path, in order.
    pub fn keys(&self) -> &[String] {
        &self.0
    }

    /// Whether this path has no keys. Empty paths are rejected by the
    /// accessor; they exist only transiently during construction.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of keys in this path.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Extend this path with a single trailing key.
    pub fn child(&self, key: &str) -> OptionPath {
        let mut keys = self.0.clone();
        keys.push(key.to_string());
        Self(keys)
    }

    /// Concatenate this path with a relative sub-path.
    pub fn join(&self, other: &OptionPath) -> OptionPath {
        let mut keys = self.0.clone();
        keys.extend(other.0.iter().cloned());
        Self(keys)
    }
}

impl fmt::Display for OptionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// Read the value at `path` under `root`.
///
/// A missing key, a non-object intermediate node, and an explicit null leaf
/// all resolve to `None`: an option cleared to null counts as never set.
pub fn get_path<'a>(root: &'a Value, path: &OptionPath) -> Result<Option<&'a Value>, MigrateError> {
    if path.is_empty() {
        return Err(MigrateError::EmptyPath);
    }
    let mut node = root;
    for key in path.keys() {
        match node {
            Value::Object(map) => match map.get(key) {
                Some(next) => node = next,
                None => return Ok(None),
            },
            _ => return Ok(None),
        }
    }
    Ok(if node.is_null() { None } else { Some(node) })
}

/// Write `value` at `path` under `root`, creating missing intermediates.
///
/// Every intermediate key must hold an object; a missing one is created
/// empty, and one holding a non-object value is replaced with a fresh
/// object. The leaf key is overwritten unconditionally.
pub fn set_path(root: &mut Value, path: &OptionPath, value: Value) -> Result<(), MigrateError> {
    let (leaf, parents) = path.keys().split_last().ok_or(MigrateError::EmptyPath)?;
    let mut node = root;
    for key in parents {
        node = ensure_object(node)
            .entry(key.clone())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    ensure_object(node).insert(leaf.clone(), value);
    Ok(())
}

/// View a node as a mutable object map, replacing any non-object value.
fn ensure_object(slot: &mut Value) -> &mut Map<String, Value> {
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(map) => map,
        _ => unreachable!("slot was replaced with an object above"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn get_walks_nested_objects() {
        let tree = json!({ "accessibility": { "point": { "dateFormat": "%Y" } } });
        let path = OptionPath::new(["accessibility", "point", "dateFormat"]);
        let value = get_path(&tree, &path).expect("path");
        assert_eq!(value, Some(&json!("%Y")));
    }

    #[test]
    fn get_returns_none_for_missing_intermediate() {
        let tree = json!({ "accessibility": {} });
        let path = OptionPath::new(["accessibility", "point", "dateFormat"]);
        assert_eq!(get_path(&tree, &path).expect("path"), None);
    }

    #[test]
    fn get_returns_none_for_non_object_intermediate() {
        let tree = json!({ "accessibility": 7 });
        let path = OptionPath::new(["accessibility", "point"]);
        assert_eq!(get_path(&tree, &path).expect("path"), None);
    }

    #[test]
    fn get_treats_null_leaf_as_absent() {
        let tree = json!({ "chart": { "description": null } });
        let path = OptionPath::new(["chart", "description"]);
        assert_eq!(get_path(&tree, &path).expect("path"), None);
    }

    #[test]
    fn get_rejects_empty_path() {
        let tree = json!({});
        let err = get_path(&tree, &OptionPath::new(Vec::<String>::new())).unwrap_err();
        assert!(matches!(err, MigrateError::EmptyPath));
    }

    #[test]
    fn set_single_key_writes_on_root() {
        let mut tree = json!({ "title": "Sales" });
        set_path(&mut tree, &OptionPath::new(["subtitle"]), json!("2024")).expect("set");
        assert_eq!(tree, json!({ "title": "Sales", "subtitle": "2024" }));
    }

    #[test]
    fn set_creates_missing_intermediates_without_touching_siblings() {
        let mut tree = json!({ "accessibility": { "enabled": true } });
        let path = OptionPath::new(["accessibility", "point", "valueSuffix"]);
        set_path(&mut tree, &path, json!("USD")).expect("set");
        assert_eq!(
            tree,
            json!({
                "accessibility": {
                    "enabled": true,
                    "point": { "valueSuffix": "USD" },
                }
            })
        );
    }

    #[test]
    fn set_overwrites_existing_leaf() {
        let mut tree = json!({ "accessibility": { "description": "old" } });
        let path = OptionPath::new(["accessibility", "description"]);
        set_path(&mut tree, &path, json!("new")).expect("set");
        assert_eq!(tree, json!({ "accessibility": { "description": "new" } }));
    }

    // Pins the lossy policy: a scalar in the middle of a path gives way to a
    // fresh container instead of failing the write.
    #[test]
    fn set_replaces_non_object_intermediate() {
        let mut tree = json!({ "accessibility": "on" });
        let path = OptionPath::new(["accessibility", "point", "valueDecimals"]);
        set_path(&mut tree, &path, json!(2)).expect("set");
        assert_eq!(
            tree,
            json!({ "accessibility": { "point": { "valueDecimals": 2 } } })
        );
    }

    #[test]
    fn set_rejects_empty_path() {
        let mut tree = json!({});
        let err = set_path(&mut tree, &OptionPath::new(Vec::<String>::new()), json!(1)).unwrap_err();
        assert!(matches!(err, MigrateError::EmptyPath));
    }

    #[test]
    fn display_joins_keys_with_dots() {
        let path = OptionPath::new(["lang", "accessibility", "legendItem"]);
        assert_eq!(path.to_string(), "lang.accessibility.legendItem");
    }
}
