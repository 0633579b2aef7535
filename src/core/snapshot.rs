//! Immutable snapshots of an entity's state.
//!
//! A snapshot is an ordered mapping from string keys to [`Value`]s. Library
//! transformations never change a snapshot in place: they clone it and
//! override keys on the copy, so any snapshot a caller holds stays valid.

use super::ability::Ability;
use super::value::Value;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Point-in-time state of one entity.
///
/// Keys are open-ended. Overwriting an existing key keeps its position;
/// new keys are appended.
///
/// Equality compares entries regardless of order. Numbers compare by value,
/// with `NaN` equal to `NaN`. Abilities compare by identity: two snapshots
/// are equal only if their abilities share one captured snapshot, so two
/// containers fed the same `breathe_fire()` sequence end with unequal
/// snapshots even though their recipes match.
///
/// # Example
///
/// ```rust
/// use sprout::core::Snapshot;
///
/// let empty = Snapshot::new();
/// let fed = empty.with("soil", 10);
///
/// assert!(empty.is_empty());
/// assert_eq!(fed.number("soil"), Some(10.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    entries: IndexMap<String, Value>,
}

impl Snapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of this snapshot with `key` set to `value`.
    ///
    /// This is the only way library code derives one snapshot from another:
    /// copy every entry, then overwrite the target key.
    pub fn with(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Numeric value at `key`, if present and a number.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_number)
    }

    /// Text value at `key`, if present and text.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_text)
    }

    /// Ability at `key`, if present and an ability.
    pub fn ability(&self, key: &str) -> Option<&Ability> {
        self.get(key).and_then(Value::as_ability)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys whose value differs between `self` and `next`.
    ///
    /// Keys added or changed in `next` come first, in `next`'s order,
    /// followed by keys that `next` no longer has.
    pub fn changed_keys(&self, next: &Snapshot) -> Vec<String> {
        let mut changed: Vec<String> = next
            .entries
            .iter()
            .filter(|(key, value)| self.entries.get(key.as_str()) != Some(*value))
            .map(|(key, _)| key.clone())
            .collect();

        changed.extend(
            self.entries
                .keys()
                .filter(|key| !next.entries.contains_key(key.as_str()))
                .cloned(),
        );

        changed
    }
}

impl<K, V> FromIterator<(K, V)> for Snapshot
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Renders as compact JSON; abilities render as their recipe.
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_leaves_the_source_untouched() {
        let original = Snapshot::new().with("soil", 5);
        let updated = original.with("soil", 7);

        assert_eq!(original.number("soil"), Some(5.0));
        assert_eq!(updated.number("soil"), Some(7.0));
    }

    #[test]
    fn overwriting_keeps_key_position() {
        let snapshot = Snapshot::new()
            .with("soil", 1)
            .with("water", 2)
            .with("light", 3)
            .with("soil", 9);

        let keys: Vec<&str> = snapshot.keys().collect();
        assert_eq!(keys, vec!["soil", "water", "light"]);
    }

    #[test]
    fn typed_accessors_ignore_other_variants() {
        let snapshot = Snapshot::new().with("name", "Phil").with("soil", 3);

        assert_eq!(snapshot.text("name"), Some("Phil"));
        assert_eq!(snapshot.number("name"), None);
        assert_eq!(snapshot.text("soil"), None);
        assert!(snapshot.ability("soil").is_none());
        assert!(snapshot.get("water").is_none());
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a = Snapshot::new().with("soil", 1).with("water", 2);
        let b = Snapshot::new().with("water", 2).with("soil", 1);
        assert_eq!(a, b);
    }

    #[test]
    fn changed_keys_reports_additions_updates_and_removals() {
        let before = Snapshot::new().with("soil", 1).with("water", 2);
        let after: Snapshot = [("soil", Value::from(1)), ("light", Value::from(4))]
            .into_iter()
            .collect();

        assert_eq!(before.changed_keys(&after), vec!["light", "water"]);
        assert!(before.changed_keys(&before).is_empty());
    }

    #[test]
    fn nan_values_do_not_count_as_changed() {
        let snapshot = Snapshot::new().with("soil", f64::NAN);

        assert_eq!(snapshot, snapshot.clone());
        assert!(snapshot.changed_keys(&snapshot.clone()).is_empty());
    }

    #[test]
    fn displays_as_json_in_key_order() {
        let snapshot = Snapshot::new().with("soil", 10).with("name", "Phil");
        assert_eq!(snapshot.to_string(), r#"{"soil":10.0,"name":"Phil"}"#);
    }
}
