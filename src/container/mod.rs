//! State containers: the "imperative shell" around the pure core.
//!
//! A [`Container`] owns one evolving [`Snapshot`] and changes it only
//! through [`Container::apply`]. Each apply computes the next snapshot
//! first and swaps it in only on success, so a failing (or panicking)
//! transform leaves the container exactly as it was.

use crate::core::{
    AbilityBinding, ApplyHistory, ApplyRecord, Snapshot, StateError, Transform,
    DEFAULT_HISTORY_LIMIT,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identity of a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId(Uuid);

impl ContainerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ContainerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Isolated accumulator of one entity's snapshot.
///
/// Every container starts from an empty snapshot and never shares it: two
/// containers fed the same transforms end with equal but separate
/// snapshots.
///
/// # Example
///
/// ```rust
/// use sprout::container::Container;
/// use sprout::core::{feed, give_name, Snapshot, Transform};
///
/// let blue_food = Transform::from(feed().amount(5.0));
/// let mut phil = Container::new();
///
/// phil.apply(&blue_food).unwrap();
/// phil.apply(&blue_food).unwrap();
/// let state = phil.apply(&give_name("Phil")).unwrap();
///
/// assert_eq!(state, Snapshot::new().with("soil", 10).with("name", "Phil"));
/// ```
pub struct Container {
    id: ContainerId,
    label: Option<String>,
    current: Snapshot,
    history: ApplyHistory,
    applied: u64,
}

impl Container {
    /// Create a container with an empty snapshot that keeps the last
    /// [`DEFAULT_HISTORY_LIMIT`] apply records.
    ///
    /// Use `ContainerBuilder` for a label or a different history policy.
    pub fn new() -> Self {
        Self::with_parts(None, ApplyHistory::bounded(DEFAULT_HISTORY_LIMIT))
    }

    pub(crate) fn with_parts(label: Option<String>, history: ApplyHistory) -> Self {
        Self {
            id: ContainerId::new(),
            label,
            current: Snapshot::new(),
            history,
            applied: 0,
        }
    }

    pub fn id(&self) -> ContainerId {
        self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Record of successful applies (key names only).
    pub fn history(&self) -> &ApplyHistory {
        &self.history
    }

    /// Apply `transform` to the current snapshot.
    ///
    /// Passing `None` applies [`Transform::identity`], which returns the
    /// current snapshot unchanged. On success the internal snapshot is
    /// replaced by the result and an owned copy is returned. On failure the
    /// error is returned and the internal snapshot is not touched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sprout::container::Container;
    /// use sprout::core::Snapshot;
    ///
    /// let mut brown_box = Container::new();
    /// assert_eq!(brown_box.apply(None).unwrap(), Snapshot::new());
    /// ```
    pub fn apply<'a>(
        &mut self,
        transform: impl Into<Option<&'a Transform>>,
    ) -> Result<Snapshot, StateError> {
        let identity;
        let transform = match transform.into() {
            Some(transform) => transform,
            None => {
                identity = Transform::identity();
                &identity
            }
        };

        let next = transform.run(&self.current).inspect_err(|err| {
            tracing::warn!(
                container = %self.id,
                transform = transform.label(),
                error = %err,
                "Transform failed, snapshot left unchanged"
            );
        })?;

        Ok(self.swap(transform.label(), next))
    }

    /// Invoke the ability stored under `key`.
    ///
    /// With [`AbilityBinding::Snapshot`] the ability acts on the snapshot it
    /// captured when granted, and this container is not changed. With
    /// [`AbilityBinding::Container`] its recipe runs against this
    /// container's current snapshot as a single apply.
    pub fn invoke(&mut self, key: &str, binding: AbilityBinding) -> Result<String, StateError> {
        let ability = match self.current.get(key) {
            None => {
                return Err(StateError::MissingKey {
                    key: key.to_string(),
                })
            }
            Some(value) => value.as_ability().ok_or_else(|| StateError::NotAnAbility {
                key: key.to_string(),
            })?,
        };

        match binding {
            AbilityBinding::Snapshot => Ok(ability.invoke()),
            AbilityBinding::Container => {
                let (next, message) = ability.recipe().perform(&self.current);
                self.swap(&format!("invoke {key}"), next);
                Ok(message)
            }
        }
    }

    fn swap(&mut self, label: &str, next: Snapshot) -> Snapshot {
        let changed_keys = self.current.changed_keys(&next);
        self.applied += 1;

        tracing::debug!(
            container = %self.id,
            transform = label,
            sequence = self.applied,
            keys = next.len(),
            changed = changed_keys.len(),
            "Applied transform"
        );

        self.history.push(ApplyRecord {
            sequence: self.applied,
            transform: label.to_string(),
            changed_keys,
            timestamp: Utc::now(),
        });
        self.current = next;
        self.current.clone()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

/// Shows identity only; the snapshot stays private.
impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("applied", &self.applied)
            .finish_non_exhaustive()
    }
}
