//! Snapshot-to-snapshot transformations.
//!
//! Everything a container applies is a [`Transform`]: deltas, naming,
//! ability attachment, or any caller-supplied function.

use super::error::StateError;
use super::snapshot::Snapshot;
use std::fmt;
use std::sync::Arc;

/// Type alias for the function wrapped by a [`Transform`].
pub type TransformFn = Arc<dyn Fn(&Snapshot) -> Result<Snapshot, StateError> + Send + Sync>;

/// Label of the default transform used when none is supplied.
pub const IDENTITY: &str = "identity";

/// A labelled, cloneable function from one snapshot to the next.
///
/// The label appears in logs and in the container's apply history.
///
/// # Example
///
/// ```rust
/// use sprout::core::{Snapshot, Transform};
///
/// let sprout = Transform::new("sprout", |s: &Snapshot| s.with("height", 1));
/// let next = sprout.run(&Snapshot::new()).unwrap();
///
/// assert_eq!(next.number("height"), Some(1.0));
/// ```
#[derive(Clone)]
pub struct Transform {
    label: String,
    func: TransformFn,
}

impl Transform {
    /// Wrap an infallible function.
    pub fn new<F>(label: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Snapshot) -> Snapshot + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            func: Arc::new(move |snapshot: &Snapshot| Ok(func(snapshot))),
        }
    }

    /// Wrap a function that may refuse to produce a new snapshot.
    pub fn fallible<F>(label: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Snapshot) -> Result<Snapshot, StateError> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            func: Arc::new(func),
        }
    }

    /// The transform applied when a caller supplies none: returns an
    /// unchanged copy of its input.
    pub fn identity() -> Self {
        Self::new(IDENTITY, |snapshot: &Snapshot| snapshot.clone())
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Compute the next snapshot from `snapshot`.
    pub fn run(&self, snapshot: &Snapshot) -> Result<Snapshot, StateError> {
        (self.func)(snapshot)
    }

    /// Compose with `next`, running `self` first.
    ///
    /// Stops at the first failure.
    pub fn then(self, next: Transform) -> Transform {
        let label = format!("{} then {}", self.label, next.label);
        Self::fallible(label, move |snapshot| next.run(&self.run(snapshot)?))
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
