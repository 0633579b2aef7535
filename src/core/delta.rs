//! The delta factory: curried builders for numeric resource changes.
//!
//! A delta is built in three stages, each fixing one piece:
//!
//! 1. [`make_delta`] fixes *which* key is affected,
//! 2. [`DeltaFactory::amount`] fixes *how much*,
//! 3. [`Delta::apply_to`] supplies the snapshot it is applied to.
//!
//! Each stage is a plain value, so partial applications such as "feed 10
//! soil" can be built once and shared between any number of containers.

use super::error::{validate_key, StateError};
use super::snapshot::Snapshot;
use super::transform::Transform;
use serde::Serialize;

/// Resource key for soil.
pub const SOIL: &str = "soil";
/// Resource key for water.
pub const WATER: &str = "water";
/// Resource key for light.
pub const LIGHT: &str = "light";

/// First stage of the factory: a key waiting for an amount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeltaFactory {
    key: String,
}

/// A pure increment of one numeric key.
///
/// Applying the same delta to the same snapshot always yields the same
/// result, and nothing outside the input snapshot is read or written.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Delta {
    key: String,
    amount: f64,
}

/// Start a delta for `key`.
///
/// Fails with [`StateError::InvalidKey`] when the key is empty or blank.
///
/// # Example
///
/// ```rust
/// use sprout::core::{make_delta, Snapshot};
///
/// let feed = make_delta("soil").unwrap();
/// let superior_guano = feed.amount(10.0);
///
/// let fed = superior_guano.apply_to(&Snapshot::new());
/// assert_eq!(fed.number("soil"), Some(10.0));
/// ```
pub fn make_delta(key: impl Into<String>) -> Result<DeltaFactory, StateError> {
    Ok(DeltaFactory {
        key: validate_key(key.into())?,
    })
}

/// Factory for `soil` deltas.
pub fn feed() -> DeltaFactory {
    DeltaFactory {
        key: SOIL.to_string(),
    }
}

/// Factory for `water` deltas.
pub fn hydrate() -> DeltaFactory {
    DeltaFactory {
        key: WATER.to_string(),
    }
}

/// Factory for `light` deltas.
pub fn give_light() -> DeltaFactory {
    DeltaFactory {
        key: LIGHT.to_string(),
    }
}

impl DeltaFactory {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Fix the amount. Negative amounts consume the resource.
    ///
    /// No validation is done: a `NaN` amount yields `NaN` on application.
    pub fn amount(&self, amount: f64) -> Delta {
        Delta {
            key: self.key.clone(),
            amount,
        }
    }

    /// Like [`amount`](Self::amount) but rejects non-finite amounts.
    pub fn checked_amount(&self, amount: f64) -> Result<Delta, StateError> {
        if !amount.is_finite() {
            return Err(StateError::NonNumericAmount {
                key: self.key.clone(),
                amount,
            });
        }
        Ok(self.amount(amount))
    }
}

impl Delta {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Return a copy of `snapshot` with the key incremented by the amount.
    ///
    /// A missing or non-numeric value counts as zero. Every other key is
    /// carried over unchanged and in its original order.
    pub fn apply_to(&self, snapshot: &Snapshot) -> Snapshot {
        let current = snapshot.number(&self.key).unwrap_or(0.0);
        snapshot.with(self.key.clone(), current + self.amount)
    }
}

impl From<Delta> for Transform {
    fn from(delta: Delta) -> Self {
        let label = format!("{} {:+}", delta.key, delta.amount);
        Transform::new(label, move |snapshot: &Snapshot| delta.apply_to(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feeding_an_empty_snapshot_sets_the_amount() {
        let fed = make_delta("soil").unwrap().amount(10.0).apply_to(&Snapshot::new());
        assert_eq!(fed, Snapshot::new().with("soil", 10));
    }

    #[test]
    fn empty_key_is_rejected() {
        assert_eq!(
            make_delta(""),
            Err(StateError::InvalidKey { key: String::new() })
        );
    }

    #[test]
    fn increments_existing_value() {
        let snapshot = Snapshot::new().with("water", 2.5);
        let result = hydrate().amount(1.5).apply_to(&snapshot);
        assert_eq!(result.number("water"), Some(4.0));
    }

    #[test]
    fn negative_amount_consumes() {
        let snapshot = Snapshot::new().with("light", 3);
        let result = give_light().amount(-5.0).apply_to(&snapshot);
        assert_eq!(result.number("light"), Some(-2.0));
    }

    #[test]
    fn non_numeric_value_counts_as_zero() {
        let snapshot = Snapshot::new().with("soil", "rich");
        let result = feed().amount(4.0).apply_to(&snapshot);
        assert_eq!(result.number("soil"), Some(4.0));
    }

    #[test]
    fn other_keys_are_preserved_in_order() {
        let snapshot = Snapshot::new()
            .with("name", "Phil")
            .with("soil", 1)
            .with("water", 2);

        let result = feed().amount(1.0).apply_to(&snapshot);

        let keys: Vec<&str> = result.keys().collect();
        assert_eq!(keys, vec!["name", "soil", "water"]);
        assert_eq!(result.text("name"), Some("Phil"));
        assert_eq!(result.number("water"), Some(2.0));
    }

    #[test]
    fn input_snapshot_is_not_mutated() {
        let snapshot = Snapshot::new().with("soil", 1);
        let before = snapshot.clone();

        let _ = feed().amount(5.0).apply_to(&snapshot);

        assert_eq!(snapshot, before);
    }

    #[test]
    fn nan_propagates_without_checking() {
        let result = feed().amount(f64::NAN).apply_to(&Snapshot::new());
        assert!(result.number("soil").is_some_and(f64::is_nan));
    }

    #[test]
    fn checked_amount_rejects_non_finite() {
        assert!(matches!(
            feed().checked_amount(f64::INFINITY),
            Err(StateError::NonNumericAmount { .. })
        ));
        assert_eq!(feed().checked_amount(2.0).unwrap().amount(), 2.0);
    }

    #[test]
    fn converts_into_labelled_transform() {
        let transform = Transform::from(feed().amount(5.0));
        assert_eq!(transform.label(), "soil +5");

        let result = transform.run(&Snapshot::new()).unwrap();
        assert_eq!(result.number("soil"), Some(5.0));
    }

    #[test]
    fn factory_is_reusable() {
        let cow_manure = feed().amount(5.0);
        let a = cow_manure.apply_to(&Snapshot::new());
        let b = cow_manure.apply_to(&a);
        assert_eq!(b.number("soil"), Some(10.0));
    }
}
