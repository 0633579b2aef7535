//! Builder API for ergonomic container and snapshot construction.
//!
//! This module provides a fluent builder for containers and the
//! [`snapshot!`](crate::snapshot) macro for snapshot literals.

pub mod container;
pub mod error;
pub mod macros;

pub use container::ContainerBuilder;
pub use crate::core::DEFAULT_HISTORY_LIMIT;
pub use error::BuildError;

use crate::core::{feed, give_light, hydrate, Transform};

/// Create the standard care transforms for one resource amount:
/// soil, water, and light, each incremented by `amount`.
///
/// # Example
///
/// ```
/// use sprout::builder::care_package;
/// use sprout::container::Container;
///
/// let mut plant = Container::new();
/// for transform in care_package(2.0) {
///     plant.apply(&transform).unwrap();
/// }
///
/// let state = plant.apply(None).unwrap();
/// assert_eq!(state.number("light"), Some(2.0));
/// ```
pub fn care_package(amount: f64) -> Vec<Transform> {
    vec![
        feed().amount(amount).into(),
        hydrate().amount(amount).into(),
        give_light().amount(amount).into(),
    ]
}
