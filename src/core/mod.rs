//! Core snapshot types and transformations.
//!
//! This module contains the pure functional core:
//! - Snapshots and the values they hold
//! - The delta factory for numeric resource changes
//! - Naming and ability attachment
//! - Immutable apply history
//!
//! Nothing in this module holds mutable state except an ability's captured
//! snapshot, which only changes when the ability is invoked.

mod ability;
mod delta;
mod error;
mod history;
mod naming;
mod snapshot;
mod transform;
mod value;

pub use ability::{breathe_fire, grant_ability, Ability, AbilityBinding, AbilityRecipe, FIRE};
pub use delta::{feed, give_light, hydrate, make_delta, Delta, DeltaFactory, LIGHT, SOIL, WATER};
pub use error::StateError;
pub use history::{ApplyHistory, ApplyRecord, DEFAULT_HISTORY_LIMIT};
pub use naming::{give_name, NAME};
pub use snapshot::Snapshot;
pub use transform::{Transform, TransformFn, IDENTITY};
pub use value::Value;
