//! Sprout: pure snapshot deltas and isolated state containers
//!
//! Sprout threads an evolving, immutable snapshot through a stream of pure
//! transformations. The transformations never mutate their input; the only
//! mutable state lives privately inside a [`Container`], which changes it
//! solely through [`Container::apply`].
//!
//! # Core Concepts
//!
//! - **Snapshot**: Ordered key/value state of one entity at one point in time
//! - **Delta**: Curried, pure increment of a numeric key (`make_delta`)
//! - **Transform**: Any labelled snapshot-to-snapshot function
//! - **Container**: Isolated owner of one evolving snapshot
//! - **Ability**: Capability value that consumes a resource when invoked
//!
//! # Example
//!
//! ```rust
//! use sprout::container::Container;
//! use sprout::core::{breathe_fire, give_name, make_delta, AbilityBinding, Transform};
//!
//! let feed = make_delta("soil").unwrap();
//! let cow_manure = Transform::from(feed.amount(5.0));
//!
//! let mut phil = Container::new();
//! phil.apply(&cow_manure).unwrap();
//! phil.apply(&cow_manure).unwrap();
//! phil.apply(&give_name("Phil")).unwrap();
//! phil.apply(&breathe_fire()).unwrap();
//!
//! let message = phil.invoke("fire", AbilityBinding::Container).unwrap();
//! assert_eq!(message, "The Phil uses the soil to generate fire. 9 soil left.");
//! ```

pub mod builder;
pub mod container;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, ContainerBuilder};
pub use container::{Container, ContainerId};
pub use crate::core::{make_delta, Delta, DeltaFactory, Snapshot, StateError, Transform, Value};
