//! Naming transformation.

use super::snapshot::Snapshot;
use super::transform::Transform;

/// Reserved key holding an entity's name.
pub const NAME: &str = "name";

/// Build a transform that sets the `name` key to `new_name`.
///
/// All other keys are kept. Renaming overwrites the previous name in place.
///
/// # Example
///
/// ```rust
/// use sprout::core::{give_name, Snapshot};
///
/// let named = give_name("Phil").run(&Snapshot::new().with("soil", 10)).unwrap();
///
/// assert_eq!(named.text("name"), Some("Phil"));
/// assert_eq!(named.number("soil"), Some(10.0));
/// ```
pub fn give_name(new_name: impl Into<String>) -> Transform {
    let new_name = new_name.into();
    let label = format!("{NAME} = {new_name}");
    Transform::new(label, move |snapshot: &Snapshot| {
        snapshot.with(NAME, new_name.clone())
    })
}
