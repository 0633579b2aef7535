//! Abilities: capabilities attached to a snapshot as values.
//!
//! An ability is granted by a transform and stored under a key like any
//! other value. When granted, it captures its own copy of the snapshot it
//! was attached to. Invoking it later consumes a resource from that copy,
//! not from whatever container the snapshot came from, so after the
//! container moves on the ability keeps reporting the older state.
//!
//! Containers can instead run the same recipe against their live snapshot;
//! see [`AbilityBinding`] and `Container::invoke`.

use super::delta::SOIL;
use super::error::{validate_key, StateError};
use super::naming::NAME;
use super::snapshot::Snapshot;
use super::transform::Transform;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Key under which [`breathe_fire`] stores its ability.
pub const FIRE: &str = "fire";

/// Name used in messages when the snapshot has no `name`.
const UNNAMED: &str = "plant";

/// Which snapshot an ability acts on when invoked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AbilityBinding {
    /// The private snapshot copy captured when the ability was granted.
    #[default]
    Snapshot,

    /// The invoking container's current snapshot.
    Container,
}

/// What an ability does: consume `cost` of `resource` to perform `action`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AbilityRecipe {
    pub resource: String,
    pub cost: f64,
    pub action: String,
}

impl AbilityRecipe {
    pub fn new(resource: impl Into<String>, cost: f64, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            cost,
            action: action.into(),
        }
    }

    /// Consume the resource from `snapshot` (pure).
    ///
    /// Returns the next snapshot and the message describing the action.
    /// A missing or non-numeric resource counts as zero; the result may go
    /// negative.
    pub fn perform(&self, snapshot: &Snapshot) -> (Snapshot, String) {
        let remaining = snapshot.number(&self.resource).unwrap_or(0.0) - self.cost;
        let name = snapshot.text(NAME).unwrap_or(UNNAMED);
        let message = format!(
            "The {name} uses the {resource} to {action}. {remaining} {resource} left.",
            resource = self.resource,
            action = self.action,
        );
        (snapshot.with(self.resource.clone(), remaining), message)
    }
}

/// A capability bound to a captured snapshot.
///
/// Clones share the captured snapshot, so invoking any clone affects what
/// the others see.
#[derive(Clone)]
pub struct Ability {
    recipe: AbilityRecipe,
    bound: Arc<Mutex<Snapshot>>,
}

impl Ability {
    /// Bind `recipe` to its own copy of `snapshot`.
    pub fn bind(recipe: AbilityRecipe, snapshot: &Snapshot) -> Self {
        Self {
            recipe,
            bound: Arc::new(Mutex::new(snapshot.clone())),
        }
    }

    pub fn recipe(&self) -> &AbilityRecipe {
        &self.recipe
    }

    /// Perform the ability against the captured snapshot.
    ///
    /// The captured snapshot is replaced by the result, so repeated calls
    /// keep consuming from it.
    pub fn invoke(&self) -> String {
        let mut bound = self.bound.lock().unwrap_or_else(PoisonError::into_inner);
        let (next, message) = self.recipe.perform(&bound);
        *bound = next;
        tracing::trace!(
            action = %self.recipe.action,
            resource = %self.recipe.resource,
            "Invoked ability on captured snapshot"
        );
        message
    }

    /// Copy of the snapshot this ability currently acts on.
    pub fn captured(&self) -> Snapshot {
        self.bound
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Two abilities are equal when they share a recipe and a captured snapshot.
impl PartialEq for Ability {
    fn eq(&self, other: &Self) -> bool {
        self.recipe == other.recipe && Arc::ptr_eq(&self.bound, &other.bound)
    }
}

impl fmt::Debug for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ability")
            .field("recipe", &self.recipe)
            .finish_non_exhaustive()
    }
}

impl Serialize for Ability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.recipe.serialize(serializer)
    }
}

/// Build a transform that attaches `recipe` as an ability under `key`.
///
/// Each application captures a fresh copy of its input snapshot.
///
/// # Example
///
/// ```rust
/// use sprout::core::{grant_ability, AbilityRecipe, Snapshot};
///
/// let glow = grant_ability("glow", AbilityRecipe::new("light", 2.0, "glow")).unwrap();
/// let plant = glow.run(&Snapshot::new().with("light", 5)).unwrap();
///
/// let message = plant.ability("glow").unwrap().invoke();
/// assert_eq!(message, "The plant uses the light to glow. 3 light left.");
/// ```
pub fn grant_ability(
    key: impl Into<String>,
    recipe: AbilityRecipe,
) -> Result<Transform, StateError> {
    let key = validate_key(key.into())?;
    let recipe = AbilityRecipe {
        resource: validate_key(recipe.resource)?,
        ..recipe
    };
    let label = format!("grant {key}");

    Ok(Transform::new(label, move |snapshot: &Snapshot| {
        let ability = Ability::bind(recipe.clone(), snapshot);
        snapshot.with(key.clone(), ability)
    }))
}

/// Attach the `fire` ability: burns one soil to generate fire.
pub fn breathe_fire() -> Transform {
    let recipe = AbilityRecipe::new(SOIL, 1.0, "generate fire");
    let label = format!("grant {FIRE}");
    Transform::new(label, move |snapshot: &Snapshot| {
        snapshot.with(FIRE, Ability::bind(recipe.clone(), snapshot))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perform_is_pure_and_describes_the_action() {
        let recipe = AbilityRecipe::new("soil", 1.0, "generate fire");
        let snapshot = Snapshot::new().with("soil", 10).with("name", "Phil");

        let (next, message) = recipe.perform(&snapshot);

        assert_eq!(message, "The Phil uses the soil to generate fire. 9 soil left.");
        assert_eq!(next.number("soil"), Some(9.0));
        assert_eq!(snapshot.number("soil"), Some(10.0));
    }

    #[test]
    fn unnamed_snapshots_use_placeholder() {
        let recipe = AbilityRecipe::new("water", 0.5, "sprout");
        let (_, message) = recipe.perform(&Snapshot::new());
        assert_eq!(message, "The plant uses the water to sprout. -0.5 water left.");
    }

    #[test]
    fn invoke_keeps_consuming_captured_snapshot() {
        let ability = Ability::bind(
            AbilityRecipe::new("soil", 1.0, "generate fire"),
            &Snapshot::new().with("soil", 3),
        );

        ability.invoke();
        let message = ability.invoke();

        assert!(message.ends_with("1 soil left."));
        assert_eq!(ability.captured().number("soil"), Some(1.0));
    }

    #[test]
    fn clones_share_the_captured_snapshot() {
        let ability = Ability::bind(
            AbilityRecipe::new("soil", 2.0, "generate fire"),
            &Snapshot::new().with("soil", 4),
        );
        let clone = ability.clone();

        clone.invoke();

        assert_eq!(ability.captured().number("soil"), Some(2.0));
        assert_eq!(ability, clone);
    }

    #[test]
    fn breathe_fire_attaches_ability_and_keeps_keys() {
        let snapshot = Snapshot::new().with("soil", 10).with("name", "Phil");
        let armed = breathe_fire().run(&snapshot).unwrap();

        assert_eq!(armed.number("soil"), Some(10.0));
        assert_eq!(armed.text("name"), Some("Phil"));
        assert!(armed.ability(FIRE).is_some());
        assert!(!snapshot.contains_key(FIRE));
    }

    #[test]
    fn captured_snapshot_is_detached_from_source() {
        let snapshot = Snapshot::new().with("soil", 10).with("name", "Phil");
        let armed = breathe_fire().run(&snapshot).unwrap();
        let fire = armed.ability(FIRE).unwrap();

        let message = fire.invoke();

        assert_eq!(message, "The Phil uses the soil to generate fire. 9 soil left.");
        assert_eq!(armed.number("soil"), Some(10.0));
    }

    #[test]
    fn grant_rejects_blank_keys() {
        let recipe = AbilityRecipe::new("soil", 1.0, "burn");
        assert!(matches!(
            grant_ability(" ", recipe.clone()),
            Err(StateError::InvalidKey { .. })
        ));

        let blank_resource = AbilityRecipe::new("", 1.0, "burn");
        assert!(grant_ability("burn", blank_resource).is_err());
    }

    #[test]
    fn ability_serializes_as_recipe() {
        let ability = Ability::bind(
            AbilityRecipe::new("soil", 1.0, "generate fire"),
            &Snapshot::new(),
        );
        let json = serde_json::to_string(&ability).unwrap();
        assert_eq!(
            json,
            r#"{"resource":"soil","cost":1.0,"action":"generate fire"}"#
        );
    }
}
