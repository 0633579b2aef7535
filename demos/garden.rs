//! Garden
//!
//! This demo grows three plants from shared libraries of transforms.
//!
//! Key concepts:
//! - Partially applied deltas built once and reused across containers
//! - Containers that never see each other's state
//! - Abilities bound to a captured snapshot versus the live container
//!
//! Run with: RUST_LOG=sprout=debug cargo run --example garden

use sprout::core::{
    breathe_fire, feed, give_light, give_name, hydrate, AbilityBinding, StateError, Transform, FIRE,
};
use sprout::{BuildError, Container, ContainerBuilder};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum GardenError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

fn plant(name: &str) -> Result<Container, BuildError> {
    ContainerBuilder::new().label(name).history_limit(8).build()
}

fn main() -> Result<(), GardenError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Garden Example ===\n");

    let roadside_dirt = Transform::from(feed().amount(1.0));
    let cow_manure = Transform::from(feed().amount(5.0));
    let superior_guano = Transform::from(feed().amount(10.0));
    let super_water = Transform::from(hydrate().amount(5.0));
    let sunbeam = Transform::from(give_light().amount(2.0));

    let mut phil = plant("Phil")?;
    let mut lucas = plant("Lucas")?;
    let mut genevieve = plant("Genevieve")?;

    println!("First feeding: {}", phil.apply(&cow_manure)?);
    println!("Second feeding: {}", phil.apply(&cow_manure)?);
    println!("Named: {}", phil.apply(&give_name("Phil"))?);

    lucas.apply(&give_name("Lucas"))?;
    lucas.apply(&roadside_dirt)?;
    println!("Lucas: {}", lucas.apply(&super_water)?);

    genevieve.apply(&give_name("Genevieve"))?;
    genevieve.apply(&superior_guano)?;
    println!("Genevieve: {}", genevieve.apply(&sunbeam)?);

    println!("\n--- Abilities ---");
    phil.apply(&breathe_fire())?;
    phil.apply(&superior_guano)?;

    println!("{}", phil.invoke(FIRE, AbilityBinding::Snapshot)?);
    println!("{}", phil.invoke(FIRE, AbilityBinding::Container)?);
    println!("Phil now: {}", phil.apply(None)?);

    println!("\nPhil touched: {:?}", phil.history().keys_touched());

    println!("\n=== Example Complete ===");
    Ok(())
}
