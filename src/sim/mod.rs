//! Reaction simulation module
//!
//! Pure and frame-driven:
//! - Host supplies the clock (ms) on every call
//! - Seeded RNG only
//! - Stable iteration order (creation order)
//! - No rendering or platform dependencies

pub mod bounds;
pub mod gate;
pub mod random;
pub mod simulation;
pub mod unit;

pub use bounds::{Bounds, BoundsProvider, SharedBounds};
pub use gate::{ActivityGate, HoverState};
pub use random::{random_int, thread_random_int};
pub use simulation::{Simulation, SimulationBuilder, SpawnOutcome, SpawnerMode, TickReport};
pub use unit::{ReactionUnit, fade_at};
