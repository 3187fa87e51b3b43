pub mod entity;
pub mod invariants;

pub use entity::{Actor, ActorSlots};
pub use invariants::check_agent;
