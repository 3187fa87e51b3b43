pub mod entity;

pub use entity::{Director, DirectorSlots};
