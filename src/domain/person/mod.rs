pub mod entity;
pub mod invariants;

pub use entity::{Person, PersonKind, PersonSlots};
pub use invariants::{
    check_name, check_name_matches_identity, check_person_id, check_person_id_as_id,
    check_person_id_as_reference,
};
