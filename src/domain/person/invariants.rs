use super::entity::PersonKind;
use crate::domain::{is_blank, ConstraintViolation, PersonId, Validation};
use crate::registry::Registries;

/// Format check only; an absent id is acceptable where the id is an optional reference
pub fn check_person_id(id: Option<i64>) -> Validation<Option<PersonId>> {
    id.map(PersonId::new).transpose()
}

/// Checks a person id used as the identifier of a new record of `kind`.
///
/// Uniqueness is checked against the concrete type's own registry. For a plain
/// Person that registry is the whole identity space (every subtype included).
pub fn check_person_id_as_id(
    id: Option<i64>,
    kind: PersonKind,
    registries: &Registries,
) -> Validation<PersonId> {
    let id = check_person_id(id)?.ok_or_else(|| {
        ConstraintViolation::MandatoryValue(
            "A positive integer value for the person ID is required!".to_string(),
        )
    })?;
    if registries.contains_person(kind, id) {
        return Err(ConstraintViolation::Uniqueness(format!(
            "There is already a {} record with this person ID!",
            kind.label()
        )));
    }
    Ok(id)
}

/// Checks a person id used as a reference: it must exist in the identity space
pub fn check_person_id_as_reference(
    id: Option<i64>,
    registries: &Registries,
) -> Validation<Option<PersonId>> {
    let id = check_person_id(id)?;
    if let Some(id) = id {
        if !registries.has_identity(id) {
            return Err(ConstraintViolation::ReferentialIntegrity(
                "There is no person record with this person ID!".to_string(),
            ));
        }
    }
    Ok(id)
}

pub fn check_name(name: Option<&str>) -> Validation {
    match name {
        None | Some("") => Err(ConstraintViolation::MandatoryValue(
            "A name must be provided!".to_string(),
        )),
        Some(n) if is_blank(n) => Err(ConstraintViolation::Range(
            "The name must be a non-empty string!".to_string(),
        )),
        Some(_) => Ok(()),
    }
}

/// A new role for an identifier that is already known must carry the
/// identity's name
pub fn check_name_matches_identity(
    id: PersonId,
    name: &str,
    registries: &Registries,
) -> Validation {
    match registries.person_name(id) {
        Some(existing) if existing != name => Err(ConstraintViolation::Uniqueness(format!(
            "Person ID {} already belongs to {}!",
            id, existing
        ))),
        _ => Ok(()),
    }
}

// Person invariants:
//
// 1. The id is a positive integer
// 2. The id is unique within the concrete type's own registry
// 3. A plain Person id is unique across the whole identity space
// 4. The name is a non-blank string, shared by every role of the identity
// 5. The id never changes after construction
