// src/application/commands/person_commands.rs
//
// Person, Actor and Director command handlers

use crate::application::{Catalog, CreatePersonDto, MovieDto, PersonDto, PersonMoviesDto, UpdatePersonDto};
use crate::domain::{ActorSlots, ConstraintViolation, Movie, PersonId, PersonKind, PersonSlots};
use crate::error::{AppError, AppResult};
use crate::services::{UpdateActorRequest, UpdateDirectorRequest, UpdatePersonRequest};

use super::{non_empty, parse_person_id};

/// List people. Without a role every identity appears once with all its roles;
/// with a role only that registry is listed.
pub fn list_people(catalog: &Catalog, role: Option<PersonKind>) -> Vec<PersonDto> {
    let registries = catalog.registries();
    match role {
        None => registries
            .person_summaries()
            .into_iter()
            .map(|summary| PersonDto::from_summary(summary, registries))
            .collect(),
        Some(PersonKind::Person) => registries.plain_people().map(PersonDto::from).collect(),
        Some(PersonKind::Actor) => registries.actors.values().map(PersonDto::from).collect(),
        Some(PersonKind::Director) => registries.directors.values().map(PersonDto::from).collect(),
    }
}

/// A person with the movies they directed and played in
pub fn get_person(catalog: &Catalog, person_id: &str) -> AppResult<PersonMoviesDto> {
    let id: PersonId = person_id.parse()?;
    let registries = catalog.registries();
    let summary = registries
        .person_summary(id)
        .ok_or_else(|| AppError::NotFound(format!("Person {}", id)))?;

    let to_dtos = |movies: Vec<&Movie>| -> Vec<MovieDto> {
        movies
            .into_iter()
            .map(|movie| MovieDto::from_movie(movie, registries))
            .collect()
    };

    Ok(PersonMoviesDto {
        person: PersonDto::from_summary(summary, registries),
        directed: to_dtos(catalog.movies_directed_by(id)),
        played: to_dtos(catalog.movies_played_by(id)),
    })
}

pub fn create_person(catalog: &mut Catalog, dto: CreatePersonDto) -> AppResult<PersonDto> {
    let person_id = parse_person_id(&dto.person_id)?;
    let agent = non_empty(dto.agent);
    if agent.is_some() && !dto.role.has_agent() {
        return Err(ConstraintViolation::Range(format!("A {} has no agent!", dto.role.label())).into());
    }

    let id = match dto.role {
        PersonKind::Person => catalog.add_person(PersonSlots::new(person_id, dto.name))?,
        PersonKind::Director => catalog.add_director(PersonSlots::new(person_id, dto.name))?,
        PersonKind::Actor => catalog.add_actor(ActorSlots {
            person_id: Some(person_id),
            name: Some(dto.name),
            agent,
        })?,
    };
    catalog.save_all()?;
    person_dto(catalog, dto.role, id)
}

pub fn update_person(catalog: &mut Catalog, dto: UpdatePersonDto) -> AppResult<PersonDto> {
    let id: PersonId = dto.person_id.parse()?;
    let name = non_empty(dto.name);

    match dto.role {
        PersonKind::Person => catalog.update_person(UpdatePersonRequest { person_id: id, name })?,
        PersonKind::Director => catalog.update_director(UpdateDirectorRequest { person_id: id, name })?,
        PersonKind::Actor => {
            let agent = if dto.clear_agent {
                Some(None)
            } else {
                non_empty(dto.agent).map(Some)
            };
            catalog.update_actor(UpdateActorRequest {
                person_id: id,
                name,
                agent,
            })?
        }
    }
    catalog.save_all()?;
    person_dto(catalog, dto.role, id)
}

pub fn delete_person(catalog: &mut Catalog, role: PersonKind, person_id: &str) -> AppResult<()> {
    let id: PersonId = person_id.parse()?;
    catalog.destroy_person(role, id)?;
    catalog.save_all()
}

fn person_dto(catalog: &Catalog, role: PersonKind, id: PersonId) -> AppResult<PersonDto> {
    let registries = catalog.registries();
    let dto = match role {
        PersonKind::Person => registries
            .person_summary(id)
            .map(|summary| PersonDto::from_summary(summary, registries)),
        PersonKind::Actor => registries.actors.get(&id).map(PersonDto::from),
        PersonKind::Director => registries.directors.get(&id).map(PersonDto::from),
    };
    dto.ok_or_else(|| AppError::NotFound(format!("{} {}", role, id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ViolationKind;

    fn seeded() -> Catalog {
        let mut catalog = Catalog::in_memory();
        catalog.generate_test_data().unwrap();
        catalog
    }

    #[test]
    fn test_list_people_by_role() {
        let catalog = seeded();
        assert_eq!(list_people(&catalog, None).len(), 16);
        assert_eq!(list_people(&catalog, Some(PersonKind::Person)).len(), 3);
        assert_eq!(list_people(&catalog, Some(PersonKind::Director)).len(), 5);
    }

    #[test]
    fn test_create_actor_with_agent() {
        let mut catalog = seeded();
        let dto = create_person(
            &mut catalog,
            CreatePersonDto {
                role: PersonKind::Actor,
                person_id: "17".to_string(),
                name: "Jennifer Connelly".to_string(),
                agent: Some("Jane Doe".to_string()),
            },
        )
        .unwrap();
        assert_eq!(dto.id, 17);
        assert_eq!(dto.agent.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_agent_for_director_is_rejected() {
        let mut catalog = seeded();
        let err = create_person(
            &mut catalog,
            CreatePersonDto {
                role: PersonKind::Director,
                person_id: "17".to_string(),
                name: "Ron Howard".to_string(),
                agent: Some("Jane Doe".to_string()),
            },
        )
        .unwrap_err();
        assert_eq!(err.violation().map(|v| v.kind()), Some(ViolationKind::Range));
    }

    #[test]
    fn test_get_person_lists_movies() {
        let catalog = seeded();
        let dto = get_person(&catalog, "9").unwrap();
        assert_eq!(dto.directed.len(), 1);
        assert_eq!(dto.played.len(), 2);
    }

    #[test]
    fn test_delete_director_keeps_movies() {
        let mut catalog = seeded();
        delete_person(&mut catalog, PersonKind::Director, "13").unwrap();
        let stay = &catalog.registries().movies_played_by(PersonId::new(11).unwrap());
        assert!(stay.iter().any(|movie| movie.title() == "Stay" && movie.director().is_none()));
    }
}
