// Shared fixtures for unit tests

use chrono::NaiveDate;

use super::Registries;
use crate::domain::{
    Actor, ActorSlots, Director, DirectorSlots, Movie, MovieSlots, Person, PersonId, PersonSlots,
};

pub(crate) fn pid(raw: i64) -> PersonId {
    PersonId::new(raw).unwrap()
}

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Directors 1-3, actors 3-6 (3 is both), plain person 14
pub(crate) fn registries_with_cast() -> Registries {
    let mut registries = Registries::new();
    let nash = Person::new(PersonSlots::new(14, "John Forbes Nash"), &registries).unwrap();
    registries.insert_person(nash);
    for (id, name) in [(1, "Stephen Frears"), (2, "George Lucas"), (3, "Quentin Tarantino")] {
        let director = Director::new(DirectorSlots::new(id, name), &registries).unwrap();
        registries.insert_director(director);
    }
    let actors = [
        ActorSlots::new(3, "Quentin Tarantino"),
        ActorSlots::new(4, "Uma Thurman").with_agent("John Doe"),
        ActorSlots::new(5, "John Travolta"),
        ActorSlots::new(6, "Ewan McGregor"),
    ];
    for slots in actors {
        let actor = Actor::new(slots, &registries).unwrap();
        registries.insert_actor(actor);
    }
    registries
}

/// The cast plus "Pulp Fiction" (1) and "Dangerous Liaisons" (3)
pub(crate) fn registries_with_movies() -> Registries {
    let mut registries = registries_with_cast();
    let pulp_fiction = Movie::new(
        MovieSlots::new(1, "Pulp Fiction", date(1994, 5, 12), 3).with_actors([3, 4, 5]),
        &registries,
    )
    .unwrap();
    registries.movies.insert(pulp_fiction);
    let liaisons = Movie::new(
        MovieSlots::new(3, "Dangerous Liaisons", date(1988, 12, 16), 1).with_actors([4, 6]),
        &registries,
    )
    .unwrap();
    registries.movies.insert(liaisons);
    registries
}
