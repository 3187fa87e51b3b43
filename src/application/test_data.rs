// src/application/test_data.rs
//
// Demo data set used by `Catalog::generate_test_data`

use chrono::NaiveDate;

use crate::domain::{ActorSlots, DirectorSlots, MovieSlots, PersonSlots};

const AGENT_JOHN_DOE: &str = "John Doe";
const AGENT_JANE_DOE: &str = "Jane Doe";

pub(crate) fn people() -> Vec<PersonSlots> {
    vec![
        PersonSlots::new(14, "John Forbes Nash"),
        PersonSlots::new(15, AGENT_JOHN_DOE),
        PersonSlots::new(16, AGENT_JANE_DOE),
    ]
}

pub(crate) fn directors() -> Vec<DirectorSlots> {
    vec![
        DirectorSlots::new(1, "Stephen Frears"),
        DirectorSlots::new(2, "George Lucas"),
        DirectorSlots::new(3, "Quentin Tarantino"),
        DirectorSlots::new(9, "Russell Crowe"),
        DirectorSlots::new(13, "Marc Forster"),
    ]
}

pub(crate) fn actors() -> Vec<ActorSlots> {
    vec![
        ActorSlots::new(3, "Quentin Tarantino"),
        ActorSlots::new(4, "Uma Thurman").with_agent(AGENT_JOHN_DOE),
        ActorSlots::new(5, "John Travolta"),
        ActorSlots::new(6, "Ewan McGregor"),
        ActorSlots::new(7, "Natalie Portman"),
        ActorSlots::new(8, "Keanu Reeves").with_agent(AGENT_JANE_DOE),
        ActorSlots::new(9, "Russell Crowe"),
        ActorSlots::new(10, "Seth MacFarlane"),
        ActorSlots::new(11, "Naomi Watts"),
        ActorSlots::new(12, "Ed Harris").with_agent(AGENT_JOHN_DOE),
    ]
}

pub(crate) fn movies() -> Vec<MovieSlots> {
    vec![
        MovieSlots::new(1, "Pulp Fiction", date(1994, 5, 12), 3).with_actors([3, 4, 5]),
        MovieSlots::new(2, "Star Wars", date(1999, 8, 19), 2).with_actors([6, 7]),
        MovieSlots::new(3, "Dangerous Liaisons", date(1988, 12, 16), 1).with_actors([8, 4]),
        MovieSlots::new(4, "2015", date(2019, 6, 30), 1)
            .with_actors([9, 10, 11])
            .tv_series_episode("The Loudest Voice", 6),
        MovieSlots::new(5, "A Beautiful Mind", date(2001, 12, 21), 9)
            .with_actors([9, 12])
            .biography("John Forbes Nash"),
        MovieSlots::new(6, "Stay", date(2005, 9, 24), 13).with_actors([6, 11]),
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
