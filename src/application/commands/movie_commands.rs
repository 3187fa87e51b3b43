// src/application/commands/movie_commands.rs

use crate::application::{Catalog, CreateMovieDto, MovieDto, UpdateMovieDto};
use crate::domain::{parse_release_date, MovieCategory, MovieId, MovieSlots, Validation};
use crate::error::{AppError, AppResult};
use crate::services::UpdateMovieRequest;

use super::{non_empty, parse_movie_id, parse_optional_int, parse_person_id};

const EPISODE_NO_MALFORMED: &str = "The episode number must be a positive integer!";

pub fn list_movies(catalog: &Catalog) -> Vec<MovieDto> {
    let registries = catalog.registries();
    registries
        .movies
        .values()
        .map(|movie| MovieDto::from_movie(movie, registries))
        .collect()
}

pub fn get_movie(catalog: &Catalog, movie_id: &str) -> AppResult<MovieDto> {
    let id: MovieId = movie_id.parse()?;
    let registries = catalog.registries();
    registries
        .movies
        .get(&id)
        .map(|movie| MovieDto::from_movie(movie, registries))
        .ok_or_else(|| AppError::NotFound(format!("Movie {}", id)))
}

pub fn create_movie(catalog: &mut Catalog, dto: CreateMovieDto) -> AppResult<MovieDto> {
    let slots = movie_slots(dto)?;
    let id = catalog.add_movie(slots)?;
    catalog.save_all()?;
    get_movie(catalog, &id.to_string())
}

pub fn update_movie(catalog: &mut Catalog, dto: UpdateMovieDto) -> AppResult<MovieDto> {
    let request = update_request(dto)?;
    let id = request.movie_id;
    catalog.update_movie(request)?;
    catalog.save_all()?;
    get_movie(catalog, &id.to_string())
}

pub fn delete_movie(catalog: &mut Catalog, movie_id: &str) -> AppResult<()> {
    let id: MovieId = movie_id.parse()?;
    catalog.destroy_movie(id)?;
    catalog.save_all()
}

fn movie_slots(dto: CreateMovieDto) -> Validation<MovieSlots> {
    let category = non_empty(dto.category)
        .map(|text| text.parse::<MovieCategory>())
        .transpose()?;
    let actor_id_refs = dto
        .actor_ids
        .iter()
        .map(|text| parse_person_id(text))
        .collect::<Validation<Vec<i64>>>()?;

    Ok(MovieSlots {
        movie_id: Some(parse_movie_id(&dto.movie_id)?),
        title: Some(dto.title),
        release_date: Some(parse_release_date(&dto.release_date)?),
        director_id: Some(parse_person_id(&dto.director_id)?),
        actor_id_refs,
        category,
        tv_series_name: non_empty(dto.tv_series_name),
        episode_no: parse_optional_int(dto.episode_no.as_deref(), EPISODE_NO_MALFORMED)?,
        about: non_empty(dto.about),
    })
}

fn update_request(dto: UpdateMovieDto) -> Validation<UpdateMovieRequest> {
    let movie_id: MovieId = dto.movie_id.parse()?;
    let category = match dto.category.as_deref().map(str::trim) {
        None => None,
        Some("") => Some(None),
        Some(text) => Some(Some(text.parse::<MovieCategory>()?)),
    };
    let parse_ids = |ids: &[String]| {
        ids.iter()
            .map(|text| parse_person_id(text))
            .collect::<Validation<Vec<i64>>>()
    };

    Ok(UpdateMovieRequest {
        title: dto.title,
        release_date: dto
            .release_date
            .as_deref()
            .map(parse_release_date)
            .transpose()?,
        director_id: dto
            .director_id
            .as_deref()
            .map(parse_person_id)
            .transpose()?,
        actor_id_refs_to_add: parse_ids(&dto.add_actor_ids)?,
        actor_id_refs_to_remove: parse_ids(&dto.remove_actor_ids)?,
        category,
        tv_series_name: non_empty(dto.tv_series_name),
        episode_no: parse_optional_int(dto.episode_no.as_deref(), EPISODE_NO_MALFORMED)?,
        about: non_empty(dto.about),
        ..UpdateMovieRequest::new(movie_id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ViolationKind;
    use pretty_assertions::assert_eq;

    fn seeded() -> Catalog {
        let mut catalog = Catalog::in_memory();
        catalog.generate_test_data().unwrap();
        catalog
    }

    #[test]
    fn test_create_biography_from_text() {
        let mut catalog = seeded();
        let dto = create_movie(
            &mut catalog,
            CreateMovieDto {
                movie_id: "7".to_string(),
                title: "Gladiator".to_string(),
                release_date: "2000-05-05".to_string(),
                director_id: "2".to_string(),
                actor_ids: vec!["9".to_string()],
                category: Some("2".to_string()),
                about: Some("Maximus".to_string()),
                ..CreateMovieDto::default()
            },
        )
        .unwrap();

        assert_eq!(dto.id, 7);
        assert_eq!(dto.category.as_deref(), Some("Biography"));
        assert_eq!(dto.actors.len(), 1);
    }

    #[test]
    fn test_create_with_malformed_date() {
        let mut catalog = seeded();
        let err = create_movie(
            &mut catalog,
            CreateMovieDto {
                movie_id: "7".to_string(),
                title: "Gladiator".to_string(),
                release_date: "05/05/2000".to_string(),
                director_id: "2".to_string(),
                ..CreateMovieDto::default()
            },
        )
        .unwrap_err();

        assert_eq!(err.violation().map(|v| v.kind()), Some(ViolationKind::Pattern));
        assert_eq!(list_movies(&catalog).len(), 6);
    }

    #[test]
    fn test_update_with_empty_category_is_frozen() {
        let mut catalog = seeded();
        let err = update_movie(
            &mut catalog,
            UpdateMovieDto {
                movie_id: "4".to_string(),
                category: Some(String::new()),
                ..UpdateMovieDto::default()
            },
        )
        .unwrap_err();

        assert_eq!(err.violation().map(|v| v.kind()), Some(ViolationKind::FrozenValue));
    }

    #[test]
    fn test_update_cast_from_text() {
        let mut catalog = seeded();
        let dto = update_movie(
            &mut catalog,
            UpdateMovieDto {
                movie_id: "6".to_string(),
                add_actor_ids: vec!["7".to_string()],
                remove_actor_ids: vec!["11".to_string()],
                ..UpdateMovieDto::default()
            },
        )
        .unwrap();

        let cast: Vec<u32> = dto.actors.iter().map(|actor| actor.id).collect();
        assert_eq!(cast, vec![6, 7]);
    }

    #[test]
    fn test_delete_unknown_movie() {
        let mut catalog = seeded();
        let err = delete_movie(&mut catalog, "42").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
