pub mod category;
pub mod entity;
pub mod invariants;

pub use category::{MovieCategory, MovieSegment, SegmentFields};
pub use entity::{Movie, MovieSlots};
pub use invariants::{
    check_about, check_actor, check_category, check_director, check_episode_no, check_movie_id,
    check_movie_id_as_id, check_release_date, check_title, check_tv_series_name,
    parse_release_date, release_date_min, validate_movie, TITLE_LENGTH_MAX,
};
