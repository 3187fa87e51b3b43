use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::invariants::{check_about, check_category, check_episode_no, check_tv_series_name};
use crate::domain::{ConstraintViolation, Validation};

/// Disjoint, optional movie categories.
///
/// Codes are 1-based: 1 = TvSeriesEpisode, 2 = Biography. The same codes
/// are used for input, updates and the persisted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MovieCategory {
    TvSeriesEpisode,
    Biography,
}

impl MovieCategory {
    pub const ALL: [MovieCategory; 2] = [MovieCategory::TvSeriesEpisode, MovieCategory::Biography];

    pub fn code(self) -> u8 {
        match self {
            MovieCategory::TvSeriesEpisode => 1,
            MovieCategory::Biography => 2,
        }
    }

    pub fn from_code(code: i64) -> Validation<Self> {
        check_category(code)
    }

    pub fn label(self) -> &'static str {
        match self {
            MovieCategory::TvSeriesEpisode => "TV series episode",
            MovieCategory::Biography => "Biography",
        }
    }
}

impl TryFrom<u8> for MovieCategory {
    type Error = ConstraintViolation;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(i64::from(code))
    }
}

impl From<MovieCategory> for u8 {
    fn from(category: MovieCategory) -> Self {
        category.code()
    }
}

impl FromStr for MovieCategory {
    type Err = ConstraintViolation;

    /// Accepts the numeric code or the variant name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i64>() {
            return Self::from_code(code);
        }
        match s.to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "tvseriesepisode" => Ok(MovieCategory::TvSeriesEpisode),
            "biography" => Ok(MovieCategory::Biography),
            _ => Err(ConstraintViolation::Range(format!(
                "Invalid value for category: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for MovieCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieCategory::TvSeriesEpisode => write!(f, "TvSeriesEpisode"),
            MovieCategory::Biography => write!(f, "Biography"),
        }
    }
}

/// Proposed values for the category-specific fields of a movie
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentFields {
    pub tv_series_name: Option<String>,
    pub episode_no: Option<i64>,
    pub about: Option<String>,
}

impl SegmentFields {
    pub fn is_empty(&self) -> bool {
        self.tv_series_name.as_deref().map_or(true, str::is_empty)
            && self.episode_no.is_none()
            && self.about.as_deref().map_or(true, str::is_empty)
    }

    /// Checks that every supplied field belongs to `category` and that the
    /// fields `category` requires are present
    pub fn check(&self, category: Option<MovieCategory>) -> Validation {
        check_tv_series_name(self.tv_series_name.as_deref(), category)?;
        check_episode_no(self.episode_no, category)?;
        check_about(self.about.as_deref(), category)?;
        Ok(())
    }
}

/// The category-specific fields of a categorized movie
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieSegment {
    TvSeriesEpisode {
        tv_series_name: String,
        episode_no: u32,
    },
    Biography {
        about: String,
    },
}

impl MovieSegment {
    pub fn build(category: MovieCategory, fields: SegmentFields) -> Validation<Self> {
        fields.check(Some(category))?;
        let segment = match category {
            MovieCategory::TvSeriesEpisode => MovieSegment::TvSeriesEpisode {
                tv_series_name: fields.tv_series_name.unwrap_or_default(),
                episode_no: fields
                    .episode_no
                    .and_then(|n| u32::try_from(n).ok())
                    .unwrap_or_default(),
            },
            MovieCategory::Biography => MovieSegment::Biography {
                about: fields.about.unwrap_or_default(),
            },
        };
        Ok(segment)
    }

    pub fn category(&self) -> MovieCategory {
        match self {
            MovieSegment::TvSeriesEpisode { .. } => MovieCategory::TvSeriesEpisode,
            MovieSegment::Biography { .. } => MovieCategory::Biography,
        }
    }

    pub fn tv_series_name(&self) -> Option<&str> {
        match self {
            MovieSegment::TvSeriesEpisode { tv_series_name, .. } => Some(tv_series_name),
            MovieSegment::Biography { .. } => None,
        }
    }

    pub fn episode_no(&self) -> Option<u32> {
        match self {
            MovieSegment::TvSeriesEpisode { episode_no, .. } => Some(*episode_no),
            MovieSegment::Biography { .. } => None,
        }
    }

    pub fn about(&self) -> Option<&str> {
        match self {
            MovieSegment::Biography { about } => Some(about),
            MovieSegment::TvSeriesEpisode { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ViolationKind;

    fn tv_fields(name: &str, no: i64) -> SegmentFields {
        SegmentFields {
            tv_series_name: Some(name.to_string()),
            episode_no: Some(no),
            about: None,
        }
    }

    #[test]
    fn test_codes_are_one_based() {
        assert_eq!(MovieCategory::TvSeriesEpisode.code(), 1);
        assert_eq!(MovieCategory::Biography.code(), 2);
        assert_eq!(MovieCategory::from_code(2).unwrap(), MovieCategory::Biography);
        assert_eq!(MovieCategory::from_code(0).unwrap_err().kind(), ViolationKind::Range);
        assert_eq!(MovieCategory::from_code(3).unwrap_err().kind(), ViolationKind::Range);
    }

    #[test]
    fn test_parse_from_name_or_code() {
        assert_eq!("1".parse::<MovieCategory>().unwrap(), MovieCategory::TvSeriesEpisode);
        assert_eq!("biography".parse::<MovieCategory>().unwrap(), MovieCategory::Biography);
        assert_eq!(
            "tv-series-episode".parse::<MovieCategory>().unwrap(),
            MovieCategory::TvSeriesEpisode
        );
        assert!("documentary".parse::<MovieCategory>().is_err());
    }

    #[test]
    fn test_serde_uses_code() {
        assert_eq!(serde_json::to_string(&MovieCategory::Biography).unwrap(), "2");
        let parsed: MovieCategory = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, MovieCategory::TvSeriesEpisode);
        assert!(serde_json::from_str::<MovieCategory>("7").is_err());
    }

    #[test]
    fn test_tv_episode_segment_requires_both_fields() {
        let segment = MovieSegment::build(
            MovieCategory::TvSeriesEpisode,
            tv_fields("The Loudest Voice", 6),
        )
        .unwrap();
        assert_eq!(segment.tv_series_name(), Some("The Loudest Voice"));
        assert_eq!(segment.episode_no(), Some(6));

        let missing_episode = SegmentFields {
            tv_series_name: Some("The Loudest Voice".to_string()),
            ..SegmentFields::default()
        };
        let err = MovieSegment::build(MovieCategory::TvSeriesEpisode, missing_episode).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::MandatoryValue);
    }

    #[test]
    fn test_biography_forbids_tv_fields() {
        let mut fields = tv_fields("Some Show", 1);
        fields.about = Some("John Forbes Nash".to_string());
        let err = MovieSegment::build(MovieCategory::Biography, fields).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::Segment);
    }

    #[test]
    fn test_empty_fields_check_without_category() {
        assert!(SegmentFields::default().is_empty());
        assert!(SegmentFields::default().check(None).is_ok());
        let err = tv_fields("Show", 2).check(None).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::Segment);
    }
}
