use url::form_urlencoded;

use crate::Difficulty;

pub const DEFAULT_LIMIT: u32 = 50;

/// A catalog query expressed as a pure value. Two filters that are equal
/// produce the same [`signature`](ExerciseFilter::signature), which callers
/// use as a cache and deduplication key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub search: String,
    pub categories: Vec<String>,
    pub equipment: Vec<String>,
    pub muscles: Vec<String>,
    pub body_parts: Vec<String>,
    pub difficulty_min: Difficulty,
    pub difficulty_max: Difficulty,
    pub is_compound: Option<bool>,
    pub requires_spotter: Option<bool>,
    pub page: u32,
    pub limit: u32,
    pub sort_by: SortBy,
    pub sort_direction: SortDirection,
}

impl Default for ExerciseFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            categories: Vec::new(),
            equipment: Vec::new(),
            muscles: Vec::new(),
            body_parts: Vec::new(),
            difficulty_min: Difficulty::MIN,
            difficulty_max: Difficulty::MAX,
            is_compound: None,
            requires_spotter: None,
            page: 1,
            limit: DEFAULT_LIMIT,
            sort_by: SortBy::default(),
            sort_direction: SortDirection::default(),
        }
    }
}

impl ExerciseFilter {
    /// Serializes the filter into its canonical query string.
    ///
    /// Fields are emitted in a fixed order and only when they differ from
    /// their default, so that effectively equal filters collapse to the same
    /// signature. Pagination and sorting fields are always emitted since they
    /// determine result identity even at their default values.
    #[must_use]
    pub fn signature(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if !self.search.is_empty() {
            query.append_pair("search", &self.search);
        }
        for (key, values) in [
            ("categories", &self.categories),
            ("equipment", &self.equipment),
            ("muscles", &self.muscles),
            ("bodyParts", &self.body_parts),
        ] {
            if !values.is_empty() {
                query.append_pair(key, &values.join(","));
            }
        }
        if self.difficulty_min != Difficulty::MIN {
            query.append_pair("difficultyMin", &self.difficulty_min.to_string());
        }
        if self.difficulty_max != Difficulty::MAX {
            query.append_pair("difficultyMax", &self.difficulty_max.to_string());
        }
        if let Some(is_compound) = self.is_compound {
            query.append_pair("isCompound", bool_token(is_compound));
        }
        if let Some(requires_spotter) = self.requires_spotter {
            query.append_pair("requiresSpotter", bool_token(requires_spotter));
        }
        query.append_pair("page", &self.page.to_string());
        query.append_pair("limit", &self.limit.to_string());
        query.append_pair("sortBy", &self.sort_by.to_string());
        query.append_pair("sortDirection", &self.sort_direction.to_string());
        query.finish()
    }

    /// Parses a raw query string into a filter.
    ///
    /// Unrecognized parameters are ignored for forward compatibility.
    /// Malformed values are rejected instead of silently replaced by
    /// defaults, so that client bugs surface as errors.
    pub fn from_query(query: &str) -> Result<Self, FilterError> {
        let mut filter = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "search" => filter.search = value.into_owned(),
                "categories" => filter.categories = list_tokens(&value),
                "equipment" => filter.equipment = list_tokens(&value),
                "muscles" => filter.muscles = list_tokens(&value),
                "bodyParts" => filter.body_parts = list_tokens(&value),
                "difficultyMin" if !value.is_empty() => {
                    filter.difficulty_min = parse_difficulty("difficultyMin", &value)?;
                }
                "difficultyMax" if !value.is_empty() => {
                    filter.difficulty_max = parse_difficulty("difficultyMax", &value)?;
                }
                "isCompound" if !value.is_empty() => {
                    filter.is_compound = Some(parse_bool("isCompound", &value)?);
                }
                "requiresSpotter" if !value.is_empty() => {
                    filter.requires_spotter = Some(parse_bool("requiresSpotter", &value)?);
                }
                "page" if !value.is_empty() => filter.page = parse_positive("page", &value)?,
                "limit" if !value.is_empty() => filter.limit = parse_positive("limit", &value)?,
                "sortBy" if !value.is_empty() => {
                    filter.sort_by = value
                        .parse()
                        .map_err(|_| FilterError::invalid("sortBy", &value))?;
                }
                "sortDirection" if !value.is_empty() => {
                    filter.sort_direction = value
                        .parse()
                        .map_err(|_| FilterError::invalid("sortDirection", &value))?;
                }
                _ => {}
            }
        }
        if filter.difficulty_min > filter.difficulty_max {
            return Err(FilterError::InvertedDifficultyRange {
                min: *filter.difficulty_min,
                max: *filter.difficulty_max,
            });
        }
        Ok(filter)
    }
}

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortBy {
    #[default]
    Name,
    Category,
    Difficulty,
}

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum FilterError {
    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },
    #[error("difficultyMin must not exceed difficultyMax ({min} > {max})")]
    InvertedDifficultyRange { min: u8, max: u8 },
}

impl FilterError {
    fn invalid(field: &'static str, value: &str) -> Self {
        Self::InvalidValue {
            field,
            value: value.to_string(),
        }
    }
}

fn bool_token(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn list_tokens(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn parse_positive(field: &'static str, value: &str) -> Result<u32, FilterError> {
    value
        .parse::<u32>()
        .ok()
        .filter(|parsed| *parsed >= 1)
        .ok_or_else(|| FilterError::invalid(field, value))
}

fn parse_difficulty(field: &'static str, value: &str) -> Result<Difficulty, FilterError> {
    value
        .parse::<u8>()
        .ok()
        .and_then(|parsed| Difficulty::new(parsed).ok())
        .ok_or_else(|| FilterError::invalid(field, value))
}

fn parse_bool(field: &'static str, value: &str) -> Result<bool, FilterError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(FilterError::invalid(field, value)),
    }
}
