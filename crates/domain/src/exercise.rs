use derive_more::{AsRef, Deref, Display};
use uuid::Uuid;

use crate::{ExerciseFilter, ReadError};

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_exercises(&self, filter: &ExerciseFilter) -> Result<ExercisePage, ReadError>;
    async fn read_exercise(&self, id: ExerciseID) -> Result<Exercise, ReadError>;
}

/// A single catalog record. The category, equipment, muscle and body part
/// dimensions are open-ended text owned by the catalog, not closed enums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub category: String,
    pub equipment: String,
    pub muscles: Vec<String>,
    pub body_parts: Vec<String>,
    pub difficulty: Difficulty,
    pub is_compound: bool,
    pub requires_spotter: bool,
    pub is_active: bool,
}

/// An ordered page of catalog records together with the number of records
/// matching the filter independent of the pagination window.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExercisePage {
    pub exercises: Vec<Exercise>,
    pub total: u64,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.len();

        if len > 100 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 100 characters or fewer ({0} > 100)")]
    TooLong(usize),
}

#[derive(Deref, Display, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: Difficulty = Difficulty(1);
    pub const MAX: Difficulty = Difficulty(5);

    pub fn new(value: u8) -> Result<Self, DifficultyError> {
        if (*Self::MIN..=*Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DifficultyError::OutOfRange(value))
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::MIN
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DifficultyError {
    #[error("Difficulty must be between 1 and 5 ({0} is not)")]
    OutOfRange(u8),
}
