#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod error;
mod exercise;
mod filter;
mod query;

pub use error::{QueryError, ReadError, StorageError};
pub use exercise::{
    Difficulty, DifficultyError, Exercise, ExerciseID, ExercisePage, ExerciseRepository, Name,
    NameError,
};
pub use filter::{DEFAULT_LIMIT, ExerciseFilter, FilterError, SortBy, SortDirection};
pub use query::{Catalog, CatalogQuery, Order, Predicate, Window, select};
