use ironlog_domain as domain;
use ironlog_domain::{Catalog, CatalogQuery, Exercise, ExerciseID, ExercisePage, QueryError};

/// Catalog backed by process memory. Stands in for the managed relational
/// store behind the query API; the binary seeds it with the built-in
/// catalog, tests construct it from explicit entries.
pub struct InMemoryCatalog {
    entries: Vec<Exercise>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            entries: domain::catalog::EXERCISES.clone(),
        }
    }

    #[must_use]
    pub fn with_entries(entries: Vec<Exercise>) -> Self {
        Self { entries }
    }
}

impl Catalog for InMemoryCatalog {
    async fn search(&self, query: &CatalogQuery) -> Result<ExercisePage, QueryError> {
        Ok(domain::select(&self.entries, query))
    }

    async fn find(&self, id: ExerciseID) -> Result<Option<Exercise>, QueryError> {
        Ok(self
            .entries
            .iter()
            .find(|exercise| exercise.id == id && exercise.is_active)
            .cloned())
    }
}
