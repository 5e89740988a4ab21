use std::cmp;
use std::future::Future;

use crate::{
    Difficulty, Exercise, ExerciseFilter, ExerciseID, ExercisePage, QueryError, SortBy,
    SortDirection,
};

/// The catalog data source boundary. Implementations execute a composed
/// query and report the rows of the requested window together with the
/// total count of matching rows.
pub trait Catalog: Send + Sync + 'static {
    fn search(
        &self,
        query: &CatalogQuery,
    ) -> impl Future<Output = Result<ExercisePage, QueryError>> + Send;
    fn find(
        &self,
        id: ExerciseID,
    ) -> impl Future<Output = Result<Option<Exercise>, QueryError>> + Send;
}

/// A single filter condition over catalog records. Predicates are
/// independent and commutative; a query combines them conjunctively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Active,
    NameContains(String),
    CategoryIn(Vec<String>),
    EquipmentIn(Vec<String>),
    MuscleIn(Vec<String>),
    BodyPartIn(Vec<String>),
    DifficultyBetween(Difficulty, Difficulty),
    IsCompound(bool),
    RequiresSpotter(bool),
}

impl Predicate {
    #[must_use]
    pub fn matches(&self, exercise: &Exercise) -> bool {
        match self {
            Predicate::Active => exercise.is_active,
            Predicate::NameContains(needle) => exercise
                .name
                .as_ref()
                .to_lowercase()
                .contains(needle.to_lowercase().trim()),
            Predicate::CategoryIn(categories) => categories.contains(&exercise.category),
            Predicate::EquipmentIn(equipment) => equipment.contains(&exercise.equipment),
            Predicate::MuscleIn(muscles) => {
                exercise.muscles.iter().any(|muscle| muscles.contains(muscle))
            }
            Predicate::BodyPartIn(body_parts) => exercise
                .body_parts
                .iter()
                .any(|body_part| body_parts.contains(body_part)),
            Predicate::DifficultyBetween(min, max) => {
                (*min..=*max).contains(&exercise.difficulty)
            }
            Predicate::IsCompound(is_compound) => exercise.is_compound == *is_compound,
            Predicate::RequiresSpotter(requires_spotter) => {
                exercise.requires_spotter == *requires_spotter
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub by: SortBy,
    pub direction: SortDirection,
}

impl Order {
    /// Compares two records by the primary sort key, breaking ties by record
    /// identifier ascending regardless of direction, so that pagination over
    /// repeated calls yields a consistent ordering for unchanged rows.
    #[must_use]
    pub fn compare(&self, a: &Exercise, b: &Exercise) -> cmp::Ordering {
        let primary = match self.by {
            SortBy::Name => a.name.cmp(&b.name),
            SortBy::Category => a.category.cmp(&b.category),
            SortBy::Difficulty => a.difficulty.cmp(&b.difficulty),
        };
        let primary = match self.direction {
            SortDirection::Asc => primary,
            SortDirection::Desc => primary.reverse(),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub offset: u64,
    pub limit: u64,
}

/// A fully composed catalog query: a conjunctive predicate set, a
/// deterministic ordering and a pagination window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub predicates: Vec<Predicate>,
    pub order: Order,
    pub window: Window,
}

impl From<&ExerciseFilter> for CatalogQuery {
    fn from(filter: &ExerciseFilter) -> Self {
        let mut predicates = vec![Predicate::Active];
        let search = filter.search.trim();
        if !search.is_empty() {
            predicates.push(Predicate::NameContains(search.to_string()));
        }
        if !filter.categories.is_empty() {
            predicates.push(Predicate::CategoryIn(filter.categories.clone()));
        }
        if !filter.equipment.is_empty() {
            predicates.push(Predicate::EquipmentIn(filter.equipment.clone()));
        }
        if !filter.muscles.is_empty() {
            predicates.push(Predicate::MuscleIn(filter.muscles.clone()));
        }
        if !filter.body_parts.is_empty() {
            predicates.push(Predicate::BodyPartIn(filter.body_parts.clone()));
        }
        predicates.push(Predicate::DifficultyBetween(
            filter.difficulty_min,
            filter.difficulty_max,
        ));
        if let Some(is_compound) = filter.is_compound {
            predicates.push(Predicate::IsCompound(is_compound));
        }
        if let Some(requires_spotter) = filter.requires_spotter {
            predicates.push(Predicate::RequiresSpotter(requires_spotter));
        }
        CatalogQuery {
            predicates,
            order: Order {
                by: filter.sort_by,
                direction: filter.sort_direction,
            },
            window: Window {
                offset: u64::from(filter.page - 1) * u64::from(filter.limit),
                limit: u64::from(filter.limit),
            },
        }
    }
}

/// Evaluates a query against a slice of catalog records.
///
/// The total reflects the full predicate set independent of the window. A
/// window beyond the last matching record yields an empty page.
#[must_use]
pub fn select(entries: &[Exercise], query: &CatalogQuery) -> ExercisePage {
    let mut matched = entries
        .iter()
        .filter(|exercise| {
            query
                .predicates
                .iter()
                .all(|predicate| predicate.matches(exercise))
        })
        .collect::<Vec<_>>();
    let total = matched.len() as u64;
    matched.sort_by(|a, b| query.order.compare(a, b));
    let exercises = matched
        .into_iter()
        .skip(usize::try_from(query.window.offset).unwrap_or(usize::MAX))
        .take(usize::try_from(query.window.limit).unwrap_or(usize::MAX))
        .cloned()
        .collect();
    ExercisePage { exercises, total }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::Name;

    use super::*;

    fn exercise(id: u128, name: &str, difficulty: u8) -> Exercise {
        Exercise {
            id: id.into(),
            name: Name::new(name).unwrap(),
            category: "strength".to_string(),
            equipment: "barbell".to_string(),
            muscles: vec!["chest".to_string()],
            body_parts: vec!["upper body".to_string()],
            difficulty: Difficulty::new(difficulty).unwrap(),
            is_compound: true,
            requires_spotter: false,
            is_active: true,
        }
    }

    fn catalog() -> Vec<Exercise> {
        vec![
            exercise(1, "Bench Press", 4),
            exercise(2, "Overhead Press", 3),
            Exercise {
                is_active: false,
                ..exercise(3, "Leg Press", 2)
            },
            Exercise {
                category: "mobility".to_string(),
                equipment: "bodyweight".to_string(),
                muscles: vec!["hamstrings".to_string()],
                body_parts: vec!["lower body".to_string()],
                is_compound: false,
                ..exercise(4, "Hamstring Stretch", 1)
            },
        ]
    }

    fn query(filter: &ExerciseFilter) -> CatalogQuery {
        CatalogQuery::from(filter)
    }

    #[rstest]
    #[case::active(Predicate::Active, "Bench Press", true)]
    #[case::inactive(Predicate::Active, "Leg Press", false)]
    #[case::name_lower_case(Predicate::NameContains("press".to_string()), "Bench Press", true)]
    #[case::name_upper_case(Predicate::NameContains("PRESS".to_string()), "Bench Press", true)]
    #[case::name_no_match(Predicate::NameContains("row".to_string()), "Bench Press", false)]
    #[case::category(
        Predicate::CategoryIn(vec!["strength".to_string(), "cardio".to_string()]),
        "Bench Press",
        true
    )]
    #[case::category_no_match(
        Predicate::CategoryIn(vec!["cardio".to_string()]),
        "Bench Press",
        false
    )]
    #[case::muscle(Predicate::MuscleIn(vec!["chest".to_string()]), "Bench Press", true)]
    #[case::muscle_no_match(Predicate::MuscleIn(vec!["calves".to_string()]), "Bench Press", false)]
    #[case::compound(Predicate::IsCompound(false), "Hamstring Stretch", true)]
    #[case::spotter(Predicate::RequiresSpotter(true), "Bench Press", false)]
    fn test_predicate_matches(
        #[case] predicate: Predicate,
        #[case] name: &str,
        #[case] expected: bool,
    ) {
        let exercise = catalog()
            .into_iter()
            .find(|e| e.name.as_ref() == name)
            .unwrap();
        assert_eq!(predicate.matches(&exercise), expected);
    }

    #[rstest]
    #[case(1, 2, true)]
    #[case(2, 5, true)]
    #[case(3, 5, false)]
    fn test_predicate_difficulty_between(#[case] min: u8, #[case] max: u8, #[case] expected: bool) {
        let predicate = Predicate::DifficultyBetween(
            Difficulty::new(min).unwrap(),
            Difficulty::new(max).unwrap(),
        );
        assert_eq!(predicate.matches(&exercise(1, "Leg Curl", 2)), expected);
    }

    #[test]
    fn test_query_from_filter_always_restricts_to_active_records() {
        assert_eq!(
            query(&ExerciseFilter::default()).predicates[0],
            Predicate::Active
        );
    }

    #[test]
    fn test_query_from_filter_window() {
        let filter = ExerciseFilter {
            page: 3,
            limit: 20,
            ..ExerciseFilter::default()
        };
        assert_eq!(
            query(&filter).window,
            Window {
                offset: 40,
                limit: 20
            }
        );
    }

    #[test]
    fn test_select_filtered_page() {
        let filter = ExerciseFilter {
            search: "press".to_string(),
            difficulty_min: Difficulty::new(3).unwrap(),
            page: 1,
            limit: 2,
            ..ExerciseFilter::default()
        };
        let page = select(&catalog(), &query(&filter));
        assert_eq!(
            page.exercises
                .iter()
                .map(|e| e.name.as_ref())
                .collect::<Vec<_>>(),
            vec!["Bench Press", "Overhead Press"]
        );
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_select_total_independent_of_window() {
        let filter = ExerciseFilter {
            limit: 1,
            ..ExerciseFilter::default()
        };
        let page = select(&catalog(), &query(&filter));
        assert_eq!(page.exercises.len(), 1);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_select_window_beyond_total_is_empty() {
        let filter = ExerciseFilter {
            page: 7,
            limit: 50,
            ..ExerciseFilter::default()
        };
        let page = select(&catalog(), &query(&filter));
        assert_eq!(page.exercises, vec![]);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_select_is_deterministic() {
        let entries = catalog();
        let query = query(&ExerciseFilter::default());
        assert_eq!(select(&entries, &query), select(&entries, &query));
    }

    #[test]
    fn test_select_breaks_ties_by_id() {
        let entries = vec![
            exercise(2, "Squat", 3),
            exercise(1, "Deadlift", 3),
            exercise(3, "Lunge", 3),
        ];
        let filter = ExerciseFilter {
            sort_by: SortBy::Difficulty,
            ..ExerciseFilter::default()
        };
        let page = select(&entries, &query(&filter));
        assert_eq!(
            page.exercises.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![1.into(), 2.into(), 3.into()]
        );
    }

    #[test]
    fn test_select_descending_keeps_id_tie_break_ascending() {
        let entries = vec![
            exercise(2, "Squat", 3),
            exercise(1, "Deadlift", 3),
            exercise(3, "Hip Thrust", 5),
        ];
        let filter = ExerciseFilter {
            sort_by: SortBy::Difficulty,
            sort_direction: SortDirection::Desc,
            ..ExerciseFilter::default()
        };
        let page = select(&entries, &query(&filter));
        assert_eq!(
            page.exercises
                .iter()
                .map(|e| e.name.as_ref())
                .collect::<Vec<_>>(),
            vec!["Hip Thrust", "Deadlift", "Squat"]
        );
    }
}
