//! Seeded exercise catalog used as the default data set of the server
//! binary and as realistic fixtures in tests. The authoritative catalog
//! lives in the external data source; these entries mirror its shape.

use std::sync::LazyLock;

use crate::{Difficulty, Exercise, ExerciseID, Name};

struct SeedExercise {
    name: &'static str,
    category: &'static str,
    equipment: &'static str,
    muscles: &'static [&'static str],
    body_parts: &'static [&'static str],
    difficulty: u8,
    is_compound: bool,
    requires_spotter: bool,
    is_active: bool,
}

pub static EXERCISES: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
    (1_u128..)
        .zip(SEED.iter())
        .map(|(id, seed)| Exercise {
            id: ExerciseID::from(id),
            name: Name::new(seed.name).expect("seed exercise names are valid"),
            category: seed.category.to_string(),
            equipment: seed.equipment.to_string(),
            muscles: seed.muscles.iter().map(ToString::to_string).collect(),
            body_parts: seed.body_parts.iter().map(ToString::to_string).collect(),
            difficulty: Difficulty::new(seed.difficulty).expect("seed difficulties are in range"),
            is_compound: seed.is_compound,
            requires_spotter: seed.requires_spotter,
            is_active: seed.is_active,
        })
        .collect()
});

const SEED: [SeedExercise; 20] = [
    SeedExercise {
        name: "Barbell Row",
        category: "strength",
        equipment: "barbell",
        muscles: &["lats", "biceps", "rear delts"],
        body_parts: &["upper body"],
        difficulty: 3,
        is_compound: true,
        requires_spotter: false,
        is_active: true,
    },
    SeedExercise {
        name: "Bench Press",
        category: "strength",
        equipment: "barbell",
        muscles: &["chest", "front delts", "triceps"],
        body_parts: &["upper body"],
        difficulty: 4,
        is_compound: true,
        requires_spotter: true,
        is_active: true,
    },
    SeedExercise {
        name: "Bicycle Crunch",
        category: "strength",
        equipment: "bodyweight",
        muscles: &["abs", "obliques"],
        body_parts: &["core"],
        difficulty: 1,
        is_compound: false,
        requires_spotter: false,
        is_active: true,
    },
    SeedExercise {
        name: "Box Jump",
        category: "plyometrics",
        equipment: "box",
        muscles: &["quads", "glutes", "calves"],
        body_parts: &["lower body"],
        difficulty: 3,
        is_compound: true,
        requires_spotter: false,
        is_active: true,
    },
    SeedExercise {
        name: "Burpee",
        category: "cardio",
        equipment: "bodyweight",
        muscles: &["quads", "chest", "abs"],
        body_parts: &["full body"],
        difficulty: 3,
        is_compound: true,
        requires_spotter: false,
        is_active: true,
    },
    SeedExercise {
        name: "Cable Fly",
        category: "strength",
        equipment: "cable",
        muscles: &["chest", "front delts"],
        body_parts: &["upper body"],
        difficulty: 2,
        is_compound: false,
        requires_spotter: false,
        is_active: true,
    },
    SeedExercise {
        name: "Deadlift",
        category: "strength",
        equipment: "barbell",
        muscles: &["glutes", "hamstrings", "erector spinae", "traps"],
        body_parts: &["full body"],
        difficulty: 5,
        is_compound: true,
        requires_spotter: false,
        is_active: true,
    },
    SeedExercise {
        name: "Dumbbell Curl",
        category: "strength",
        equipment: "dumbbell",
        muscles: &["biceps", "forearms"],
        body_parts: &["upper body"],
        difficulty: 1,
        is_compound: false,
        requires_spotter: false,
        is_active: true,
    },
    SeedExercise {
        name: "Goblet Squat",
        category: "strength",
        equipment: "kettlebell",
        muscles: &["quads", "glutes"],
        body_parts: &["lower body"],
        difficulty: 2,
        is_compound: true,
        requires_spotter: false,
        is_active: true,
    },
    SeedExercise {
        name: "Hamstring Stretch",
        category: "mobility",
        equipment: "bodyweight",
        muscles: &["hamstrings"],
        body_parts: &["lower body"],
        difficulty: 1,
        is_compound: false,
        requires_spotter: false,
        is_active: true,
    },
    SeedExercise {
        name: "Lat Pulldown",
        category: "strength",
        equipment: "machine",
        muscles: &["lats", "biceps"],
        body_parts: &["upper body"],
        difficulty: 2,
        is_compound: true,
        requires_spotter: false,
        is_active: true,
    },
    SeedExercise {
        name: "Leg Press",
        category: "strength",
        equipment: "machine",
        muscles: &["quads", "glutes", "hamstrings"],
        body_parts: &["lower body"],
        difficulty: 2,
        is_compound: true,
        requires_spotter: false,
        is_active: false,
    },
    SeedExercise {
        name: "Mountain Climber",
        category: "cardio",
        equipment: "bodyweight",
        muscles: &["abs", "quads", "front delts"],
        body_parts: &["full body"],
        difficulty: 2,
        is_compound: true,
        requires_spotter: false,
        is_active: true,
    },
    SeedExercise {
        name: "Overhead Press",
        category: "strength",
        equipment: "barbell",
        muscles: &["front delts", "side delts", "triceps"],
        body_parts: &["upper body"],
        difficulty: 3,
        is_compound: true,
        requires_spotter: false,
        is_active: true,
    },
    SeedExercise {
        name: "Plank",
        category: "strength",
        equipment: "bodyweight",
        muscles: &["abs", "erector spinae"],
        body_parts: &["core"],
        difficulty: 1,
        is_compound: false,
        requires_spotter: false,
        is_active: true,
    },
    SeedExercise {
        name: "Pull Up",
        category: "strength",
        equipment: "pull up bar",
        muscles: &["lats", "biceps", "forearms"],
        body_parts: &["upper body"],
        difficulty: 4,
        is_compound: true,
        requires_spotter: false,
        is_active: true,
    },
    SeedExercise {
        name: "Romanian Deadlift",
        category: "strength",
        equipment: "barbell",
        muscles: &["hamstrings", "glutes", "erector spinae"],
        body_parts: &["lower body"],
        difficulty: 4,
        is_compound: true,
        requires_spotter: false,
        is_active: true,
    },
    SeedExercise {
        name: "Rowing Machine",
        category: "cardio",
        equipment: "machine",
        muscles: &["lats", "quads", "biceps"],
        body_parts: &["full body"],
        difficulty: 2,
        is_compound: true,
        requires_spotter: false,
        is_active: true,
    },
    SeedExercise {
        name: "Squat",
        category: "strength",
        equipment: "barbell",
        muscles: &["quads", "glutes", "adductors", "erector spinae"],
        body_parts: &["lower body"],
        difficulty: 5,
        is_compound: true,
        requires_spotter: true,
        is_active: true,
    },
    SeedExercise {
        name: "Walking Lunge",
        category: "strength",
        equipment: "dumbbell",
        muscles: &["quads", "glutes", "adductors"],
        body_parts: &["lower body"],
        difficulty: 3,
        is_compound: true,
        requires_spotter: false,
        is_active: true,
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use crate::{CatalogQuery, ExerciseFilter, select};

    use super::*;

    #[test]
    fn test_seed_order() {
        let names = SEED.iter().map(|e| e.name).collect::<Vec<_>>();
        let mut sorted_names = names.clone();
        sorted_names.sort_unstable();
        assert_eq!(names, sorted_names, "unsorted");
    }

    #[test]
    fn test_seed_duplicate_names() {
        let mut names = HashSet::new();

        for entry in &SEED {
            assert!(!names.contains(entry.name), "duplicate name {}", entry.name);
            names.insert(entry.name);
        }
    }

    #[test]
    fn test_seed_dimensions_not_empty() {
        for exercise in EXERCISES.iter() {
            assert!(!exercise.category.is_empty());
            assert!(!exercise.equipment.is_empty());
            assert!(!exercise.muscles.is_empty());
            assert!(!exercise.body_parts.is_empty());
        }
    }

    #[test]
    fn test_seed_unique_ids() {
        let ids = EXERCISES.iter().map(|e| e.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), EXERCISES.len());
    }

    #[test]
    fn test_seed_supports_press_scenario() {
        let filter = ExerciseFilter {
            search: "press".to_string(),
            difficulty_min: Difficulty::new(3).unwrap(),
            page: 1,
            limit: 2,
            ..ExerciseFilter::default()
        };
        let page = select(&EXERCISES, &CatalogQuery::from(&filter));
        assert_eq!(
            page.exercises
                .iter()
                .map(|e| e.name.as_ref())
                .collect::<Vec<_>>(),
            vec!["Bench Press", "Overhead Press"]
        );
        assert_eq!(page.total, 2);
    }
}
