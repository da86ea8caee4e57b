//! Exercise list for building workouts.

use skilltree_types::skill::Category;
use skilltree_types::workout::Exercise;

/// Exercises offered when composing a workout.
pub fn builtin_exercises() -> Vec<Exercise> {
    [
        ("pushups", "Push-Ups", Category::Push),
        ("pullups", "Pull-Ups", Category::Pull),
        ("pike", "Pike Push-Up", Category::Push),
        ("hangingLegRaise", "Hanging Leg Raise", Category::Core),
        ("gluteBridge", "Glute Bridge", Category::Legs),
    ]
    .into_iter()
    .map(|(id, name, category)| Exercise {
        id: id.to_string(),
        name: name.to_string(),
        category,
    })
    .collect()
}

/// Filter exercises by category (all when `None`) and a case-insensitive
/// name substring. An empty query matches everything.
pub fn search_exercises<'a>(
    exercises: &'a [Exercise],
    category: Option<Category>,
    query: &str,
) -> Vec<&'a Exercise> {
    let query = query.trim().to_lowercase();
    exercises
        .iter()
        .filter(|ex| category.is_none_or(|c| ex.category == c))
        .filter(|ex| ex.name.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(found: &[&Exercise]) -> Vec<String> {
        found.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_search_all() {
        let exercises = builtin_exercises();
        assert_eq!(search_exercises(&exercises, None, "").len(), 5);
    }

    #[test]
    fn test_search_by_category() {
        let exercises = builtin_exercises();
        let found = search_exercises(&exercises, Some(Category::Push), "");
        assert_eq!(ids(&found), ["pushups", "pike"]);
    }

    #[test]
    fn test_search_by_name_case_insensitive() {
        let exercises = builtin_exercises();
        let found = search_exercises(&exercises, None, "PULL");
        assert_eq!(ids(&found), ["pullups"]);
    }

    #[test]
    fn test_search_category_and_name_combined() {
        let exercises = builtin_exercises();
        assert!(search_exercises(&exercises, Some(Category::Legs), "push").is_empty());
    }
}
