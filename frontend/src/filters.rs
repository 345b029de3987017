//! Client-side filtering over already fetched collections.

use crate::constants::CATEGORY_ALL_LABEL;
use crate::models::{Exercise, Workout};

fn matches_query(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Case-insensitive substring match on name or description.
pub fn filter_exercises<'a>(exercises: &'a [Exercise], query: &str) -> Vec<&'a Exercise> {
    exercises
        .iter()
        .filter(|e| matches_query(query, &[&e.name, &e.description]))
        .collect()
}

/// Search on name or description, then restrict to a category unless the
/// category is the "all" sentinel (or empty).
pub fn filter_workouts<'a>(workouts: &'a [Workout], query: &str, category: &str) -> Vec<&'a Workout> {
    let any_category = category.is_empty() || category == CATEGORY_ALL_LABEL;
    workouts
        .iter()
        .filter(|w| any_category || w.category.eq_ignore_ascii_case(category))
        .filter(|w| matches_query(query, &[&w.name, &w.description]))
        .collect()
}

/// Filter options: the "all" sentinel followed by each distinct non-blank
/// category in first-appearance order.
pub fn workout_categories(workouts: &[Workout]) -> Vec<String> {
    let mut out = vec![CATEGORY_ALL_LABEL.to_string()];
    for w in workouts {
        let cat = w.category.trim();
        if !cat.is_empty() && !out.iter().any(|c| c.eq_ignore_ascii_case(cat)) {
            out.push(cat.to_string());
        }
    }
    out
}

/// Total exercises across a student's workouts (dashboard stat card).
pub fn exercise_count(workouts: &[Workout]) -> usize {
    workouts.iter().map(|w| w.exercises.len()).sum()
}
