use crate::catalog::{ExerciseEntry, DEFAULT_CATALOG};

/// Suggestions shorter than this many minutes are dropped.
const MIN_SUGGESTED_MINUTES: i64 = 5;

/// Exercises that would burn off `surplus` calories, using the default catalog.
pub fn suggest(surplus: i64) -> Vec<String> {
    suggest_from(DEFAULT_CATALOG, surplus)
}

/// `surplus` must be positive; the controller only calls this with a net surplus.
pub fn suggest_from(catalog: &[ExerciseEntry], surplus: i64) -> Vec<String> {
    assert!(surplus > 0, "suggest called with non-positive surplus {surplus}");

    let mut suggestions: Vec<String> = catalog
        .iter()
        .filter(|e| i64::from(e.calories_per_hour) <= surplus)
        .filter_map(|e| {
            let minutes = duration_minutes(surplus, e.calories_per_hour);
            (minutes > MIN_SUGGESTED_MINUTES).then(|| {
                format!("Do {} for {} minutes to burn {} calories.", e.name, minutes, surplus)
            })
        })
        .collect();

    if suggestions.is_empty() {
        if let Some(first) = catalog.first() {
            let minutes = duration_minutes(surplus, first.calories_per_hour);
            suggestions.push(format!("Do {} for {} minutes.", first.name, minutes));
        }
    }
    suggestions
}

/// Minutes at `calories_per_hour` needed to burn `surplus`, rounded half-to-even.
fn duration_minutes(surplus: i64, calories_per_hour: u32) -> i64 {
    let minutes = surplus as f64 / f64::from(calories_per_hour) * 60.0;
    minutes.round_ties_even() as i64
}
