use serde::Serialize;

/// One activity and the calories it burns in an hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExerciseEntry {
    pub name: &'static str,
    pub calories_per_hour: u32,
}

impl ExerciseEntry {
    pub const fn new(name: &'static str, calories_per_hour: u32) -> Self {
        Self { name, calories_per_hour }
    }
}

/// Priority order matters: suggestions follow it and the fallback uses the first row.
pub const DEFAULT_CATALOG: &[ExerciseEntry] = &[
    ExerciseEntry::new("running", 600),
    ExerciseEntry::new("cycling", 500),
    ExerciseEntry::new("swimming", 250),
    ExerciseEntry::new("yoga", 200),
    ExerciseEntry::new("walking", 200),
    ExerciseEntry::new("weightlifting", 180),
    ExerciseEntry::new("jump rope", 700),
    ExerciseEntry::new("hiking", 400),
    ExerciseEntry::new("dancing", 300),
];
