use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_EXAMPLES: &[(&str, &str)] = &[
    ("apple", "52 calories gained"),
    ("banana", "89 calories gained"),
    ("running 30 minutes", "300 calories burned"),
    ("yoga 1 hour", "200 calories burned"),
    ("pizza slice", "285 calories gained"),
    ("cycling 1 hour", "500 calories burned"),
    ("orange", "62 calories gained"),
    ("grapes 100g", "69 calories gained"),
    ("walking 1 hour", "200 calories burned"),
    ("swimming 30 minutes", "250 calories burned"),
    ("chocolate bar", "210 calories gained"),
    ("fried chicken", "400 calories gained"),
    ("carrot", "41 calories gained"),
    ("spinach", "23 calories gained"),
    ("weightlifting 30 minutes", "180 calories burned"),
    ("steak", "500 calories gained"),
    ("salad with dressing", "150 calories gained"),
    ("running 1 hour", "600 calories burned"),
    ("muffin", "250 calories gained"),
    ("avocado", "160 calories gained"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FewShotExample {
    pub input: String,
    pub output: String,
}

/// Ordered example pairs that steer the model towards `N calories gained|burned` replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FewShotExamples(Vec<FewShotExample>);

impl FewShotExamples {
    pub fn new(examples: Vec<FewShotExample>) -> Self {
        Self(examples)
    }

    /// Parse a JSON array of `{"input": ..., "output": ...}` objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let examples: Self = serde_json::from_str(json).context("invalid few-shot examples")?;
        if examples.0.is_empty() {
            bail!("few-shot example list is empty");
        }
        Ok(examples)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading few-shot examples from {}", path.display()))?;
        Self::from_json_str(&content)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FewShotExample> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for FewShotExamples {
    fn default() -> Self {
        Self(
            DEFAULT_EXAMPLES
                .iter()
                .map(|(input, output)| FewShotExample {
                    input: (*input).to_string(),
                    output: (*output).to_string(),
                })
                .collect(),
        )
    }
}

/// Example lines, then the user's input and an open `output: ` for the model to complete.
pub fn build_prompt(examples: &FewShotExamples, user_text: &str) -> Vec<String> {
    let mut parts = Vec::with_capacity(examples.len() * 2 + 2);
    for ex in examples.iter() {
        parts.push(format!("input: {}", ex.input));
        parts.push(format!("output: {}", ex.output));
    }
    parts.push(format!("input: {}", user_text));
    parts.push("output: ".to_string());
    parts
}
