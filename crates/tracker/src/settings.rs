use anyhow::Result;
use llm::GenerationConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracker_core::prompt::FewShotExamples;

use crate::config;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Gemini model name
    pub model: String,

    /// Optional JSON file replacing the built-in few-shot examples
    pub examples_path: Option<PathBuf>,

    pub generation: GenerationConfig,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            model: config::DEFAULT_MODEL.to_string(),
            examples_path: None,
            generation: GenerationConfig::default(),
        }
    }
}

impl AppSettings {
    /// Settings from the process environment (after `.env` has been applied).
    pub fn load() -> Self {
        Self {
            model: config::model_from_env(),
            examples_path: std::env::var_os(config::EXAMPLES_PATH_ENV).map(PathBuf::from),
            ..Self::default()
        }
    }

    pub fn examples(&self) -> Result<FewShotExamples> {
        match &self.examples_path {
            Some(path) => FewShotExamples::from_json_file(path),
            None => Ok(FewShotExamples::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_sampling() {
        let s = AppSettings::default();
        assert_eq!(s.model, "gemini-1.5-flash");
        assert_eq!(s.generation.top_k, 40);
        assert_eq!(s.examples().unwrap().len(), 20);
    }

    #[test]
    fn examples_from_file() {
        let path = std::env::temp_dir().join(format!("tracker-examples-{}.json", std::process::id()));
        std::fs::write(&path, r#"[{"input": "toast", "output": "80 calories gained"}]"#).unwrap();
        let s = AppSettings { examples_path: Some(path.clone()), ..AppSettings::default() };
        assert_eq!(s.examples().unwrap().len(), 1);
        let _ = std::fs::remove_file(path);

        let missing = AppSettings { examples_path: Some("/nonexistent/examples.json".into()), ..AppSettings::default() };
        assert!(missing.examples().is_err());
    }
}
