use anyhow::{Context, Result, anyhow};
use std::path::Path;

pub const API_KEY_ENV: &str = llm::GEMINI_API_KEY_ENV;
pub const MODEL_ENV: &str = "GEMINI_MODEL";
pub const EXAMPLES_PATH_ENV: &str = "CALORIE_EXAMPLES_PATH";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Load environment variables from .env (best-effort). Variables already set
/// in the process environment win. Runs before logging is up, so problems
/// are handed back for the caller to print.
pub fn load_dotenv() -> Vec<anyhow::Error> {
    // 1) current dir, 2) parent, 3) grandparent
    [".env", "../.env", "../../.env"]
        .into_iter()
        .filter_map(|path| load_env_file_if_present(Path::new(path)).err())
        .collect()
}

fn load_env_file_if_present(path: &Path) -> Result<()> {
    if path.is_file() {
        dotenvy::from_path(path).with_context(|| format!("ignoring unreadable {}", path.display()))?;
    }
    Ok(())
}

/// The Gemini credential is required; callers treat an error as fatal.
pub fn load_api_key() -> Result<String> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(anyhow!("{} not found. Please set it as an environment variable", API_KEY_ENV)),
    }
}

pub fn model_from_env() -> String {
    std::env::var(MODEL_ENV)
        .ok()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotenv_does_not_override_existing_vars() {
        let dir = std::env::temp_dir().join(format!("tracker-dotenv-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join(".env");
        std::fs::write(&file, "TRACKER_TEST_PRESET=from_file\nTRACKER_TEST_FRESH='quoted'\n").unwrap();

        std::env::set_var("TRACKER_TEST_PRESET", "from_shell");
        load_env_file_if_present(&file).unwrap();

        assert_eq!(std::env::var("TRACKER_TEST_PRESET").unwrap(), "from_shell");
        assert_eq!(std::env::var("TRACKER_TEST_FRESH").unwrap(), "quoted");
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn unreadable_env_file_is_reported() {
        let dir = std::env::temp_dir().join(format!("tracker-dotenv-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join(".env");
        std::fs::write(&file, [0xff, 0xfe, b'\n']).unwrap();

        let err = load_env_file_if_present(&file).unwrap_err();
        assert!(format!("{:#}", err).contains("ignoring unreadable"));
        assert!(load_env_file_if_present(&dir.join("missing.env")).is_ok());
        let _ = std::fs::remove_dir_all(dir);
    }
}
