use anyhow::{Context, Result};
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "tracker=info,tracker_core=info,llm=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log to a timestamped file under `logs_dir`; the terminal belongs to the TUI.
pub fn init_file_logging(logs_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(logs_dir)
        .with_context(|| format!("creating {}", logs_dir.display()))?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_file = logs_dir.join(format!("calorie_tracker_{}.log", timestamp));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("opening {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .context("installing tracing subscriber")?;

    tracing::info!(file = %log_file.display(), "=== calorie tracker log started ===");
    Ok(log_file)
}

pub fn init_stderr_logging() -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("installing tracing subscriber")?;
    Ok(())
}
