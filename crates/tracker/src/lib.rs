pub mod backend;
pub mod config;
pub mod constants;
pub mod headless;
pub mod logger;
pub mod settings;
pub mod types;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod handlers;
#[cfg(feature = "tui")]
pub mod ui;
