use anyhow::Result;
use tracing::info;

use tracker::backend::GeminiEstimator;
use tracker::config;
use tracker::settings::AppSettings;

#[tokio::main]
async fn main() -> Result<()> {
    for problem in config::load_dotenv() {
        eprintln!("Warning: {:#}", problem);
    }

    // Missing credential is fatal: nothing works without the model.
    let api_key = match config::load_api_key() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Please run: export {}=your_key_here", config::API_KEY_ENV);
            std::process::exit(1);
        }
    };

    let settings = AppSettings::load();
    let estimator = GeminiEstimator::from_settings(api_key, &settings)?;
    run(estimator, &settings).await
}

#[cfg(feature = "tui")]
async fn run(estimator: GeminiEstimator, settings: &AppSettings) -> Result<()> {
    use tracker::app::App;
    use tracker::backend::SharedChart;
    use tracker::{constants, logger};
    use tracker_core::CalorieTracker;

    let log_file = logger::init_file_logging(std::path::Path::new(constants::LOGS_DIR))?;
    info!(model = %settings.model, examples = ?settings.examples_path, "starting calorie tracker (tui)");

    let chart = SharedChart::new();
    let tracker = CalorieTracker::new(estimator, chart.clone());
    let mut app = App::new(chart);

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_application(&mut terminal, &mut app, &tracker).await;
    tui::restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }
    eprintln!("Log written to {}", log_file.display());
    Ok(())
}

#[cfg(not(feature = "tui"))]
async fn run(estimator: GeminiEstimator, settings: &AppSettings) -> Result<()> {
    use tracker::backend::TextChart;
    use tracker::{headless, logger};
    use tracker_core::CalorieTracker;

    logger::init_stderr_logging()?;
    info!(model = %settings.model, examples = ?settings.examples_path, "starting calorie tracker (headless)");

    // Both writers go through the process-wide stdout buffer and flush per line.
    let tracker = CalorieTracker::new(estimator, TextChart::new(std::io::stdout()));
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    headless::run(&tracker, stdin, &mut stdout).await?;
    Ok(())
}

#[cfg(feature = "tui")]
mod tui {
    use anyhow::Result;
    use crossterm::{
        event::{self, Event},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{backend::CrosstermBackend, Terminal};
    use std::{io, time::Duration};

    use tracker::app::App;
    use tracker::backend::SharedChart;
    use tracker::constants;
    use tracker::handlers::{InputHandler, KeyAction};
    use tracker::ui::UI;
    use tracker_core::ports::EstimatorPort;
    use tracker_core::CalorieTracker;

    pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Ok(Terminal::new(backend)?)
    }

    pub fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    pub async fn run_application<B, E>(
        terminal: &mut Terminal<B>,
        app: &mut App,
        tracker: &CalorieTracker<E, SharedChart>,
    ) -> Result<()>
    where
        B: ratatui::backend::Backend,
        E: EstimatorPort,
    {
        // First frame shows the starting snapshot.
        app.submit(tracker, "").await;

        loop {
            terminal.draw(|frame| UI::draw(frame, &*app))?;

            if !event::poll(Duration::from_millis(constants::POLL_INTERVAL_MS))? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                match InputHandler::handle_key(app, key) {
                    KeyAction::Quit => break,
                    KeyAction::Submit(text) => {
                        // Show the busy state before blocking on the model.
                        terminal.draw(|frame| UI::draw(frame, &*app))?;
                        app.submit(tracker, &text).await;
                    }
                    KeyAction::None => {}
                }
            }
        }
        Ok(())
    }
}
