use tracker_core::ports::EstimatorPort;
use tracker_core::session::SessionState;
use tracker_core::CalorieTracker;

use crate::backend::SharedChart;
use crate::constants::{self, messages, prefixes};
use crate::types::{Mode, ScrollDirection, ScrollState};

pub struct App {
    pub output: Vec<String>,
    pub input: String,
    pub mode: Mode,
    pub scroll: ScrollState,
    pub session: SessionState,
    pub chart: SharedChart,
}

impl App {
    pub fn new(chart: SharedChart) -> Self {
        let mut app = Self {
            output: Vec::new(),
            input: String::new(),
            mode: Mode::Idle,
            scroll: ScrollState::new(),
            session: SessionState::new(),
            chart,
        };
        app.append_output(messages::WELCOME.to_string());
        app.append_output(messages::PROMPT.to_string());
        app
    }

    pub fn append_output(&mut self, line: String) {
        self.output.push(line);
        self.trim_output();
        // Auto-scroll to bottom if enabled
        if self.scroll.auto_scroll {
            self.scroll.scroll_to_bottom(self.get_max_scroll());
        }
    }

    fn trim_output(&mut self) {
        if self.output.len() > constants::MAX_OUTPUT_LINES {
            self.output.remove(0);
            if self.scroll.offset > 0 {
                self.scroll.offset = self.scroll.offset.saturating_sub(1);
            }
        }
    }

    pub fn get_max_scroll(&self) -> usize {
        self.output.len().saturating_sub(1)
    }

    pub fn handle_scroll(&mut self, direction: ScrollDirection, amount: usize) {
        let max = self.get_max_scroll();
        match direction {
            ScrollDirection::Up | ScrollDirection::PageUp => self.scroll.scroll_up(amount),
            ScrollDirection::Down | ScrollDirection::PageDown => self.scroll.scroll_down(amount, max),
            ScrollDirection::Home => {
                self.scroll.offset = 0;
                self.scroll.auto_scroll = false;
            }
            ScrollDirection::End => self.scroll.scroll_to_bottom(max),
        }
    }

    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input)
    }

    pub fn can_edit_input(&self) -> bool {
        self.mode == Mode::Idle
    }

    /// Run one submission through the tracker and show what came back.
    /// Blank input only refreshes the chart.
    pub async fn submit<E: EstimatorPort>(&mut self, tracker: &CalorieTracker<E, SharedChart>, text: &str) {
        let is_redraw = text.trim().is_empty();
        if !is_redraw {
            self.append_output(format!("{} {}", prefixes::INPUT, text.trim()));
        }

        let payload = tracker.handle_submission(text, &mut self.session).await;
        if !is_redraw {
            for line in payload.lines() {
                self.append_output(line);
            }
        }
        self.mode = Mode::Idle;
    }
}
