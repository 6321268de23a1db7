use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MainLayout {
    pub output: Rect,
    pub chart: Rect,
    pub help: Rect,
    pub input: Rect,
}

pub struct LayoutManager;

impl LayoutManager {
    pub fn create_main_layout(area: Rect) -> MainLayout {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),      // Output + chart
                Constraint::Length(5),    // Help pane
                Constraint::Length(1),    // Input line
            ])
            .split(area);

        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(50),  // Output pane (left)
                Constraint::Percentage(50),  // Chart pane (right)
            ])
            .split(main_chunks[0]);

        MainLayout {
            output: content_chunks[0],
            chart: content_chunks[1],
            help: main_chunks[1],
            input: main_chunks[2],
        }
    }
}
