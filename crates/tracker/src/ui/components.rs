use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::types::Mode;
use super::styles::Styles;

pub struct OutputPane;

impl OutputPane {
    pub fn render(frame: &mut Frame, area: &Rect, app: &App) {
        let height = area.height.saturating_sub(2) as usize; // borders
        let total_lines = app.output.len();

        let start_idx = if total_lines > height {
            if app.scroll.auto_scroll {
                total_lines.saturating_sub(height)
            } else {
                std::cmp::min(app.scroll.offset, total_lines.saturating_sub(height))
            }
        } else {
            0
        };
        let end_idx = std::cmp::min(start_idx + height, total_lines);

        let items: Vec<ListItem<'_>> = app.output[start_idx..end_idx]
            .iter()
            .map(|line| ListItem::new(Line::from(line.as_str())).style(Styles::for_output_line(line)))
            .collect();

        let mut block = Block::default().title(" Calorie Tracker ").borders(Borders::ALL);
        if !app.scroll.auto_scroll {
            let indicator = format!(" [{}/{}] (End for latest) ",
                                    std::cmp::min(app.scroll.offset + 1, total_lines), total_lines);
            block = block.title_bottom(indicator);
        }

        let list = List::new(items).block(block).style(Styles::default());
        let widget = match app.mode {
            Mode::Estimating => list.style(Styles::dimmed()),
            Mode::Idle => list,
        };
        frame.render_widget(widget, *area);
    }
}

pub struct HelpPane;

impl HelpPane {
    pub fn render(frame: &mut Frame, area: &Rect, _app: &App) {
        let lines = vec![
            Line::from(vec![
                Self::key("Enter"), Self::desc("Submit food/exercise (empty: redraw)  "),
                Self::key("Esc"), Self::desc("Clear input"),
            ]),
            Line::from(vec![
                Self::key("↑/↓"), Self::desc("Scroll messages                       "),
                Self::key("PgUp/PgDn"), Self::desc("Page scroll"),
            ]),
            Line::from(vec![
                Self::key("End"), Self::desc("Jump to latest                        "),
                Self::key("Ctrl+C"), Self::desc("Quit"),
            ]),
        ];

        let widget = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Shortcuts ")
                    .borders(Borders::ALL)
                    .style(Styles::help_title())
            )
            .wrap(Wrap { trim: true });

        frame.render_widget(widget, *area);
    }

    fn key(key: &'static str) -> Span<'static> {
        Span::styled(format!("{:<10}", key), Styles::help_key())
    }

    fn desc(desc: &'static str) -> Span<'static> {
        Span::styled(desc, Styles::help_desc())
    }
}

pub struct InputLine;

impl InputLine {
    pub fn render(frame: &mut Frame, area: &Rect, app: &App) {
        let line = Line::from(Self::create_status_spans(app, area.width as usize));

        let widget = Paragraph::new(line)
            .style(Styles::default())
            .alignment(Alignment::Left);

        frame.render_widget(widget, *area);
    }

    fn create_status_spans(app: &App, width: usize) -> Vec<Span<'_>> {
        let mut spans = vec![Span::raw(format!("> {}", app.input))];

        let input_len = 2 + app.input.chars().count();
        let total = app.session.running_total;
        let total_display = format!("[total: {} kcal] ", total);
        let mode_display = format!("[mode: {}]", Self::mode_text(app.mode));
        let right_len = total_display.len() + mode_display.len();

        spans.push(Span::raw(" ".repeat(width.saturating_sub(input_len + right_len))));
        spans.push(Span::styled(total_display, Styles::total_indicator(total)));
        spans.push(Span::styled(mode_display, Styles::mode_indicator()));
        spans
    }

    fn mode_text(mode: Mode) -> &'static str {
        match mode {
            Mode::Idle => "Ready",
            Mode::Estimating => crate::constants::messages::ESTIMATING,
        }
    }
}
