use ratatui::style::{Color, Modifier, Style};
use crate::constants::prefixes;

pub struct Styles;

impl Styles {
    pub fn default() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn mode_indicator() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn total_indicator(total: i64) -> Style {
        let color = match total {
            t if t > 0 => Color::Yellow,
            t if t < 0 => Color::Cyan,
            _ => Color::Green,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn help_key() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn help_desc() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn help_title() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn chart_line() -> Style {
        Style::default().fg(Color::Blue)
    }

    pub fn axis() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn for_output_line(line: &str) -> Style {
        if line.starts_with(prefixes::INPUT) {
            Style::default().fg(Color::Cyan)
        } else if line.starts_with(prefixes::RESPONSE) {
            Self::dimmed()
        } else if line.starts_with(prefixes::SUGGESTION) {
            Style::default().fg(Color::Green)
        } else if line.starts_with(prefixes::FAILURE) || line.starts_with(prefixes::NO_DATA) {
            Style::default().fg(Color::Red)
        } else {
            Self::default()
        }
    }
}
