use ratatui::{
    layout::Rect,
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use crate::app::App;
use super::styles::Styles;

pub struct ChartPane;

impl ChartPane {
    pub fn render(frame: &mut Frame, area: &Rect, app: &App) {
        let series = app.chart.snapshot();
        let data: Vec<(f64, f64)> = series.points
            .iter()
            .map(|(x, y)| (*x as f64, *y as f64))
            .collect();

        let x_max = series.points.len().saturating_sub(1).max(1) as f64;
        let (lo, hi) = series.y_bounds();
        let (y_min, y_max) = padded_bounds(lo, hi);

        let dataset = Dataset::default()
            .name(series.legend)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Styles::chart_line())
            .data(&data);

        let chart = Chart::new(vec![dataset])
            .block(Block::default().title(format!(" {} ", series.title)).borders(Borders::ALL))
            .x_axis(
                Axis::default()
                    .title(series.x_label)
                    .style(Styles::axis())
                    .bounds([0.0, x_max])
                    .labels(vec![Span::raw("0"), Span::raw(format!("{}", x_max as usize))]),
            )
            .y_axis(
                Axis::default()
                    .title(series.y_label)
                    .style(Styles::axis())
                    .bounds([y_min, y_max])
                    .labels(vec![
                        Span::raw(format!("{:.0}", y_min)),
                        Span::raw(format!("{:.0}", (y_min + y_max) / 2.0)),
                        Span::raw(format!("{:.0}", y_max)),
                    ]),
            );

        frame.render_widget(chart, *area);
    }
}

/// Y-axis bounds with 10% headroom; a flat series gets ±10.
fn padded_bounds(min: i64, max: i64) -> (f64, f64) {
    let (min, max) = (min as f64, max as f64);
    if max - min < f64::EPSILON {
        return (min - 10.0, max + 10.0);
    }
    let pad = (max - min) * 0.1;
    (min - pad, max + pad)
}
