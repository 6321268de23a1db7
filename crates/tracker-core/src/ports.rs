use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

pub const CHART_TITLE: &str = "Calorie Intake/Expenditure Over Time";
pub const CHART_X_LABEL: &str = "Time Steps";
pub const CHART_Y_LABEL: &str = "Calories";
pub const CHART_LEGEND: &str = "Calories";

/// Text model that answers the few-shot calorie prompt.
#[async_trait]
pub trait EstimatorPort: Send + Sync {
    async fn estimate(&self, text: &str) -> Result<String>;
}

/// Receives the full history after every cycle; render-only.
#[async_trait]
pub trait ChartPort: Send + Sync {
    async fn render(&self, series: &ChartSeries) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub legend: &'static str,
    pub points: Vec<(usize, i64)>,
}

impl ChartSeries {
    pub fn new(points: Vec<(usize, i64)>) -> Self {
        Self {
            title: CHART_TITLE,
            x_label: CHART_X_LABEL,
            y_label: CHART_Y_LABEL,
            legend: CHART_LEGEND,
            points,
        }
    }

    /// Inclusive (min, max) of the y values, or (0, 0) when empty.
    pub fn y_bounds(&self) -> (i64, i64) {
        let min = self.points.iter().map(|p| p.1).min().unwrap_or(0);
        let max = self.points.iter().map(|p| p.1).max().unwrap_or(0);
        (min, max)
    }
}

impl Default for ChartSeries {
    fn default() -> Self {
        Self::new(vec![(0, 0)])
    }
}
