use anyhow::Result;
use async_trait::async_trait;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::debug;

use llm::GenerationConfig;
use tracker_core::ports::{ChartPort, ChartSeries, EstimatorPort};
use tracker_core::prompt::{build_prompt, FewShotExamples};

use crate::settings::AppSettings;

/// Few-shot calorie estimation backed by Gemini.
pub struct GeminiEstimator {
    client: llm::Client,
    examples: FewShotExamples,
    generation: GenerationConfig,
}

impl GeminiEstimator {
    pub fn new(client: llm::Client, examples: FewShotExamples, generation: GenerationConfig) -> Self {
        Self { client, examples, generation }
    }

    pub fn from_settings(api_key: String, settings: &AppSettings) -> Result<Self> {
        let client = llm::Client::new(llm::Provider::Gemini, api_key, settings.model.clone())?;
        Ok(Self::new(client, settings.examples()?, settings.generation.clone()))
    }
}

#[async_trait]
impl EstimatorPort for GeminiEstimator {
    async fn estimate(&self, text: &str) -> Result<String> {
        let parts = build_prompt(&self.examples, text);
        debug!(model = self.client.model(), parts = parts.len(), "estimating calories");
        self.client.generate(&parts, &self.generation).await
    }
}

/// Latest series, shared with whatever draws the screen.
#[derive(Clone, Default)]
pub struct SharedChart(Arc<Mutex<ChartSeries>>);

impl SharedChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ChartSeries {
        self.0.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ChartPort for SharedChart {
    async fn render(&self, series: &ChartSeries) -> Result<()> {
        let mut guard = self.0.lock().map_err(|e| anyhow::anyhow!(e.to_string()))?;
        *guard = series.clone();
        Ok(())
    }
}

/// Prints the series as text; used by the line-oriented loop.
pub struct TextChart<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> TextChart<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

pub fn format_series(series: &ChartSeries) -> String {
    let points: Vec<String> = series.points.iter().map(|(x, y)| format!("{}:{}", x, y)).collect();
    let (min, max) = series.y_bounds();
    format!(
        "{} [{} vs {}, range {}..{}] {}",
        series.title, series.x_label, series.y_label, min, max, points.join(" ")
    )
}

#[async_trait]
impl<W: Write + Send> ChartPort for TextChart<W> {
    async fn render(&self, series: &ChartSeries) -> Result<()> {
        let mut out = self.out.lock().map_err(|e| anyhow::anyhow!(e.to_string()))?;
        writeln!(out, "{}", format_series(series))?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::payload::Notice;
    use tracker_core::session::SessionState;
    use tracker_core::CalorieTracker;

    #[tokio::test]
    async fn failure_notice_never_shows_the_api_key() {
        let client = llm::Client::new(llm::Provider::Gemini, "SECRET-KEY-123".into(), "gemini-1.5-flash".into())
            .unwrap()
            .with_base_url("http://127.0.0.1:9");
        let estimator = GeminiEstimator::new(client, FewShotExamples::default(), GenerationConfig::default());
        let tracker = CalorieTracker::new(estimator, SharedChart::new());
        let mut session = SessionState::new();

        let payload = tracker.handle_submission("apple", &mut session).await;
        assert!(matches!(payload.notice, Some(Notice::EstimationFailed(_))));
        let lines = payload.lines();
        assert!(lines[0].starts_with("Calorie estimation failed: request failed"));
        assert!(lines.iter().all(|l| !l.contains("SECRET-KEY-123")), "{:?}", lines);
        assert_eq!(session.history, vec![0, 0]);
    }

    #[tokio::test]
    async fn shared_chart_keeps_latest_series() {
        let chart = SharedChart::new();
        let reader = chart.clone();
        chart.render(&ChartSeries::new(vec![(0, 0), (1, 52)])).await.unwrap();
        assert_eq!(reader.snapshot().points, vec![(0, 0), (1, 52)]);
    }

    #[tokio::test]
    async fn text_chart_writes_one_line_per_render() {
        let chart = TextChart::new(Vec::new());
        chart.render(&ChartSeries::new(vec![(0, 0), (1, 52), (2, -248)])).await.unwrap();
        let text = String::from_utf8(chart.into_inner()).unwrap();
        assert_eq!(
            text,
            "Calorie Intake/Expenditure Over Time [Time Steps vs Calories, range -248..52] 0:0 1:52 2:-248\n"
        );
    }
}
