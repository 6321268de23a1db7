pub mod catalog;
pub mod parser;
pub mod payload;
pub mod ports;
pub mod prompt;
pub mod session;
pub mod suggest;

use tracing::{debug, info, warn};

use catalog::{ExerciseEntry, DEFAULT_CATALOG};
use parser::{ParseOutcome, ReplyParser, TokenScanParser};
use payload::{DisplayPayload, Guidance, Notice};
use ports::{ChartPort, ChartSeries, EstimatorPort};
use session::SessionState;

/// Headless calorie tracker: one submission in, one display payload out.
pub struct CalorieTracker<E: EstimatorPort, C: ChartPort, P: ReplyParser = TokenScanParser> {
    estimator: E,
    chart: C,
    parser: P,
    catalog: &'static [ExerciseEntry],
}

impl<E: EstimatorPort, C: ChartPort> CalorieTracker<E, C> {
    pub fn new(estimator: E, chart: C) -> Self {
        Self { estimator, chart, parser: TokenScanParser::new(), catalog: DEFAULT_CATALOG }
    }
}

impl<E: EstimatorPort, C: ChartPort, P: ReplyParser> CalorieTracker<E, C, P> {
    pub fn with_parser<P2: ReplyParser>(self, parser: P2) -> CalorieTracker<E, C, P2> {
        CalorieTracker { estimator: self.estimator, chart: self.chart, parser, catalog: self.catalog }
    }

    pub fn with_catalog(mut self, catalog: &'static [ExerciseEntry]) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    pub fn chart(&self) -> &C {
        &self.chart
    }

    /// Run one interaction against `session`.
    ///
    /// Blank text is a redraw: nothing is estimated and history is left alone.
    /// Every other submission appends exactly one history snapshot, even when
    /// estimation fails or the reply cannot be parsed.
    pub async fn handle_submission(&self, user_text: &str, session: &mut SessionState) -> DisplayPayload {
        let text = user_text.trim();
        let mut reply = None;
        let mut delta = None;
        let mut notice = None;

        if !text.is_empty() {
            match self.estimator.estimate(text).await {
                Ok(r) => {
                    match self.parser.parse(&r) {
                        ParseOutcome::Delta(d) => {
                            session.apply(&d);
                            info!(input = text, magnitude = d.magnitude, direction = d.direction.as_str(),
                                  total = session.running_total, "applied calorie delta");
                            delta = Some(d);
                        }
                        ParseOutcome::NoNumber => {
                            warn!(input = text, reply = %r, "no calorie number in reply");
                            notice = Some(Notice::NoCalorieData);
                        }
                        ParseOutcome::NoDirection { magnitude } => {
                            warn!(input = text, magnitude, "reply had no gained/burned keyword");
                            notice = Some(Notice::NoDirection);
                        }
                    }
                    reply = Some(r);
                }
                Err(e) => {
                    warn!(input = text, error = %e, "calorie estimation failed");
                    notice = Some(Notice::EstimationFailed(format!("{:#}", e)));
                }
            }
            session.record_snapshot();
        } else {
            debug!("blank submission, redrawing only");
        }

        let series = ChartSeries::new(session.chart_points());
        if let Err(e) = self.chart.render(&series).await {
            warn!(error = %e, "chart render failed");
        }

        DisplayPayload {
            reply,
            delta,
            notice,
            running_total: session.running_total,
            guidance: self.guidance(session.running_total),
            history: session.history.clone(),
        }
    }

    fn guidance(&self, total: i64) -> Guidance {
        if total > 0 {
            Guidance::Suggestions(suggest::suggest_from(self.catalog, total))
        } else if total < 0 {
            Guidance::Overshoot(total.unsigned_abs())
        } else {
            Guidance::TargetReached
        }
    }
}

// Simple in-crate mocks for demo/testing
pub mod mocks {
    use super::*;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays canned replies in order and records the text it was asked about.
    #[derive(Default)]
    pub struct ScriptedEstimator {
        replies: Mutex<VecDeque<Result<String, String>>>,
        seen: Mutex<Vec<String>>,
    }

    impl ScriptedEstimator {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply(self, text: &str) -> Self {
            self.replies.lock().unwrap().push_back(Ok(text.to_string()));
            self
        }

        pub fn fail(self, error: &str) -> Self {
            self.replies.lock().unwrap().push_back(Err(error.to_string()));
            self
        }

        pub fn seen(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EstimatorPort for ScriptedEstimator {
        async fn estimate(&self, text: &str) -> Result<String> {
            self.seen.lock().unwrap().push(text.to_string());
            match self.replies.lock().unwrap().pop_front() {
                Some(Ok(reply)) => Ok(reply),
                Some(Err(e)) => Err(anyhow!(e)),
                None => Err(anyhow!("no scripted reply left for {:?}", text)),
            }
        }
    }

    /// Keeps every series it was asked to draw.
    #[derive(Default)]
    pub struct RecordingChart {
        rendered: Mutex<Vec<ChartSeries>>,
    }

    impl RecordingChart {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn rendered(&self) -> Vec<ChartSeries> {
            self.rendered.lock().unwrap().clone()
        }

        pub fn last(&self) -> Option<ChartSeries> {
            self.rendered.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl ChartPort for RecordingChart {
        async fn render(&self, series: &ChartSeries) -> Result<()> {
            self.rendered.lock().unwrap().push(series.clone());
            Ok(())
        }
    }
}
