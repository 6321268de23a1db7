use std::io::Write;
use std::sync::{Arc, Mutex};

use tracker::backend::TextChart;
use tracker::headless;
use tracker_core::mocks::{RecordingChart, ScriptedEstimator};
use tracker_core::CalorieTracker;

#[tokio::test]
async fn test_headless_session_transcript() {
    let estimator = ScriptedEstimator::new()
        .reply("output: 52 calories gained")
        .reply("output: 300 calories burned");
    let tracker = CalorieTracker::new(estimator, RecordingChart::new());

    let input: &[u8] = b"apple\n\nrunning 30 minutes\n";
    let mut out = Vec::new();
    let session = headless::run(&tracker, input, &mut out).await.unwrap();

    assert_eq!(session.running_total, -248);
    assert_eq!(session.history, vec![0, 52, -248]);
    // blank line redraws the chart too
    assert_eq!(tracker.chart().rendered().len(), 3);

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Track your calorie intake/expenditure"));
    assert!(text.contains("INPUT> apple\nResponse: output: 52 calories gained\n"));
    assert!(text.contains("You have gained 52 calories. Updated daily calorie count: 52 calories."));
    assert!(text.contains("- Do running for 5 minutes."));
    assert!(text.contains("You have burned 300 calories. Updated daily calorie count: -248 calories."));
    assert!(text.contains("Your daily calorie target is overshot by 248 calories."));
}

#[tokio::test]
async fn test_headless_failure_does_not_stop_loop() {
    let estimator = ScriptedEstimator::new()
        .fail("gemini 503 Service Unavailable: overloaded")
        .reply("output: 89 calories gained");
    let tracker = CalorieTracker::new(estimator, TextChart::new(Vec::new()));

    let input: &[u8] = b"banana\nbanana\n";
    let mut out = Vec::new();
    let session = headless::run(&tracker, input, &mut out).await.unwrap();

    assert_eq!(session.running_total, 89);
    assert_eq!(session.history, vec![0, 0, 89]);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Calorie estimation failed: gemini 503 Service Unavailable: overloaded"));
}

/// One buffer behind two writers, like two handles on the same stdout.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_headless_chart_lines_interleave_with_payload() {
    let estimator = ScriptedEstimator::new()
        .reply("output: 52 calories gained")
        .reply("output: 300 calories burned");
    let out = SharedBuf::default();
    let tracker = CalorieTracker::new(estimator, TextChart::new(out.clone()));

    let input: &[u8] = b"apple\n\nrunning 30 minutes\n";
    let mut writer = out.clone();
    headless::run(&tracker, input, &mut writer).await.unwrap();

    let text = out.text();
    let lines: Vec<&str> = text.lines().collect();
    let charts: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.starts_with("Calorie Intake/Expenditure Over Time ["))
        .map(|(i, _)| i)
        .collect();
    // apple, the blank redraw, running
    assert_eq!(charts.len(), 3, "{}", text);
    assert!(lines[charts[0]].ends_with("0:0 1:52"));
    assert!(lines[charts[1]].ends_with("0:0 1:52"));
    assert!(lines[charts[2]].ends_with("0:0 1:52 2:-248"));

    let pos = |needle: &str| lines.iter().position(|l| l.starts_with(needle)).unwrap();
    let apple = pos("INPUT> apple");
    let apple_reply = pos("Response: output: 52");
    let running = pos("INPUT> running 30 minutes");
    let running_reply = pos("Response: output: 300");

    // chart is drawn during the submission: after its input echo, before its reply
    assert!(apple < charts[0] && charts[0] < apple_reply);
    // the redraw sits between the two submissions with no echo of its own
    assert!(apple_reply < charts[1] && charts[1] < running);
    assert!(running < charts[2] && charts[2] < running_reply);
    assert_eq!(lines.iter().filter(|l| l.starts_with("INPUT>")).count(), 2);
}
