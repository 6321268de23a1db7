use tracker_core::{
    CalorieTracker,
    catalog::ExerciseEntry,
    mocks::{RecordingChart, ScriptedEstimator},
    payload::Guidance,
    session::SessionState,
};

#[tokio::test]
async fn test_history_grows_once_per_submission() {
    let replies = [
        "52 calories gained",
        "300 calories burned",
        "500 calories gained",
        "23 calories gained",
        "200 calories burned",
    ];
    let estimator = replies
        .iter()
        .fold(ScriptedEstimator::new(), |est, r| est.reply(r));
    let core = CalorieTracker::new(estimator, RecordingChart::new());
    let mut session = SessionState::new();

    for (n, input) in ["apple", "run", "steak", "spinach", "yoga"].iter().enumerate() {
        core.handle_submission(input, &mut session).await;
        assert_eq!(session.history.len(), n + 2);
        assert_eq!(session.history.last(), Some(&session.running_total));
        // redraws do not add snapshots
        core.handle_submission("", &mut session).await;
        assert_eq!(session.history.len(), n + 2);
    }

    assert_eq!(session.running_total, 52 - 300 + 500 + 23 - 200);
    assert_eq!(session.interactions(), 5);
    assert_eq!(core.chart().rendered().len(), 10);
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let estimator = ScriptedEstimator::new()
        .reply("52 calories gained")
        .reply("600 calories burned");
    let core = CalorieTracker::new(estimator, RecordingChart::new());
    let mut alice = SessionState::new();
    let mut bob = SessionState::new();

    core.handle_submission("apple", &mut alice).await;
    core.handle_submission("running 1 hour", &mut bob).await;

    assert_eq!(alice.running_total, 52);
    assert_eq!(bob.running_total, -600);
    assert_eq!(alice.history, vec![0, 52]);
    assert_eq!(bob.history, vec![0, -600]);
}

#[tokio::test]
async fn test_custom_catalog_drives_suggestions() {
    static CATALOG: &[ExerciseEntry] = &[ExerciseEntry::new("rowing", 100)];
    let estimator = ScriptedEstimator::new().reply("150 calories gained");
    let core = CalorieTracker::new(estimator, RecordingChart::new()).with_catalog(CATALOG);
    let mut session = SessionState::new();

    let payload = core.handle_submission("bagel", &mut session).await;
    assert_eq!(
        payload.guidance,
        Guidance::Suggestions(vec!["Do rowing for 90 minutes to burn 150 calories.".to_string()])
    );
}

#[tokio::test]
async fn test_session_state_serializes() {
    let mut session = SessionState::new();
    session.running_total = 12;
    session.history.push(12);
    let json = serde_json::to_string(&session).unwrap();
    let back: SessionState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, session);
}
