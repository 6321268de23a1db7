use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;

use tracker_core::ports::{ChartPort, EstimatorPort};
use tracker_core::session::SessionState;
use tracker_core::CalorieTracker;

use crate::constants::{messages, prefixes};

/// Line-oriented loop: one submission per input line until EOF.
pub async fn run<E, C, R, W>(tracker: &CalorieTracker<E, C>, reader: R, out: &mut W) -> Result<SessionState>
where
    E: EstimatorPort,
    C: ChartPort,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = SessionState::new();
    let mut lines = reader.lines();

    writeln!(out, "{}", messages::WELCOME)?;
    writeln!(out, "{}", messages::PROMPT)?;
    out.flush()?;

    while let Some(line) = lines.next_line().await? {
        let text = line.trim();
        if !text.is_empty() {
            writeln!(out, "{} {}", prefixes::INPUT, text)?;
        }
        let payload = tracker.handle_submission(text, &mut session).await;
        if !text.is_empty() {
            for l in payload.lines() {
                writeln!(out, "{}", l)?;
            }
        }
        out.flush()?;
    }

    info!(interactions = session.interactions(), total = session.running_total, "input closed");
    Ok(session)
}
