use serde::Serialize;

use crate::parser::CalorieDelta;

/// Advice derived from the running total after a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Guidance {
    Suggestions(Vec<String>),
    Overshoot(u64),
    TargetReached,
}

/// Non-fatal problems surfaced to the user for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum Notice {
    EstimationFailed(String),
    NoCalorieData,
    NoDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayPayload {
    pub reply: Option<String>,
    pub delta: Option<CalorieDelta>,
    pub notice: Option<Notice>,
    pub running_total: i64,
    pub guidance: Guidance,
    pub history: Vec<i64>,
}

impl DisplayPayload {
    /// User-facing text, one entry per line.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(reply) = &self.reply {
            out.push(format!("Response: {}", reply.trim_end()));
        }
        if let Some(d) = &self.delta {
            out.push(format!(
                "You have {} {} calories. Updated daily calorie count: {} calories.",
                d.direction.as_str(), d.magnitude, self.running_total
            ));
        }
        match &self.notice {
            Some(Notice::EstimationFailed(e)) => out.push(format!("Calorie estimation failed: {}", e)),
            Some(Notice::NoCalorieData) => {
                out.push("No calorie data found in the response. Please try again.".to_string())
            }
            Some(Notice::NoDirection) => out.push(
                "The response did not say whether calories were gained or burned.".to_string(),
            ),
            None => {}
        }
        out.push(format!("Your current daily calorie count: {} calories", self.running_total));
        match &self.guidance {
            Guidance::Suggestions(list) => {
                out.push(format!("Suggested exercises to burn {} calories:", self.running_total));
                out.extend(list.iter().map(|s| format!("- {}", s)));
            }
            Guidance::Overshoot(n) => out.push(format!(
                "Your daily calorie target is overshot by {} calories. You might want to consider reducing intake.",
                n
            )),
            Guidance::TargetReached => out.push("You have reached your daily calorie target!".to_string()),
        }
        out
    }
}
