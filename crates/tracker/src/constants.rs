pub const MAX_OUTPUT_LINES: usize = 1000;
pub const POLL_INTERVAL_MS: u64 = 50;
pub const PAGE_SCROLL_LINES: usize = 10;
pub const LOGS_DIR: &str = "logs";

pub mod prefixes {
    pub const INPUT: &str = "INPUT>";
    pub const RESPONSE: &str = "Response:";
    pub const FAILURE: &str = "Calorie estimation failed";
    pub const NO_DATA: &str = "No calorie data";
    pub const SUGGESTION: &str = "- ";
}

pub mod messages {
    pub const WELCOME: &str = "Track your calorie intake/expenditure and get exercise suggestions.";
    pub const PROMPT: &str = "Enter food or exercise performed:";
    pub const ESTIMATING: &str = "estimating…";
}
