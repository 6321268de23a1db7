use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Gained,
    Burned,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Gained => "gained",
            Direction::Burned => "burned",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalorieDelta {
    pub magnitude: u64,
    pub direction: Direction,
}

impl CalorieDelta {
    pub fn signed(&self) -> i64 {
        let m = i64::try_from(self.magnitude).unwrap_or(i64::MAX);
        match self.direction {
            Direction::Gained => m,
            Direction::Burned => -m,
        }
    }
}

/// What a reply yielded. Only `Delta` changes the running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    Delta(CalorieDelta),
    NoNumber,
    NoDirection { magnitude: u64 },
}

impl ParseOutcome {
    pub fn delta(&self) -> Option<CalorieDelta> {
        match self {
            ParseOutcome::Delta(d) => Some(*d),
            _ => None,
        }
    }
}

/// Turns a free-text model reply into a calorie change.
pub trait ReplyParser: Send + Sync {
    fn parse(&self, reply: &str) -> ParseOutcome;
}

/// First all-digit whitespace token is the magnitude; direction comes from a
/// substring search where "burned" wins over "gained".
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenScanParser;

impl TokenScanParser {
    pub fn new() -> Self {
        Self
    }
}

impl ReplyParser for TokenScanParser {
    fn parse(&self, reply: &str) -> ParseOutcome {
        let Some(magnitude) = first_number_token(reply) else {
            return ParseOutcome::NoNumber;
        };
        let direction = if reply.contains("burned") {
            Direction::Burned
        } else if reply.contains("gained") {
            Direction::Gained
        } else {
            return ParseOutcome::NoDirection { magnitude };
        };
        ParseOutcome::Delta(CalorieDelta { magnitude, direction })
    }
}

/// The first digit-only token decides; one too large for `u64` saturates.
fn first_number_token(reply: &str) -> Option<u64> {
    let tok = reply
        .split_whitespace()
        .find(|tok| tok.bytes().all(|b| b.is_ascii_digit()))?;
    Some(tok.parse::<u64>().unwrap_or(u64::MAX))
}
