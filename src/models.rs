use std::fmt;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::streak::StreakState;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemStatus {
    #[value(alias = "not_started")]
    NotStarted,
    Attempted,
    Solved,
    #[value(alias = "needs_review")]
    NeedsReview,
}

impl fmt::Display for ProblemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemStatus::NotStarted => write!(f, "not_started"),
            ProblemStatus::Attempted => write!(f, "attempted"),
            ProblemStatus::Solved => write!(f, "solved"),
            ProblemStatus::NeedsReview => write!(f, "needs_review"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub id: String,
    pub name: String,
    pub difficulty: Difficulty,
    pub category: String,
    #[serde(default)]
    pub leetcode_url: String,
    pub status: ProblemStatus,
    #[serde(default)]
    pub notes: String,
    #[serde(default, deserialize_with = "lenient::date")]
    pub last_attempted: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::date")]
    pub next_review: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub review_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: String,
    pub deck_id: String,
    pub front: String,
    pub back: String,
    #[serde(default, deserialize_with = "lenient::date")]
    pub last_reviewed: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::date")]
    pub next_review: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub review_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub daily_goal: u32,
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
}

fn default_dark_mode() -> bool {
    true
}

/// Everything persisted under the problem-tracking key, and the shape of an
/// export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProgress {
    pub problems: Vec<Problem>,
    pub streak: StreakState,
    pub settings: Settings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashcardProgress {
    pub cards: Vec<Flashcard>,
}

/// Field decoders that never reject a value: bad dates become "never",
/// bad counts degrade to the nearest valid count.
pub mod lenient {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use crate::clock::parse_date;

    pub fn date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) => parse_date(&s),
            _ => None,
        })
    }

    pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let n = match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.floor() as i64))
                .unwrap_or(0),
            _ => 0,
        };
        Ok(n.clamp(0, i64::from(u32::MAX)) as u32)
    }
}
