use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::days_between;
use crate::models::lenient;

/// Consecutive-day activity counter.
///
/// `current` is the stored value. For display, go through
/// [`StreakState::effective_count`], which reports 0 once the streak has
/// lapsed without touching the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakState {
    #[serde(deserialize_with = "lenient::count")]
    pub current: u32,
    #[serde(default, deserialize_with = "lenient::date")]
    pub last_active_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakStatus {
    None,
    Active,
    AtRisk,
    Broken,
}

impl StreakStatus {
    pub fn message(&self) -> &'static str {
        match self {
            StreakStatus::Active => "You're on fire today!",
            StreakStatus::AtRisk => "Solve a problem to keep your streak!",
            StreakStatus::Broken => "Start a new streak today!",
            StreakStatus::None => "Start your streak!",
        }
    }
}

impl fmt::Display for StreakStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreakStatus::None => write!(f, "none"),
            StreakStatus::Active => write!(f, "active"),
            StreakStatus::AtRisk => write!(f, "at_risk"),
            StreakStatus::Broken => write!(f, "broken"),
        }
    }
}

impl StreakState {
    /// Apply one "activity happened" signal for `today`.
    ///
    /// Same-day calls are no-ops, a one-day gap extends the streak and any
    /// longer gap restarts it at 1. A last-active date in the future is
    /// treated like same-day activity.
    pub fn record_activity(&self, today: NaiveDate) -> StreakState {
        let Some(last) = self.last_active_date else {
            return StreakState {
                current: 1,
                last_active_date: Some(today),
            };
        };

        match days_between(last, today) {
            gap if gap <= 0 => self.clone(),
            1 => StreakState {
                current: self.current.saturating_add(1),
                last_active_date: Some(today),
            },
            _ => StreakState {
                current: 1,
                last_active_date: Some(today),
            },
        }
    }

    pub fn status(&self, today: NaiveDate) -> StreakStatus {
        let Some(last) = self.last_active_date else {
            return StreakStatus::None;
        };

        match days_between(last, today) {
            1 => StreakStatus::AtRisk,
            gap if gap > 1 => StreakStatus::Broken,
            _ => StreakStatus::Active,
        }
    }

    pub fn is_broken(&self, today: NaiveDate) -> bool {
        self.status(today) == StreakStatus::Broken
    }

    /// Count to show the user: 0 when broken or never started.
    pub fn effective_count(&self, today: NaiveDate) -> u32 {
        match self.status(today) {
            StreakStatus::Broken | StreakStatus::None => 0,
            StreakStatus::Active | StreakStatus::AtRisk => self.current,
        }
    }
}
