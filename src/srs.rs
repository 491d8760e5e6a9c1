use chrono::NaiveDate;

use crate::clock::add_days;

/// Interval in days, indexed by the review count *before* the successful
/// review is counted. Anything past the end reuses the last rung.
const LADDER: [u32; 5] = [1, 3, 7, 14, 30];

pub struct FailureReset {
    pub next_review: NaiveDate,
    pub review_count: u32,
}

/// Interval selected for an item that has been successfully reviewed
/// `review_count` times so far.
pub fn interval_days(review_count: u32) -> u32 {
    let idx = (review_count as usize).min(LADDER.len() - 1);
    LADDER[idx]
}

/// Next due date after a successful review. The caller increments the
/// review count separately; this uses the pre-increment value.
pub fn next_review_after_success(review_count: u32, today: NaiveDate) -> NaiveDate {
    add_days(today, interval_days(review_count))
}

/// A failed review restarts the ladder: due tomorrow, count back to zero.
pub fn reset_after_failure(today: NaiveDate) -> FailureReset {
    FailureReset {
        next_review: add_days(today, 1),
        review_count: 0,
    }
}

/// Display label for the interval `next_review_after_success` would pick.
pub fn describe_interval(review_count: u32) -> String {
    match interval_days(review_count) {
        1 => "Next review in 1 day".to_string(),
        n => format!("Next review in {n} days"),
    }
}
