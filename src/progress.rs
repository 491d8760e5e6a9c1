use chrono::NaiveDate;
use tracing::{debug, info};

use crate::due::Reviewable;
use crate::error::GrindstoneError;
use crate::models::{Flashcard, FlashcardProgress, Problem, ProblemStatus, UserProgress};
use crate::srs;

/// New copy of `problem` after a status change on `today`.
///
/// Only `solved` and `needs_review` move the schedule. `attempted` stamps
/// the date, and `not_started` is a manual override that keeps history.
pub fn apply_problem_status(problem: &Problem, status: ProblemStatus, today: NaiveDate) -> Problem {
    let mut updated = problem.clone();
    updated.status = status;

    match status {
        ProblemStatus::Solved => {
            updated.last_attempted = Some(today);
            updated.next_review = Some(srs::next_review_after_success(problem.review_count, today));
            updated.review_count = problem.review_count.saturating_add(1);
        }
        ProblemStatus::NeedsReview => {
            let reset = srs::reset_after_failure(today);
            updated.last_attempted = Some(today);
            updated.next_review = Some(reset.next_review);
            updated.review_count = reset.review_count;
        }
        ProblemStatus::Attempted => {
            updated.last_attempted = Some(today);
        }
        ProblemStatus::NotStarted => {}
    }

    updated
}

/// New copy of `card` after a correct/incorrect grade on `today`.
pub fn apply_flashcard_grade(card: &Flashcard, correct: bool, today: NaiveDate) -> Flashcard {
    let mut updated = card.clone();
    updated.last_reviewed = Some(today);

    if correct {
        updated.next_review = Some(srs::next_review_after_success(card.review_count, today));
        updated.review_count = card.review_count.saturating_add(1);
    } else {
        let reset = srs::reset_after_failure(today);
        updated.next_review = Some(reset.next_review);
        updated.review_count = reset.review_count;
    }

    updated
}

fn position<T: Reviewable>(items: &[T], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// Apply a status change to one problem of the snapshot. Marking a problem
/// solved also counts as streak activity for `today`.
pub fn update_problem_status(
    progress: &UserProgress,
    problem_id: &str,
    status: ProblemStatus,
    today: NaiveDate,
) -> Result<UserProgress, GrindstoneError> {
    let idx = position(&progress.problems, problem_id)
        .ok_or_else(|| GrindstoneError::ProblemNotFound(problem_id.to_string()))?;

    let mut next = progress.clone();
    next.problems[idx] = apply_problem_status(&progress.problems[idx], status, today);
    debug!(problem = problem_id, %status, "problem status updated");

    if status == ProblemStatus::Solved {
        next.streak = progress.streak.record_activity(today);
        if next.streak.current != progress.streak.current {
            info!(
                from = progress.streak.current,
                to = next.streak.current,
                "streak changed"
            );
        }
    }

    Ok(next)
}

pub fn grade_flashcard(
    progress: &FlashcardProgress,
    card_id: &str,
    correct: bool,
    today: NaiveDate,
) -> Result<FlashcardProgress, GrindstoneError> {
    let idx = position(&progress.cards, card_id)
        .ok_or_else(|| GrindstoneError::CardNotFound(card_id.to_string()))?;

    let mut next = progress.clone();
    next.cards[idx] = apply_flashcard_grade(&progress.cards[idx], correct, today);
    debug!(card = card_id, correct, "flashcard graded");
    Ok(next)
}

/// Replace a problem's notes. Scheduling fields are left alone.
pub fn set_notes(
    progress: &UserProgress,
    problem_id: &str,
    notes: &str,
) -> Result<UserProgress, GrindstoneError> {
    let idx = position(&progress.problems, problem_id)
        .ok_or_else(|| GrindstoneError::ProblemNotFound(problem_id.to_string()))?;

    let mut next = progress.clone();
    next.problems[idx].notes = notes.to_string();
    Ok(next)
}

pub fn set_daily_goal(progress: &UserProgress, daily_goal: u32) -> UserProgress {
    let mut next = progress.clone();
    next.settings.daily_goal = daily_goal;
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Settings};
    use crate::streak::StreakState;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn problem(id: &str) -> Problem {
        Problem {
            id: id.into(),
            name: id.into(),
            difficulty: Difficulty::Medium,
            category: "trees".into(),
            leetcode_url: String::new(),
            status: ProblemStatus::NotStarted,
            notes: String::new(),
            last_attempted: None,
            next_review: None,
            review_count: 0,
        }
    }

    fn card(id: &str) -> Flashcard {
        Flashcard {
            id: id.into(),
            deck_id: "sorting".into(),
            front: "f".into(),
            back: "b".into(),
            last_reviewed: None,
            next_review: None,
            review_count: 0,
        }
    }

    fn snapshot() -> UserProgress {
        UserProgress {
            problems: vec![problem("a"), problem("b")],
            streak: StreakState::default(),
            settings: Settings {
                daily_goal: 3,
                dark_mode: true,
            },
        }
    }

    #[test]
    fn test_solved_follows_scheduler() {
        let today = date(2024, 1, 1);
        let mut p = problem("a");
        p.review_count = 2;
        let updated = apply_problem_status(&p, ProblemStatus::Solved, today);
        assert_eq!(updated.status, ProblemStatus::Solved);
        assert_eq!(updated.review_count, 3);
        assert_eq!(updated.last_attempted, Some(today));
        assert_eq!(updated.next_review, Some(srs::next_review_after_success(2, today)));
        assert_eq!(updated.next_review, Some(date(2024, 1, 8)));
    }

    #[test]
    fn test_needs_review_resets_ladder() {
        let today = date(2024, 1, 1);
        let mut p = problem("a");
        p.review_count = 4;
        p.next_review = Some(date(2024, 1, 20));
        let updated = apply_problem_status(&p, ProblemStatus::NeedsReview, today);
        assert_eq!(updated.review_count, 0);
        assert_eq!(updated.next_review, Some(date(2024, 1, 2)));
        assert_eq!(updated.last_attempted, Some(today));
    }

    #[test]
    fn test_attempted_only_stamps_date() {
        let today = date(2024, 1, 1);
        let mut p = problem("a");
        p.review_count = 2;
        p.next_review = Some(date(2024, 1, 5));
        let updated = apply_problem_status(&p, ProblemStatus::Attempted, today);
        assert_eq!(updated.status, ProblemStatus::Attempted);
        assert_eq!(updated.last_attempted, Some(today));
        assert_eq!(updated.review_count, 2);
        assert_eq!(updated.next_review, Some(date(2024, 1, 5)));
    }

    #[test]
    fn test_not_started_keeps_history() {
        let mut p = problem("a");
        p.status = ProblemStatus::Solved;
        p.review_count = 3;
        p.last_attempted = Some(date(2023, 12, 1));
        p.next_review = Some(date(2023, 12, 15));
        let updated = apply_problem_status(&p, ProblemStatus::NotStarted, date(2024, 1, 1));
        assert_eq!(updated.status, ProblemStatus::NotStarted);
        assert_eq!(updated.review_count, 3);
        assert_eq!(updated.last_attempted, Some(date(2023, 12, 1)));
        assert_eq!(updated.next_review, Some(date(2023, 12, 15)));
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let p = problem("a");
        let before = p.clone();
        let _ = apply_problem_status(&p, ProblemStatus::Solved, date(2024, 1, 1));
        assert_eq!(p, before);

        let c = card("c");
        let before = c.clone();
        let _ = apply_flashcard_grade(&c, true, date(2024, 1, 1));
        assert_eq!(c, before);
    }

    #[test]
    fn test_flashcard_grades() {
        let today = date(2024, 1, 1);
        let mut c = card("c");
        c.review_count = 1;
        let right = apply_flashcard_grade(&c, true, today);
        assert_eq!(right.review_count, 2);
        assert_eq!(right.next_review, Some(date(2024, 1, 4)));
        assert_eq!(right.last_reviewed, Some(today));

        let wrong = apply_flashcard_grade(&right, false, date(2024, 1, 4));
        assert_eq!(wrong.review_count, 0);
        assert_eq!(wrong.next_review, Some(date(2024, 1, 5)));
        assert_eq!(wrong.last_reviewed, Some(date(2024, 1, 4)));
    }

    #[test]
    fn test_update_problem_status_records_streak_on_solved() {
        let today = date(2024, 1, 1);
        let before = snapshot();
        let after = update_problem_status(&before, "b", ProblemStatus::Solved, today).unwrap();
        assert_eq!(after.streak.current, 1);
        assert_eq!(after.streak.last_active_date, Some(today));
        assert_eq!(after.problems[1].status, ProblemStatus::Solved);
        assert_eq!(after.problems[0], before.problems[0]);
        // input snapshot untouched
        assert_eq!(before, snapshot());

        let again = update_problem_status(&after, "a", ProblemStatus::Solved, today).unwrap();
        assert_eq!(again.streak.current, 1);
    }

    #[test]
    fn test_update_problem_status_other_statuses_skip_streak() {
        let today = date(2024, 1, 1);
        for status in [
            ProblemStatus::Attempted,
            ProblemStatus::NeedsReview,
            ProblemStatus::NotStarted,
        ] {
            let after = update_problem_status(&snapshot(), "a", status, today).unwrap();
            assert_eq!(after.streak, StreakState::default(), "{status} touched the streak");
        }
    }

    #[test]
    fn test_unknown_ids_are_errors() {
        let err = update_problem_status(&snapshot(), "zzz", ProblemStatus::Solved, date(2024, 1, 1))
            .unwrap_err();
        assert!(matches!(err, GrindstoneError::ProblemNotFound(_)));

        let cards = FlashcardProgress { cards: vec![card("c")] };
        let err = grade_flashcard(&cards, "zzz", true, date(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, GrindstoneError::CardNotFound(_)));
    }

    #[test]
    fn test_grade_flashcard_replaces_only_target() {
        let cards = FlashcardProgress {
            cards: vec![card("c0"), card("c1")],
        };
        let after = grade_flashcard(&cards, "c1", true, date(2024, 1, 1)).unwrap();
        assert_eq!(after.cards[0], cards.cards[0]);
        assert_eq!(after.cards[1].review_count, 1);
    }

    #[test]
    fn test_set_notes_and_goal() {
        let before = snapshot();
        let after = set_notes(&before, "a", "use a hashmap").unwrap();
        assert_eq!(after.problems[0].notes, "use a hashmap");
        assert_eq!(after.problems[0].next_review, None);
        assert!(set_notes(&before, "missing", "x").is_err());

        let after = set_daily_goal(&before, 7);
        assert_eq!(after.settings.daily_goal, 7);
        assert_eq!(before.settings.daily_goal, 3);
    }
}
