use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Flashcard, Problem, ProblemStatus};

/// Anything scheduled by the review ladder.
pub trait Reviewable {
    fn id(&self) -> &str;
    fn review_count(&self) -> u32;
    fn last_reviewed(&self) -> Option<NaiveDate>;
    fn next_review(&self) -> Option<NaiveDate>;
}

impl Reviewable for Problem {
    fn id(&self) -> &str {
        &self.id
    }

    fn review_count(&self) -> u32 {
        self.review_count
    }

    fn last_reviewed(&self) -> Option<NaiveDate> {
        self.last_attempted
    }

    fn next_review(&self) -> Option<NaiveDate> {
        self.next_review
    }
}

impl Reviewable for Flashcard {
    fn id(&self) -> &str {
        &self.id
    }

    fn review_count(&self) -> u32 {
        self.review_count
    }

    fn last_reviewed(&self) -> Option<NaiveDate> {
        self.last_reviewed
    }

    fn next_review(&self) -> Option<NaiveDate> {
        self.next_review
    }
}

/// Never-scheduled items are always due; otherwise due on or after the date.
pub fn is_due<T: Reviewable>(item: &T, today: NaiveDate) -> bool {
    match item.next_review() {
        None => true,
        Some(next) => next <= today,
    }
}

/// Due items in their original order.
pub fn select_due<T: Reviewable>(items: &[T], today: NaiveDate) -> Vec<&T> {
    items.iter().filter(|item| is_due(*item, today)).collect()
}

/// Problems already in rotation (solved or flagged for review) that are
/// due, including ones whose schedule was lost. Untouched problems are
/// offered through [`suggest_new`] instead.
pub fn review_queue(problems: &[Problem], today: NaiveDate) -> Vec<&Problem> {
    problems
        .iter()
        .filter(|p| matches!(p.status, ProblemStatus::Solved | ProblemStatus::NeedsReview))
        .filter(|p| is_due(*p, today))
        .collect()
}

/// Up to `count` not-started problems: easiest first, then categories with
/// the smallest solved share, then catalog order.
pub fn suggest_new(problems: &[Problem], count: usize) -> Vec<&Problem> {
    // (solved, total) per category
    let mut progress: HashMap<&str, (u64, u64)> = HashMap::new();
    for p in problems {
        let entry = progress.entry(p.category.as_str()).or_insert((0, 0));
        entry.1 += 1;
        if p.status == ProblemStatus::Solved {
            entry.0 += 1;
        }
    }

    let ratio_cmp = |a: &Problem, b: &Problem| -> Ordering {
        let (a_solved, a_total) = progress[a.category.as_str()];
        let (b_solved, b_total) = progress[b.category.as_str()];
        (a_solved * b_total).cmp(&(b_solved * a_total))
    };

    let mut candidates: Vec<&Problem> = problems
        .iter()
        .filter(|p| p.status == ProblemStatus::NotStarted)
        .collect();

    // stable: ties keep catalog order
    candidates.sort_by(|a, b| a.difficulty.cmp(&b.difficulty).then_with(|| ratio_cmp(a, b)));
    candidates.truncate(count);
    candidates
}

/// Problems marked solved today.
pub fn solved_today(problems: &[Problem], today: NaiveDate) -> usize {
    problems
        .iter()
        .filter(|p| p.status == ProblemStatus::Solved && p.last_attempted == Some(today))
        .count()
}

/// Cards in `deck`, or all cards when no deck is given.
pub fn cards_in_deck<'a>(cards: &'a [Flashcard], deck: Option<&str>) -> Vec<&'a Flashcard> {
    cards
        .iter()
        .filter(|c| deck.map_or(true, |d| c.deck_id == d))
        .collect()
}

/// Due cards, optionally restricted to one deck.
pub fn due_cards<'a>(
    cards: &'a [Flashcard],
    deck: Option<&str>,
    today: NaiveDate,
) -> Vec<&'a Flashcard> {
    cards_in_deck(cards, deck)
        .into_iter()
        .filter(|c| is_due(*c, today))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn problem(id: &str, difficulty: Difficulty, category: &str, status: ProblemStatus) -> Problem {
        Problem {
            id: id.into(),
            name: id.into(),
            difficulty,
            category: category.into(),
            leetcode_url: String::new(),
            status,
            notes: String::new(),
            last_attempted: None,
            next_review: None,
            review_count: 0,
        }
    }

    fn card(id: &str, deck: &str, next_review: Option<NaiveDate>) -> Flashcard {
        Flashcard {
            id: id.into(),
            deck_id: deck.into(),
            front: "front".into(),
            back: "back".into(),
            last_reviewed: None,
            next_review,
            review_count: 0,
        }
    }

    #[test]
    fn test_is_due_boundaries() {
        let today = date(2024, 1, 10);
        assert!(is_due(&card("a", "d", None), today));
        assert!(is_due(&card("a", "d", Some(date(2024, 1, 5))), today));
        assert!(is_due(&card("a", "d", Some(today)), today));
        assert!(!is_due(&card("a", "d", Some(date(2024, 1, 11))), today));
    }

    #[test]
    fn test_select_due_preserves_order() {
        let today = date(2024, 1, 10);
        let cards = vec![
            card("a", "d", Some(date(2024, 1, 11))),
            card("b", "d", None),
            card("c", "d", Some(date(2024, 1, 5))),
            card("d", "d", Some(today)),
        ];
        let due: Vec<_> = select_due(&cards, today).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(due, vec!["b", "c", "d"]);
        assert_eq!(cards.len(), 4);
    }

    #[test]
    fn test_review_queue_only_scheduled_rotation() {
        let today = date(2024, 1, 10);
        let mut solved = problem("solved", Difficulty::Easy, "stack", ProblemStatus::Solved);
        solved.next_review = Some(date(2024, 1, 9));
        let mut later = problem("later", Difficulty::Easy, "stack", ProblemStatus::Solved);
        later.next_review = Some(date(2024, 1, 20));
        let mut review = problem("review", Difficulty::Hard, "stack", ProblemStatus::NeedsReview);
        review.next_review = Some(today);
        let fresh = problem("fresh", Difficulty::Easy, "stack", ProblemStatus::NotStarted);
        let mut attempted = problem("attempted", Difficulty::Easy, "stack", ProblemStatus::Attempted);
        attempted.next_review = Some(date(2024, 1, 1));

        let problems = vec![solved, later, review, fresh, attempted];
        let queue: Vec<_> = review_queue(&problems, today).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(queue, vec!["solved", "review"]);
    }

    #[test]
    fn test_review_queue_keeps_problem_with_unreadable_schedule() {
        let json = r#"{"id":"lost","name":"Lost","difficulty":"easy","category":"stack",
            "status":"solved","nextReview":"garbage","reviewCount":2}"#;
        let lost: Problem = serde_json::from_str(json).unwrap();
        let today = date(2024, 1, 10);
        assert!(is_due(&lost, today));

        let problems = vec![lost];
        let queue: Vec<_> = review_queue(&problems, today).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(queue, vec!["lost"]);
        assert!(suggest_new(&problems, 5).is_empty());
    }

    #[test]
    fn test_suggest_new_orders_by_difficulty_then_category_progress() {
        let problems = vec![
            problem("tree-done", Difficulty::Easy, "trees", ProblemStatus::Solved),
            problem("tree-easy", Difficulty::Easy, "trees", ProblemStatus::NotStarted),
            problem("graph-medium", Difficulty::Medium, "graphs", ProblemStatus::NotStarted),
            problem("graph-easy", Difficulty::Easy, "graphs", ProblemStatus::NotStarted),
            problem("stack-hard", Difficulty::Hard, "stack", ProblemStatus::NotStarted),
            problem("stack-attempted", Difficulty::Easy, "stack", ProblemStatus::Attempted),
        ];
        let ids: Vec<_> = suggest_new(&problems, 10).iter().map(|p| p.id.as_str()).collect();
        // graphs has 0/2 solved, trees 1/2
        assert_eq!(ids, vec!["graph-easy", "tree-easy", "graph-medium", "stack-hard"]);
    }

    #[test]
    fn test_suggest_new_truncates_and_is_deterministic() {
        let problems = vec![
            problem("a", Difficulty::Medium, "x", ProblemStatus::NotStarted),
            problem("b", Difficulty::Medium, "x", ProblemStatus::NotStarted),
            problem("c", Difficulty::Medium, "x", ProblemStatus::NotStarted),
        ];
        let ids: Vec<_> = suggest_new(&problems, 2).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(suggest_new(&problems, 0).is_empty());
    }

    #[test]
    fn test_solved_today() {
        let today = date(2024, 1, 10);
        let mut a = problem("a", Difficulty::Easy, "x", ProblemStatus::Solved);
        a.last_attempted = Some(today);
        let mut b = problem("b", Difficulty::Easy, "x", ProblemStatus::Solved);
        b.last_attempted = Some(date(2024, 1, 9));
        let mut c = problem("c", Difficulty::Easy, "x", ProblemStatus::Attempted);
        c.last_attempted = Some(today);
        assert_eq!(solved_today(&[a, b, c], today), 1);
    }

    #[test]
    fn test_due_cards_by_deck() {
        let today = date(2024, 1, 10);
        let cards = vec![
            card("s-0", "sorting", None),
            card("s-1", "sorting", Some(date(2024, 2, 1))),
            card("h-0", "heap-operations", None),
        ];
        assert_eq!(due_cards(&cards, Some("sorting"), today).len(), 1);
        assert_eq!(due_cards(&cards, None, today).len(), 2);
        assert_eq!(cards_in_deck(&cards, Some("sorting")).len(), 2);
        assert!(cards_in_deck(&cards, Some("nope")).is_empty());
    }
}
