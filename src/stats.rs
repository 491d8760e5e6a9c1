use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::{self, MASTERY_THRESHOLD};
use crate::due;
use crate::models::{Flashcard, Problem, ProblemStatus};

#[derive(Debug, Serialize)]
pub struct CategoryProgress {
    pub id: String,
    pub name: String,
    pub solved: usize,
    pub total: usize,
}

impl CategoryProgress {
    pub fn percent(&self) -> f64 {
        percent(self.solved, self.total)
    }
}

#[derive(Debug, Serialize)]
pub struct Overview {
    pub total: usize,
    pub solved: usize,
    pub attempted: usize,
    pub needs_review: usize,
    pub percent_solved: f64,
    pub categories: Vec<CategoryProgress>,
}

#[derive(Debug, Serialize)]
pub struct DeckProgress {
    pub id: String,
    pub name: String,
    pub total: usize,
    pub due: usize,
    pub mastered: usize,
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

fn count_status(problems: &[Problem], status: ProblemStatus) -> usize {
    problems.iter().filter(|p| p.status == status).count()
}

/// Status totals plus per-category progress, best category first.
pub fn overview(problems: &[Problem]) -> Overview {
    let solved = count_status(problems, ProblemStatus::Solved);

    let mut categories: Vec<CategoryProgress> = catalog::CATEGORIES
        .iter()
        .map(|c| {
            let in_category: Vec<_> = problems.iter().filter(|p| p.category == c.id).collect();
            CategoryProgress {
                id: c.id.to_string(),
                name: c.name.to_string(),
                solved: in_category
                    .iter()
                    .filter(|p| p.status == ProblemStatus::Solved)
                    .count(),
                total: in_category.len(),
            }
        })
        .filter(|c| c.total > 0)
        .collect();

    // solved/total descending, compared without floats
    categories.sort_by(|a, b| (b.solved * a.total).cmp(&(a.solved * b.total)));

    Overview {
        total: problems.len(),
        solved,
        attempted: count_status(problems, ProblemStatus::Attempted),
        needs_review: count_status(problems, ProblemStatus::NeedsReview),
        percent_solved: percent(solved, problems.len()),
        categories,
    }
}

/// One row per catalog deck, in catalog order.
pub fn deck_progress(cards: &[Flashcard], today: NaiveDate) -> Vec<DeckProgress> {
    catalog::DECKS
        .iter()
        .map(|deck| {
            let in_deck = due::cards_in_deck(cards, Some(deck.id));
            DeckProgress {
                id: deck.id.to_string(),
                name: deck.name.to_string(),
                total: in_deck.len(),
                due: in_deck.iter().filter(|c| due::is_due(**c, today)).count(),
                mastered: in_deck
                    .iter()
                    .filter(|c| c.review_count >= MASTERY_THRESHOLD)
                    .count(),
            }
        })
        .collect()
}
