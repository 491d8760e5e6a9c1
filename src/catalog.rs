use serde::Deserialize;

use crate::models::{Difficulty, Flashcard, FlashcardProgress, Problem, ProblemStatus, Settings, UserProgress};
use crate::streak::StreakState;

const PROBLEMS_JSON: &str = include_str!("../assets/problems.json");
const FLASHCARDS_JSON: &str = include_str!("../assets/flashcards.json");

/// Cards at or past this review count count as mastered.
pub const MASTERY_THRESHOLD: u32 = 5;

pub struct CategoryInfo {
    pub id: &'static str,
    pub name: &'static str,
}

pub struct DeckInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo { id: "arrays-hashing", name: "Arrays & Hashing" },
    CategoryInfo { id: "two-pointers", name: "Two Pointers" },
    CategoryInfo { id: "sliding-window", name: "Sliding Window" },
    CategoryInfo { id: "stack", name: "Stack" },
    CategoryInfo { id: "binary-search", name: "Binary Search" },
    CategoryInfo { id: "linked-list", name: "Linked List" },
    CategoryInfo { id: "trees", name: "Trees" },
    CategoryInfo { id: "tries", name: "Tries" },
    CategoryInfo { id: "heap-priority-queue", name: "Heap / Priority Queue" },
    CategoryInfo { id: "backtracking", name: "Backtracking" },
    CategoryInfo { id: "graphs", name: "Graphs" },
    CategoryInfo { id: "advanced-graphs", name: "Advanced Graphs" },
    CategoryInfo { id: "1d-dynamic-programming", name: "1D Dynamic Programming" },
    CategoryInfo { id: "2d-dynamic-programming", name: "2D Dynamic Programming" },
    CategoryInfo { id: "greedy", name: "Greedy" },
    CategoryInfo { id: "intervals", name: "Intervals" },
    CategoryInfo { id: "math-geometry", name: "Math & Geometry" },
    CategoryInfo { id: "bit-manipulation", name: "Bit Manipulation" },
];

pub const DECKS: &[DeckInfo] = &[
    DeckInfo { id: "data-structures", name: "Data Structures", description: "Lists, dicts, sets, strings" },
    DeckInfo { id: "common-imports", name: "Common Imports", description: "Counter, defaultdict, deque, heapq" },
    DeckInfo { id: "heap-operations", name: "Heap Operations", description: "heappush, heappop, heapify" },
    DeckInfo { id: "loops-iteration", name: "Loops & Iteration", description: "range, enumerate, zip" },
    DeckInfo { id: "sorting", name: "Sorting", description: "sort, sorted, key functions" },
    DeckInfo { id: "common-patterns", name: "Common Patterns", description: "Two pointers, BFS, DFS, sliding window" },
    DeckInfo { id: "useful-tricks", name: "Useful Tricks", description: "Infinity, swap, comprehensions" },
    DeckInfo { id: "time-complexity", name: "Time Complexity", description: "Big O for common operations" },
];

#[derive(Deserialize)]
struct ProblemSeed {
    id: String,
    name: String,
    difficulty: Difficulty,
    category: String,
    url: String,
}

#[derive(Deserialize)]
struct CardSeed {
    front: String,
    back: String,
}

#[derive(Deserialize)]
struct DeckSeed {
    deck: String,
    cards: Vec<CardSeed>,
}

pub fn category_name(id: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name)
        .unwrap_or(id)
}

pub fn find_deck(id: &str) -> Option<&'static DeckInfo> {
    DECKS.iter().find(|d| d.id == id)
}

/// Every catalog problem, never reviewed.
pub fn initial_problems() -> Vec<Problem> {
    let seeds: Vec<ProblemSeed> =
        serde_json::from_str(PROBLEMS_JSON).expect("bundled problem catalog is valid JSON");

    seeds
        .into_iter()
        .map(|s| Problem {
            id: s.id,
            name: s.name,
            difficulty: s.difficulty,
            category: s.category,
            leetcode_url: s.url,
            status: ProblemStatus::NotStarted,
            notes: String::new(),
            last_attempted: None,
            next_review: None,
            review_count: 0,
        })
        .collect()
}

/// Every catalog flashcard, never reviewed. Ids are `<deck>-<index>`.
pub fn initial_flashcards() -> Vec<Flashcard> {
    let decks: Vec<DeckSeed> =
        serde_json::from_str(FLASHCARDS_JSON).expect("bundled flashcard catalog is valid JSON");

    decks
        .into_iter()
        .flat_map(|deck| {
            let deck_id = deck.deck;
            deck.cards
                .into_iter()
                .enumerate()
                .map(move |(i, c)| Flashcard {
                    id: format!("{deck_id}-{i}"),
                    deck_id: deck_id.clone(),
                    front: c.front,
                    back: c.back,
                    last_reviewed: None,
                    next_review: None,
                    review_count: 0,
                })
        })
        .collect()
}

pub fn initial_progress(daily_goal: u32, dark_mode: bool) -> UserProgress {
    UserProgress {
        problems: initial_problems(),
        streak: StreakState::default(),
        settings: Settings { daily_goal, dark_mode },
    }
}

pub fn initial_flashcard_progress() -> FlashcardProgress {
    FlashcardProgress {
        cards: initial_flashcards(),
    }
}
