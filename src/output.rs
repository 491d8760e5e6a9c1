use std::path::Path;

use chrono::NaiveDate;
use colored::{ColoredString, Colorize};
use serde_json::{json, Value};

use crate::catalog;
use crate::cli::OutputFormat;
use crate::clock::{days_between, format_date, relative_label};
use crate::due::{is_due, Reviewable};
use crate::models::{Difficulty, Flashcard, Problem, ProblemStatus, Settings};
use crate::stats::{DeckProgress, Overview};
use crate::streak::{StreakState, StreakStatus};

fn colored_difficulty(d: Difficulty) -> ColoredString {
    let s = d.to_string();
    match d {
        Difficulty::Easy => s.green(),
        Difficulty::Medium => s.yellow(),
        Difficulty::Hard => s.red(),
    }
}

fn status_icon(status: ProblemStatus) -> ColoredString {
    match status {
        ProblemStatus::NotStarted => "○".normal(),
        ProblemStatus::Attempted => "◐".yellow(),
        ProblemStatus::Solved => "●".green(),
        ProblemStatus::NeedsReview => "↻".magenta(),
    }
}

fn streak_line(count: u32, status: StreakStatus) -> String {
    let icon = if count > 0 && status != StreakStatus::Broken { "🔥" } else { "❄️" };
    let label = match status {
        StreakStatus::Active => status.message().green(),
        StreakStatus::AtRisk => status.message().yellow(),
        StreakStatus::Broken | StreakStatus::None => status.message().normal(),
    };
    format!("{icon} {count} day streak  {label}")
}

fn reviewable_json<T: Reviewable>(item: &T, today: NaiveDate) -> serde_json::Map<String, Value> {
    let mut obj = serde_json::Map::new();
    obj.insert("id".into(), json!(item.id()));
    obj.insert("review_count".into(), json!(item.review_count()));
    obj.insert("last_reviewed".into(), json!(item.last_reviewed().map(|d| d.to_string())));
    obj.insert("next_review".into(), json!(item.next_review().map(|d| d.to_string())));
    obj.insert("is_due".into(), json!(is_due(item, today)));
    obj
}

fn problem_json(p: &Problem, today: NaiveDate) -> Value {
    let mut obj = reviewable_json(p, today);
    obj.insert("name".into(), json!(p.name));
    obj.insert("difficulty".into(), json!(p.difficulty));
    obj.insert("category".into(), json!(p.category));
    obj.insert("status".into(), json!(p.status));
    Value::Object(obj)
}

fn card_json(c: &Flashcard, today: NaiveDate) -> Value {
    let mut obj = reviewable_json(c, today);
    obj.insert("deck".into(), json!(c.deck_id));
    obj.insert("front".into(), json!(c.front));
    obj.insert("back".into(), json!(c.back));
    Value::Object(obj)
}

fn problem_row(p: &Problem) -> String {
    format!(
        "  {} {}  [{}]  {}",
        status_icon(p.status),
        p.name,
        colored_difficulty(p.difficulty),
        p.id.dimmed()
    )
}

// ── today ──────────────────────────────────────────────────────────

pub struct Dashboard<'a> {
    pub streak: u32,
    pub streak_status: StreakStatus,
    pub solved_today: usize,
    pub daily_goal: u32,
    pub review: Vec<&'a Problem>,
    pub suggested: Vec<&'a Problem>,
    pub due_cards: usize,
}

pub fn format_today(view: &Dashboard, today: NaiveDate, format: &OutputFormat) {
    match format {
        OutputFormat::Json => {
            let obj = json!({
                "date": today.to_string(),
                "streak": view.streak,
                "streak_status": view.streak_status,
                "solved_today": view.solved_today,
                "daily_goal": view.daily_goal,
                "review": view.review.iter().map(|p| problem_json(p, today)).collect::<Vec<_>>(),
                "suggested": view.suggested.iter().map(|p| problem_json(p, today)).collect::<Vec<_>>(),
                "due_cards": view.due_cards,
            });
            println!("{obj}");
        }
        OutputFormat::Human => {
            println!("{}", today.format("%A, %B %-d").to_string().bold());
            println!("{}", streak_line(view.streak, view.streak_status));
            println!("Today: {}/{} solved", view.solved_today, view.daily_goal);

            if view.review.is_empty() && view.suggested.is_empty() {
                println!("No problems due for review. Keep up the great work!");
            }
            if !view.review.is_empty() {
                println!("{}", "Due for review".bold());
                for p in &view.review {
                    println!("{}", problem_row(p));
                }
            }
            if !view.suggested.is_empty() {
                println!("{}", "Suggested new problems".bold());
                for p in &view.suggested {
                    println!("{}", problem_row(p));
                }
            }
            if view.due_cards > 0 {
                println!("Flashcards due: {}", view.due_cards);
            }
        }
    }
}

// ── list / show ────────────────────────────────────────────────────

pub fn format_problem_list(problems: &[&Problem], today: NaiveDate, format: &OutputFormat) {
    match format {
        OutputFormat::Json => {
            let arr: Vec<Value> = problems.iter().map(|p| problem_json(p, today)).collect();
            println!("{}", Value::Array(arr));
        }
        OutputFormat::Human => {
            if problems.is_empty() {
                println!("No problems found.");
                return;
            }
            let mut current_category = "";
            for p in problems {
                if p.category != current_category {
                    current_category = &p.category;
                    println!("{}", catalog::category_name(current_category).bold());
                }
                println!("{}", problem_row(p));
            }
        }
    }
}

pub fn format_problem_detail(p: &Problem, today: NaiveDate, format: &OutputFormat) {
    match format {
        OutputFormat::Json => {
            let mut value = problem_json(p, today);
            if let Value::Object(ref mut obj) = value {
                obj.insert("url".into(), json!(p.leetcode_url));
                obj.insert("notes".into(), json!(p.notes));
                obj.insert(
                    "days_until_review".into(),
                    json!(p.next_review.map(|d| days_between(today, d))),
                );
            }
            println!("{value}");
        }
        OutputFormat::Human => {
            println!("{} [{}]", p.name.bold(), colored_difficulty(p.difficulty));
            println!("  Category: {}", catalog::category_name(&p.category));
            println!("  Status: {} {}", status_icon(p.status), p.status);
            if !p.leetcode_url.is_empty() {
                println!("  URL: {}", p.leetcode_url);
            }
            println!("  Last attempted: {}", format_date(p.last_attempted));
            println!("  Next review: {}", relative_label(p.next_review, today));
            println!("  Reviews: {}", p.review_count);
            let due_str = if is_due(p, today) { "YES".red().to_string() } else { "no".to_string() };
            println!("  Due: {due_str}");
            if !p.notes.is_empty() {
                println!("  Notes: {}", p.notes);
            }
        }
    }
}

// ── mark / note ────────────────────────────────────────────────────

pub fn format_mark(
    p: &Problem,
    interval: Option<&str>,
    streak: &StreakState,
    today: NaiveDate,
    format: &OutputFormat,
) {
    let status = streak.status(today);
    let count = streak.effective_count(today);
    match format {
        OutputFormat::Json => {
            let mut value = problem_json(p, today);
            if let Value::Object(ref mut obj) = value {
                obj.insert("interval".into(), json!(interval));
                obj.insert("streak".into(), json!(count));
                obj.insert("streak_status".into(), json!(status));
            }
            println!("{value}");
        }
        OutputFormat::Human => {
            println!("{} {} → {}", status_icon(p.status), p.name, p.status);
            if let Some(desc) = interval {
                println!("  {desc} ({})", relative_label(p.next_review, today));
            }
            if p.status == ProblemStatus::Solved {
                println!("  {}", streak_line(count, status));
            }
        }
    }
}

pub fn format_note(p: &Problem, format: &OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", json!({ "id": p.id, "notes": p.notes }));
        }
        OutputFormat::Human => {
            if p.notes.is_empty() {
                println!("Notes cleared: {}", p.name);
            } else {
                println!("Notes saved: {}", p.name);
            }
        }
    }
}

// ── cards / grade / decks ──────────────────────────────────────────

pub fn format_cards(cards: &[&Flashcard], today: NaiveDate, format: &OutputFormat) {
    match format {
        OutputFormat::Json => {
            let arr: Vec<Value> = cards.iter().map(|c| card_json(*c, today)).collect();
            println!("{}", Value::Array(arr));
        }
        OutputFormat::Human => {
            if cards.is_empty() {
                println!("No cards found.");
                return;
            }
            for c in cards {
                let due = if is_due(*c, today) {
                    "due".red()
                } else {
                    relative_label(c.next_review, today).normal()
                };
                println!("  {}  {}", c.id.dimmed(), c.front);
                println!("      {}  [{}]", c.back.cyan(), due);
            }
        }
    }
}

pub fn format_grade(
    c: &Flashcard,
    correct: bool,
    interval: &str,
    today: NaiveDate,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Json => {
            let mut value = card_json(c, today);
            if let Value::Object(ref mut obj) = value {
                obj.insert("correct".into(), json!(correct));
                obj.insert("interval".into(), json!(interval));
            }
            println!("{value}");
        }
        OutputFormat::Human => {
            let verdict = if correct { "correct".green() } else { "incorrect".red() };
            println!("{}: {}", verdict, c.front);
            println!(
                "  reviews: {}, last: {}, next: {}",
                c.review_count,
                format_date(c.last_reviewed),
                relative_label(c.next_review, today)
            );
            println!("  {interval}");
        }
    }
}

pub fn format_decks(rows: &[DeckProgress], format: &OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", json!(rows));
        }
        OutputFormat::Human => {
            for row in rows {
                let description = catalog::find_deck(&row.id).map(|d| d.description).unwrap_or("");
                println!(
                    "  {}  {} cards, {} due, {}/{} mastered  {}",
                    row.name.bold(),
                    row.total,
                    row.due,
                    row.mastered,
                    row.total,
                    description.dimmed()
                );
            }
        }
    }
}

// ── stats / streak / settings ──────────────────────────────────────

pub fn format_stats(overview: &Overview, format: &OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", json!(overview));
        }
        OutputFormat::Human => {
            println!(
                "Solved: {}/{} ({:.0}%)  attempted: {}  needs review: {}",
                overview.solved,
                overview.total,
                overview.percent_solved,
                overview.attempted,
                overview.needs_review
            );
            for c in &overview.categories {
                let pct = c.percent();
                let line = format!("{}/{}", c.solved, c.total);
                let line = if pct >= 100.0 { line.green() } else { line.normal() };
                println!("  {:<24} {}", c.name, line);
            }
        }
    }
}

pub fn format_streak(streak: &StreakState, today: NaiveDate, format: &OutputFormat) {
    let status = streak.status(today);
    let effective = streak.effective_count(today);
    match format {
        OutputFormat::Json => {
            let obj = json!({
                "current": effective,
                "stored": streak.current,
                "status": status,
                "last_active_date": streak.last_active_date.map(|d| d.to_string()),
                "broken": streak.is_broken(today),
            });
            println!("{obj}");
        }
        OutputFormat::Human => {
            println!("{}", streak_line(effective, status));
            println!("  Last active: {}", relative_label(streak.last_active_date, today));
        }
    }
}

pub fn format_settings(settings: &Settings, format: &OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", json!(settings));
        }
        OutputFormat::Human => {
            println!("Daily goal: {}", settings.daily_goal);
            println!("Dark mode: {}", if settings.dark_mode { "on" } else { "off" });
        }
    }
}

// ── export / import / reset ────────────────────────────────────────

pub fn format_export(path: &Path, problems: usize, format: &OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", json!({ "path": path.display().to_string(), "problems": problems }));
        }
        OutputFormat::Human => {
            println!("Exported {problems} problems to {}", path.display());
        }
    }
}

pub fn format_import(path: &Path, problems: usize, format: &OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", json!({ "path": path.display().to_string(), "problems": problems }));
        }
        OutputFormat::Human => {
            println!("Imported {problems} problems from {}", path.display());
        }
    }
}

pub fn format_reset(format: &OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", json!({ "reset": true }));
        }
        OutputFormat::Human => {
            println!("Progress reset.");
        }
    }
}
