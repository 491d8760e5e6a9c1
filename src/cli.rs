use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::models::{Difficulty, ProblemStatus};

#[derive(Parser)]
#[command(name = "grindstone", version, about = "Interview prep tracker with spaced repetition and daily streaks")]
pub struct Cli {
    /// Directory holding progress files (overrides config and GRINDSTONE_DATA)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, global = true, hide = true)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show today's streak, review queue and suggestions
    Today,
    /// List problems
    List {
        /// Only this category (e.g. two-pointers)
        #[arg(long)]
        category: Option<String>,
        /// Only this difficulty
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Only this status
        #[arg(long)]
        status: Option<ProblemStatus>,
        /// Case-insensitive substring of the problem name
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one problem in detail
    Show {
        /// Problem id
        id: String,
    },
    /// Change a problem's status
    Mark {
        /// Problem id
        id: String,
        /// New status
        status: ProblemStatus,
    },
    /// Replace a problem's notes
    Note {
        /// Problem id
        id: String,
        /// Note text (empty string clears)
        text: String,
    },
    /// List flashcards
    Cards {
        /// Only this deck
        #[arg(long)]
        deck: Option<String>,
        /// Only cards due today
        #[arg(long)]
        due: bool,
        /// Shuffle the order
        #[arg(long)]
        shuffle: bool,
    },
    /// Grade a flashcard
    Grade {
        /// Card id (e.g. sorting-0)
        id: String,
        /// Whether you recalled it
        grade: Grade,
    },
    /// Show per-deck progress
    Decks,
    /// Show progress by category
    Stats,
    /// Show the streak
    Streak,
    /// Show or change settings
    Settings {
        /// Number of new problems to aim for each day
        #[arg(long)]
        daily_goal: Option<u32>,
    },
    /// Write progress to a JSON file
    Export {
        /// Destination (defaults to grindstone-progress-<date>.json)
        path: Option<PathBuf>,
    },
    /// Replace progress with an exported JSON file
    Import {
        /// Source file
        path: PathBuf,
    },
    /// Reset all problems, flashcards and the streak
    Reset,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grade {
    Correct,
    Incorrect,
}

impl Grade {
    pub fn is_correct(&self) -> bool {
        *self == Grade::Correct
    }
}

#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}
