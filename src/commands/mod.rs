pub mod cards;
pub mod decks;
pub mod export;
pub mod grade;
pub mod import;
pub mod list;
pub mod mark;
pub mod note;
pub mod reset;
pub mod settings;
pub mod show;
pub mod stats;
pub mod streak;
pub mod today;
