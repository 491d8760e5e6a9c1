mod catalog;
mod cli;
mod clock;
mod commands;
mod config;
mod due;
mod error;
mod models;
mod output;
mod progress;
mod srs;
mod stats;
mod store;
mod streak;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use clock::{Clock, FixedClock, SystemClock};
use config::{load_config, resolve_data_dir};
use error::{format_error, GrindstoneError};
use store::Store;

fn main() {
    let cli = Cli::parse();
    let format = &cli.format;

    init_tracing();

    let config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            let err = GrindstoneError::ParseError(format!("config: {e}"));
            format_error(&err, format);
            std::process::exit(1);
        }
    };

    let result = run_command(&cli, &config);

    if let Err(e) = result {
        format_error(&e, format);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("GRINDSTONE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_command(cli: &Cli, config: &config::Config) -> Result<(), GrindstoneError> {
    let format = &cli.format;
    let clock: Box<dyn Clock> = match cli.today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };
    let today = clock.today();

    let data_dir = resolve_data_dir(cli.data_dir.as_ref(), config)
        .map_err(|e| GrindstoneError::DataDir(e.to_string()))?;
    tracing::debug!(data_dir = %data_dir.display(), %today, "starting");
    let store = Store::open(data_dir, config);

    match &cli.command {
        Commands::Today => commands::today::run(&store, today, format),
        Commands::List {
            category,
            difficulty,
            status,
            search,
        } => {
            let filters = commands::list::Filters {
                category: category.clone(),
                difficulty: *difficulty,
                status: *status,
                search: search.clone(),
            };
            commands::list::run(&store, &filters, today, format)
        }
        Commands::Show { id } => commands::show::run(&store, id, today, format),
        Commands::Mark { id, status } => commands::mark::run(&store, id, *status, today, format),
        Commands::Note { id, text } => commands::note::run(&store, id, text, format),
        Commands::Cards { deck, due, shuffle } => {
            commands::cards::run(&store, deck.as_deref(), *due, *shuffle, today, format)
        }
        Commands::Grade { id, grade } => commands::grade::run(&store, id, *grade, today, format),
        Commands::Decks => commands::decks::run(&store, today, format),
        Commands::Stats => commands::stats::run(&store, format),
        Commands::Streak => commands::streak::run(&store, today, format),
        Commands::Settings { daily_goal } => commands::settings::run(&store, *daily_goal, format),
        Commands::Export { path } => commands::export::run(&store, path.as_deref(), today, format),
        Commands::Import { path } => commands::import::run(&store, path, format),
        Commands::Reset => commands::reset::run(&store, format),
    }
}
