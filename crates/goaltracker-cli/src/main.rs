use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod terminal;

#[derive(Parser)]
#[command(
    name = "goaltracker",
    version,
    about = "Track time since a milestone and celebrate doubling goals"
)]
struct Cli {
    /// Config file (default: ~/.config/goaltracker/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Date store file, overrides `dates_file`
    #[arg(long, global = true)]
    dates: Option<PathBuf>,
    /// Sound played on each new goal, overrides `notifications.sound`
    #[arg(long, global = true)]
    sound: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a milestone and watch its goals live (default)
    Run,
    /// List milestone dates
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a milestone date (year|month|day|hour|minute|second)
    Add {
        /// e.g. "2016|8|2|10|30|0"
        date: String,
    },
    /// Print the goal status of one milestone and exit
    Status {
        /// Index from `list`
        index: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let overrides = commands::Overrides {
        config: cli.config,
        dates: cli.dates,
        sound: cli.sound,
    };

    let result = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run::run(&overrides),
        Commands::List { json } => commands::dates::list(&overrides, json),
        Commands::Add { date } => commands::dates::add(&overrides, &date),
        Commands::Status { index, json } => commands::dates::status(&overrides, &index, json),
        Commands::Config { action } => commands::config::run(&overrides, action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
