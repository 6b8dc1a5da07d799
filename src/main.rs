mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "eventboard")]
#[command(about = "Keep a local board of events: create, list and delete records stored on-device")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive board (welcome screen, then the event list)
    Board,
    /// Print the stored events
    List,
    /// Create a new event
    New {
        /// Event name
        #[arg(long)]
        name: Option<String>,

        /// Event date (free-form text, e.g. "2024-01-01")
        #[arg(long)]
        date: Option<String>,

        /// Where the event takes place
        #[arg(long)]
        location: Option<String>,

        /// What the event is about
        #[arg(long)]
        description: Option<String>,

        /// Link to an image for the event
        #[arg(long)]
        image: Option<String>,
    },
    /// Delete every event with this date
    Delete {
        /// Date key of the event(s) to delete
        date: String,
    },
    /// Show configuration paths, optionally moving the data directory
    Config {
        /// Store the event list under this directory from now on
        #[arg(long)]
        data_dir: Option<std::path::PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Board => commands::board::run(),
        Commands::List => commands::list::run(),
        Commands::New {
            name,
            date,
            location,
            description,
            image,
        } => commands::new::run(name, date, location, description, image),
        Commands::Delete { date } => commands::delete::run(&date),
        Commands::Config { data_dir } => commands::config::run(data_dir),
    }
}
