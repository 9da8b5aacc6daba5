mod commands;
mod config;
mod render;
mod store;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::TunecalConfig;

#[derive(Parser)]
#[command(name = "tunecal")]
#[command(about = "Inspect tuning-shop booking calendars: month layout, day queries, quick entry")]
struct Cli {
    /// Bookings file (JSON). Defaults to the configured path.
    #[arg(short, long, global = true)]
    file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month layout grid
    Month {
        /// Year to show (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month to show, 1-12 (defaults to the current month)
        #[arg(short, long)]
        month: Option<u32>,
    },
    /// List bookings active on a date
    Day {
        /// Date to query (YYYY-MM-DD)
        date: String,
    },
    /// Add a booking to the bookings file
    New {
        /// Service label for the booking
        service: String,

        /// Client id the booking belongs to
        #[arg(short, long)]
        client: String,

        /// Start date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Inclusive end date (YYYY-MM-DD)
        #[arg(short, long)]
        end: Option<String>,

        /// Shop branch (msk or rnd)
        #[arg(short, long)]
        branch: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = TunecalConfig::load()?;
    let store_path = store::resolve_path(cli.file.as_deref(), &config);

    match cli.command {
        Commands::Month { year, month } => commands::month::run(&store_path, year, month),
        Commands::Day { date } => commands::day::run(&store_path, &date),
        Commands::New {
            service,
            client,
            date,
            end,
            branch,
        } => commands::new::run(
            &store_path,
            service,
            client,
            date,
            end,
            branch,
            config.default_branch,
        ),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TUNECAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
