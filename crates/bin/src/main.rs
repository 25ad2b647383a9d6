//! Tripflow CLI binary.
//!
//! Manual entry point for the monthly training pipeline. Recurring
//! execution belongs to the hosting scheduler; `tripflow schedule` prints
//! the cron contract it should register.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;
use tripflow::{RunConfig, run};

#[derive(Parser)]
#[command(name = "tripflow")]
#[command(about = "Monthly trip-duration model training pipeline", long_about = None)]
#[command(version)]
struct Cli {
    /// Optional JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute one training run
    Run {
        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Override the directory holding the monthly parquet files
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Override the directory artifacts are written to
        #[arg(long)]
        artifact_dir: Option<PathBuf>,

        /// Override the dataset name prefix
        #[arg(long)]
        dataset_name: Option<String>,
    },

    /// Show the recurrence contract for the hosting scheduler
    Schedule {
        /// Preview dataset months for this date instead of today
        #[arg(long)]
        date: Option<String>,
    },
}

fn main() {
    init_tracing();
    if let Err(e) = run_cli() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };

    match cli.command {
        Commands::Run {
            date,
            data_dir,
            artifact_dir,
            dataset_name,
        } => {
            if let Some(dir) = data_dir {
                config.data_dir = dir;
            }
            if let Some(dir) = artifact_dir {
                config.artifact_dir = dir;
            }
            if let Some(name) = dataset_name {
                config.dataset_name = name;
            }

            let report = run(&config, date.as_deref())?;

            println!("Run {} complete", report.reference_date);
            println!("  training RMSE:   {:.4}", report.train_rmse);
            println!("  validation RMSE: {:.4}", report.validation_rmse);
            println!("  model:           {}", report.artifacts.model.display());
            println!("  vectorizer:      {}", report.artifacts.vectorizer.display());
        }

        Commands::Schedule { date } => {
            let reference = date.unwrap_or_else(|| {
                chrono::Local::now()
                    .date_naive()
                    .format("%Y-%m-%d")
                    .to_string()
            });
            let paths =
                tripflow_data::resolve_paths(&reference, &config.data_dir, &config.dataset_name)?;

            println!("Recurrence contract for the hosting scheduler:");
            println!("  cron:     {}", config.schedule.cron);
            println!("  timezone: {}", config.schedule.timezone);
            println!("A run keyed by {reference} would use:");
            println!("  train:      {}", paths.train.display());
            println!("  validation: {}", paths.validation.display());
        }
    }

    Ok(())
}
