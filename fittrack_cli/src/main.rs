use clap::{Parser, Subcommand};
use fittrack_core::*;
use std::io;
use std::path::PathBuf;

mod chart;
mod session;
mod shell;

use session::Session;
use shell::Shell;

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(
    about = "Personal fitness tracker: workouts, meals, body metrics and goals",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the CSV export directory
    #[arg(long, global = true)]
    export_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu shell (default)
    Shell {
        /// Start with sample data loaded
        #[arg(long)]
        demo: bool,
    },

    /// Print the combined stats snapshot as JSON
    Summary {
        /// Use sample data instead of empty stores
        #[arg(long)]
        demo: bool,
    },

    /// Export one data category (workout, nutrition, health, goals) to CSV
    Export {
        category: String,

        /// Use sample data instead of empty stores
        #[arg(long)]
        demo: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    fittrack_core::logging::init_with_level(&config.logging.level)?;

    let catalog_errors = get_default_catalog().validate();
    if !catalog_errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in &catalog_errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    let export_dir = cli
        .export_dir
        .clone()
        .unwrap_or_else(|| config.export.dir.clone());

    match cli.command {
        Some(Commands::Shell { demo }) => cmd_shell(&config, export_dir, demo),
        Some(Commands::Summary { demo }) => cmd_summary(&config, demo),
        Some(Commands::Export { category, demo }) => {
            cmd_export(&config, export_dir, &category, demo)
        }
        None => cmd_shell(&config, export_dir, false),
    }
}

fn new_session(config: &Config, demo: bool) -> Session {
    let mut session = Session::new(config.nutrition.daily_calorie_goal);
    if demo {
        session.seed_demo();
    }
    session
}

fn cmd_shell(config: &Config, export_dir: PathBuf, demo: bool) -> Result<()> {
    let session = new_session(config, demo);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), session, export_dir);
    shell.run()
}

fn cmd_summary(config: &Config, demo: bool) -> Result<()> {
    let session = new_session(config, demo);
    let stats = session.reporter().recent_stats();
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

fn cmd_export(config: &Config, export_dir: PathBuf, category: &str, demo: bool) -> Result<()> {
    let category: ExportCategory = category.parse()?;
    let session = new_session(config, demo);

    match session.reporter().export_csv(category, &export_dir)? {
        ExportOutcome::Written { path, rows } => {
            println!("✓ Exported {} {} rows", rows, category);
            println!("  CSV: {}", path.display());
        }
        ExportOutcome::NothingToExport => {
            println!("No {} data available - nothing to export.", category);
        }
    }
    Ok(())
}
