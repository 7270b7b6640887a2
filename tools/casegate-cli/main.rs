use casegate::prelude::*;
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::process;
use tracing_subscriber::prelude::*;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindCli {
    Cart,
    Order,
    Overhead,
}

/// Checks which lifecycle transitions an entity can take
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The entity kind the snapshot belongs to
    #[arg(value_enum)]
    kind: KindCli,
    /// Path to the entity snapshot JSON file
    snapshot_path: String,

    /// Replace the built-in catalog with one loaded from this JSON file
    #[arg(short, long)]
    catalog: Option<String>,

    /// Validate only this transition instead of listing availability
    #[arg(short, long)]
    transition: Option<String>,

    /// Reference date for "today" operands (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let kind = match cli.kind {
        KindCli::Cart => EntityKind::Cart,
        KindCli::Order => EntityKind::Order,
        KindCli::Overhead => EntityKind::Overhead,
    };

    let snapshot = EntitySnapshot::from_file(&cli.snapshot_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load snapshot '{}': {}",
            cli.snapshot_path, e
        ))
    });

    let mut builder = LifecycleEngine::builder();
    if let Some(path) = &cli.catalog {
        let catalog = Catalog::from_file(kind, path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load catalog '{}': {}", path, e))
        });
        builder = builder.with_catalog(catalog);
    }
    if let Some(today) = cli.today {
        builder = builder.with_today(today);
    }
    let engine = builder
        .build()
        .unwrap_or_else(|e| exit_with_error(&format!("Built-in catalog is invalid: {}", e)));

    match cli.transition {
        Some(id) => {
            let result = engine.validate(kind, &id, &snapshot.data);
            println!("{}", ReportFormatter::format_result(&id, &result));
            if !result.is_valid {
                process::exit(2);
            }
        }
        None => {
            let availability = engine.availability(kind, &snapshot.status, &snapshot.data);
            println!(
                "{}",
                ReportFormatter::format_availability(&snapshot.status, &availability)
            );
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "casegate=debug" } else { "casegate=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    process::exit(1);
}
