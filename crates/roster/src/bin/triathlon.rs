use anyhow::Context;
use clap::{Parser, ValueEnum};
use results::dto::ranking::RankingReport;
use results::{Report, rank};
use roster::{RosterTransformer, RosterValidator, load_roster, sample_roster};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "triathlon")]
#[command(about = "Ranks triathlon participants by total time", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON roster to rank. The built-in sample event is used when omitted.
    #[arg(long, env = "TRIATHLON_ROSTER")]
    roster: Option<PathBuf>,

    #[arg(long, value_enum, env = "TRIATHLON_FORMAT", default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[arg(long)]
    validate_only: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "triathlon={},roster={},results={}",
                    log_level, log_level, log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let stdout = std::io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let roster = match &cli.roster {
        Some(path) => {
            tracing::info!("Loading roster from: {}", path.display());
            load_roster(path)
                .with_context(|| format!("Failed to load roster {}", path.display()))?
        }
        None => {
            tracing::info!("No roster given, using the built-in sample event");
            sample_roster()
        }
    };

    tracing::info!(
        "Loaded event: {} ({} participants, v{})",
        roster.event.name,
        roster.participants.len(),
        roster.format_version
    );

    let validation_report = RosterValidator::validate(&roster)?;
    validation_report.log_warnings();

    if cli.validate_only {
        tracing::info!("✓ Validation successful!");
        return Ok(());
    }

    let mut registry = RosterTransformer::into_registry(roster)?;
    registry.compute_all_totals();

    let ranking = rank(&registry);
    match cli.format {
        OutputFormat::Text => write!(out, "{}", Report(&ranking))?,
        OutputFormat::Json => {
            let report = RankingReport::from(&ranking);
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }
    out.flush()?;

    Ok(())
}
