//! IronStreak - Goal progress and streak engine
//!
//! Command-line entry point. Reads a JSON snapshot of goals and activity and
//! prints a progress report per goal.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ironstreak::goals::{GoalProgressService, GoalReport};
use ironstreak::storage::config::{self, AppConfig, WeekStart};
use ironstreak::storage::snapshot;

#[derive(Parser)]
#[command(
    name = "ironstreak",
    version,
    about = "Progress and streaks for personal fitness goals"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print progress and streaks for every goal in a snapshot
    Report {
        /// Snapshot JSON file
        snapshot: PathBuf,

        /// Evaluate as of this local time (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        at: Option<String>,

        /// Override the configured first day of the week
        #[arg(long, value_parser = parse_week_start)]
        week_start: Option<WeekStart>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the active configuration
    Config {
        /// Write the default configuration file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Starting IronStreak v{}", env!("CARGO_PKG_VERSION"));

    let app_config = config::load_config().context("Failed to load configuration")?;

    match cli.command {
        Command::Report {
            snapshot: path,
            at,
            week_start,
            json,
        } => {
            let reference = match at {
                Some(raw) => parse_reference(&raw)?,
                None => Local::now().naive_local(),
            };
            run_report(&app_config, &path, reference, week_start, json)
        }
        Command::Config { init } => run_config(app_config, init),
    }
}

fn run_report(
    app_config: &AppConfig,
    path: &Path,
    reference: NaiveDateTime,
    week_start: Option<WeekStart>,
    json: bool,
) -> Result<()> {
    let file = snapshot::load_snapshot(path)
        .with_context(|| format!("Failed to load snapshot {}", path.display()))?;

    let mut calendar_settings = app_config.calendar.clone();
    if let Some(week_start) = week_start {
        calendar_settings.week_start = week_start;
    }

    let service = GoalProgressService::with_calendar(&file.activity, calendar_settings.calendar());
    let reports = service.report_at(&file.goals, reference);

    if json {
        let output = serde_json::to_string_pretty(&reports).context("Failed to encode report")?;
        println!("{output}");
        return Ok(());
    }

    if reports.is_empty() {
        println!("No goals in {}", path.display());
        return Ok(());
    }

    for report in &reports {
        print_report(report);
    }
    Ok(())
}

fn print_report(report: &GoalReport) {
    let summary = &report.summary;
    println!("{}", report.title);
    println!("  {}", report.subtitle());
    println!(
        "  {} • {}: {}",
        summary.status.display_name(),
        summary.period_label,
        summary.current_description
    );
    println!("  {}", summary.target_description);
    if let Some(percent) = report.progress_percent() {
        println!("  Progress {percent}%");
    }
    if let Some(detail) = &summary.detail_description {
        println!("  {detail}");
    }
    if let Some(current) = report.current_streak_label() {
        let mut line = format!("  Streak {current}");
        if let Some(best) = report.best_streak_label() {
            line.push_str(&format!(" • {best}"));
        }
        println!("{line}");
    }
    if let Some(last_met) = report.last_met_label() {
        println!("  {last_met}");
    }
    println!();
}

fn run_config(app_config: AppConfig, init: bool) -> Result<()> {
    if init {
        let path = config::get_config_path();
        if path.exists() {
            println!("Config already exists at {}", path.display());
        } else {
            let saved = config::save_config(&app_config).context("Failed to write configuration")?;
            println!("Wrote {}", saved.display());
        }
    }

    let content = toml::to_string_pretty(&app_config).context("Failed to encode configuration")?;
    println!("# {}", config::get_config_path().display());
    print!("{content}");
    Ok(())
}

fn parse_reference(raw: &str) -> Result<NaiveDateTime> {
    if let Ok(at) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(at);
    }
    if let Ok(at) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M") {
        return Ok(at);
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Ok(date.and_time(chrono::NaiveTime::MIN)),
        Err(_) => bail!("Invalid --at value {raw:?}, expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS"),
    }
}

fn parse_week_start(raw: &str) -> std::result::Result<WeekStart, String> {
    match raw.to_ascii_lowercase().as_str() {
        "monday" | "mon" => Ok(WeekStart::Monday),
        "sunday" | "sun" => Ok(WeekStart::Sunday),
        "saturday" | "sat" => Ok(WeekStart::Saturday),
        other => Err(format!("unknown week start {other:?}")),
    }
}
