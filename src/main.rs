use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use crossterm::tty::IsTty;
use serde_json::json;
use tracing::level_filters::LevelFilter;

use mico::config::{Config, load_config, load_config_from_path};
use mico::health::score_health;
use mico::ranking::{RankOptions, SortKey};
use mico::report::{Style, render_health, render_memory, render_processes};
use mico::system::{Collector, MetricsSource};

#[derive(Parser)]
#[command(
    name = "mico",
    version,
    about = "System monitoring CLI: memory, top processes and a health score"
)]
struct Cli {
    /// Path to config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Color output: auto, always, never
    #[arg(long, value_enum, global = true)]
    color: Option<ColorChoice>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Display system memory information
    Memory {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List processes ranked by memory, name or PID
    #[command(visible_alias = "ps")]
    Processes(ProcessesArgs),
    /// Score CPU, memory and disk utilization
    Health {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct ProcessesArgs {
    /// Case-insensitive name substring or exact PID
    #[arg(short, long, default_value = "")]
    filter: String,

    /// Sort key
    #[arg(short, long, value_enum)]
    sort: Option<SortKey>,

    /// Sort ascending instead of descending
    #[arg(long)]
    ascending: bool,

    /// Sort descending, overriding the config file
    #[arg(long, conflicts_with = "ascending")]
    descending: bool,

    /// Maximum number of processes to show
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn from_str_config(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }

    fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_tty(),
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let loaded = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };
    let (config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    init_logging(&config, cli.verbose)?;
    if let Some(err) = load_error {
        tracing::warn!("{err:#}; using default config");
    }

    let color = cli
        .color
        .unwrap_or_else(|| ColorChoice::from_str_config(&config.general.color));
    let style = Style {
        color: color.enabled(),
    };

    let mut collector = Collector::new(config.collector.collector_config());
    let output = match cli.command {
        Command::Memory { json } => {
            let memory = collector.snapshot_system_memory();
            if json {
                to_json(&memory)?
            } else {
                render_memory(&memory, &style)
            }
        }
        Command::Processes(args) => {
            let options = rank_options(&config, &args);
            let records = collector.snapshot_all_processes();
            let ranked = options.rank(&records, &args.filter);
            tracing::info!(
                total = records.len(),
                shown = ranked.len(),
                sort = options.sort.label(),
                "ranked processes"
            );
            if args.json {
                to_json(&ranked)?
            } else {
                render_processes(&ranked, &style)
            }
        }
        Command::Health { json } => {
            tracing::info!("sampling system metrics");
            let metrics = collector.snapshot_system_metrics();
            let report = score_health(&metrics);
            if json {
                to_json(&json!({ "metrics": metrics, "health": report }))?
            } else {
                render_health(&report, &metrics, &style)
            }
        }
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .wrap_err("failed to write output")?;
    stdout.flush().wrap_err("failed to flush output")?;
    Ok(())
}

fn rank_options(config: &Config, args: &ProcessesArgs) -> RankOptions {
    let mut options = config.processes.rank_options();
    if let Some(sort) = args.sort {
        options.sort = sort;
    }
    if args.descending {
        options.descending = true;
    } else if args.ascending {
        options.descending = false;
    }
    if let Some(limit) = args.limit {
        options.limit = limit;
    }
    options
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value).wrap_err("failed to serialize output")?;
    out.push('\n');
    Ok(out)
}

fn init_logging(config: &Config, verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => config
            .general
            .log_level
            .parse()
            .unwrap_or(LevelFilter::WARN),
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let builder = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .with_ansi(io::stderr().is_tty());

    let result = if config.general.log_format.eq_ignore_ascii_case("json") {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| eyre!("failed to set tracing subscriber: {e}"))
}
