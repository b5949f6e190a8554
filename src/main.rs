// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use log::{warn, LevelFilter, Level, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod exporter;
mod file_utils;
mod media;
mod parsers;
mod scanner;
mod search;
mod subtitle;
mod timecode;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan for subtitles, search them, and export a report (default command)
    #[command(alias = "search")]
    Search(SearchArgs),

    /// Generate shell completions for vidsearch
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct SearchArgs {
    /// Directory tree to scan, or a single subtitle file
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Search query; separate multiple terms with commas
    #[arg(value_name = "QUERY")]
    query: String,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum number of entries in the report
    #[arg(short = 'n', long)]
    max_results: Option<usize>,

    /// Keep every Nth matching entry
    #[arg(short, long)]
    interval: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// VidSearch - Subtitle indexing and search
///
/// Scans a directory tree for subtitle files (SRT, ASS/SSA, WebVTT),
/// searches their content, and exports matched fragments to a Markdown report.
#[derive(Parser, Debug)]
#[command(name = "vidsearch")]
#[command(version = "1.0.0")]
#[command(about = "Subtitle indexing and search tool")]
#[command(long_about = "VidSearch indexes subtitle files in a video collection and searches them.

EXAMPLES:
    vidsearch /movies \"hello\"                  # Search all subtitles under /movies
    vidsearch /movies \"hello,world\" -o out.md  # Multi-term search, report to file
    vidsearch episode.srt \"hello\" -n 50 -i 2   # Single file, cap 50, every 2nd hit
    vidsearch --log-level debug /movies \"word\" # Verbose scan logging
    vidsearch completions bash > vidsearch.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory tree to scan, or a single subtitle file
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Search query; separate multiple terms with commas
    #[arg(value_name = "QUERY")]
    query: Option<String>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum number of entries in the report
    #[arg(short = 'n', long)]
    max_results: Option<usize>,

    /// Keep every Nth matching entry
    #[arg(short, long)]
    interval: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "vidsearch", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Search(args)) => run_search(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;
            let query = cli
                .query
                .ok_or_else(|| anyhow!("QUERY is required when no subcommand is specified"))?;

            let search_args = SearchArgs {
                input_path,
                query,
                output: cli.output,
                max_results: cli.max_results,
                interval: cli.interval,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_search(search_args).await
        }
    }
}

async fn run_search(options: SearchArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if std::path::Path::new(config_path).exists() {
        Config::from_file(config_path)
            .context(format!("Failed to load config file: {}", config_path))?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        config
            .save(config_path)
            .context(format!("Failed to write default config to file: {}", config_path))?;
        config
    };

    // Override config with CLI options if provided
    if let Some(max_results) = options.max_results {
        config.export.max_results = max_results;
    }
    if let Some(interval) = options.interval {
        config.export.interval = interval;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let controller = Controller::with_config(config)?;
    controller
        .run(options.input_path, &options.query, options.output)
        .await
}
