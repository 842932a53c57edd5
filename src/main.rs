// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use log::{error, info, warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand, Args};
use clap_complete::{generate, Shell};

use vmdtex::app_config::{self, Config};
use vmdtex::app_controller::Controller;
use vmdtex::errors::DeckError;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
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

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render deck files to LaTeX Beamer (default command)
    Render(RenderArgs),

    /// Check deck files for authoring problems
    Check {
        /// Deck file to check
        #[arg(value_name = "INPUT_PATH")]
        input_path: PathBuf,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,

        /// Print the findings as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the parsed deck tree as JSON
    Ast {
        /// Deck file to parse
        #[arg(value_name = "INPUT_PATH")]
        input_path: PathBuf,
    },

    /// Generate shell completions for vmdtex
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone, Default)]
struct RenderArgs {
    /// Input deck file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Directory for output files (defaults to the input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Render only the slides of this language (e.g. 'EN', 'de')
    #[arg(short = 'L', long)]
    lang: Option<String>,

    /// Log deck check findings before rendering
    #[arg(long)]
    check: bool,
}

/// vmdtex - slide deck markup to LaTeX Beamer
///
/// Parses decks of scenes and typed elements and renders them to Beamer
/// source, one file per slide language for multilingual decks.
#[derive(Parser, Debug)]
#[command(name = "vmdtex")]
#[command(version)]
#[command(about = "Render slide deck markup to LaTeX Beamer")]
#[command(long_about = "vmdtex parses slide decks and renders them to LaTeX Beamer source.

EXAMPLES:
    vmdtex talk.vmd                     # Render talk_output.tex (or one file per language)
    vmdtex -f talk.vmd                  # Overwrite existing outputs
    vmdtex -L EN talk.vmd               # Render only the English slides
    vmdtex -o build/ decks/             # Render every .vmd below decks/ into build/
    vmdtex check talk.vmd               # Report authoring problems
    vmdtex ast talk.vmd                 # Dump the parsed deck as JSON
    vmdtex completions bash > vmdtex.bash

CONFIGURATION:
    Settings are read from vmdtex.json when present. Use --config-path to
    point to another file. Command line flags override file values.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    render: RenderArgs,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "vmdtex.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
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

    // @returns: ANSI color and tag for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
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
            let (color, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, tag, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() {
    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // The logger accepts everything; the effective level is set through max_level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    let mut config = Config::load_or_default(&cli.config_path)?;
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level.into();
    }
    log::set_max_level(config.log_level.into());

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "vmdtex", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Render(args)) => run_render(config, args),
        Some(Commands::Check { input_path, strict, json }) => {
            if strict {
                config.validation.strict = true;
            }
            run_check(config, &input_path, json)
        }
        Some(Commands::Ast { input_path }) => {
            let controller = Controller::with_config(config)?;
            println!("{}", controller.dump_ast(&input_path)?);
            Ok(())
        }
        None => run_render(config, cli.render),
    }
}

fn run_render(mut config: Config, options: RenderArgs) -> Result<()> {
    let input_path = options.input_path.ok_or_else(|| {
        anyhow!("INPUT_PATH is required when no subcommand is specified")
    })?;

    if let Some(output_dir) = &options.output_dir {
        config.output.directory = Some(output_dir.to_string_lossy().to_string());
    }
    if options.check {
        config.validation.check_before_render = true;
    }

    let controller = Controller::with_config(config)?.with_language(options.lang);

    if input_path.is_file() {
        let written = controller.run(&input_path, options.force_overwrite).map_err(|e| {
            if let Some(DeckError::MissingLanguage { .. }) = e.downcast_ref::<DeckError>() {
                warn!("Every slide needs a lang attribute, e.g. ## Slide(title=\"Intro\", lang=\"EN\")");
            }
            e
        })?;
        if written.is_empty() {
            info!("Nothing written for {:?}", input_path);
        }
    } else if input_path.is_dir() {
        let summary = controller.run_folder(&input_path, options.force_overwrite)?;
        if summary.failed > 0 {
            return Err(anyhow!("{} deck(s) failed to render", summary.failed));
        }
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", input_path));
    }

    Ok(())
}

fn run_check(config: Config, input_path: &Path, json: bool) -> Result<()> {
    let controller = Controller::with_config(config)?;
    let report = controller.check(input_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for diagnostic in &report.diagnostics {
            println!("{}: {}", input_path.display(), diagnostic);
        }
        info!(
            "{} error(s), {} warning(s)",
            report.error_count(),
            report.warning_count()
        );
    }

    if !controller.check_passed(&report) {
        return Err(DeckError::Invalid(report.diagnostics.len()).into());
    }
    Ok(())
}
