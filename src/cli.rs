//! The command line interface for vaxmap.
use crate::input::load_registry;
use crate::log;
use crate::report::ReportKind;
use crate::settings::Settings;
use ::log::info;
use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub mod example;
use example::ExampleSubcommands;
pub mod settings;
use settings::SettingsSubcommands;

/// The command line interface for vaxmap.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The available commands.
    #[command(subcommand)]
    command: Option<Commands>,
    /// Flag to provide the CLI docs as markdown
    #[arg(long, hide = true)]
    markdown_help: bool,
}

/// Options for the run command
#[derive(Args, Default)]
pub struct RunOpts {
    /// Minimum age for a shot (overrides the value in the settings file)
    #[arg(short, long)]
    pub intake: Option<u32>,
    /// The kind of report to print (overrides the value in the settings file)
    #[arg(short, long, value_enum)]
    pub report: Option<ReportKind>,
    /// Directory to write log files to
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

/// The available commands.
#[derive(Subcommand)]
enum Commands {
    /// Register inhabitants for shots and print a report and map.
    Run {
        /// Path to the JSON data file.
        data_file: PathBuf,
        /// Other run options
        #[command(flatten)]
        opts: RunOpts,
    },
    /// Manage example data files.
    Example {
        /// The available subcommands for managing example data files.
        #[command(subcommand)]
        subcommand: ExampleSubcommands,
    },
    /// Check that a data file can be loaded.
    Validate {
        /// Path to the JSON data file.
        data_file: PathBuf,
    },
    /// Manage settings file.
    Settings {
        /// The subcommands for managing the settings file.
        #[command(subcommand)]
        subcommand: SettingsSubcommands,
    },
}

impl Commands {
    /// Execute the supplied CLI command
    fn execute(self) -> Result<()> {
        match self {
            Self::Run { data_file, opts } => handle_run_command(&data_file, &opts, None),
            Self::Example { subcommand } => subcommand.execute(),
            Self::Validate { data_file } => handle_validate_command(&data_file, None),
            Self::Settings { subcommand } => subcommand.execute(),
        }
    }
}

/// Parse CLI arguments and start vaxmap
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Invoked as: `$ vaxmap --markdown-help`
    if cli.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return Ok(());
    }

    let Some(command) = cli.command else {
        let help_str = Cli::command().render_long_help().to_string();
        println!("{help_str}");
        return Ok(());
    };

    command.execute()
}

/// Handle the `run` command.
pub fn handle_run_command(
    data_path: &Path,
    opts: &RunOpts,
    settings: Option<Settings>,
) -> Result<()> {
    // Load program settings, if not provided
    let settings = if let Some(settings) = settings {
        settings
    } else {
        Settings::load().context("Failed to load settings.")?
    };

    // These settings can be overridden by command-line arguments
    let current_intake = opts.intake.unwrap_or(settings.current_intake);
    let report_kind = opts.report.unwrap_or(settings.report);

    if let Some(log_dir) = opts.log_dir.as_deref() {
        fs::create_dir_all(log_dir).with_context(|| {
            format!("Failed to create log directory: {}", log_dir.display())
        })?;
    }

    // Initialise program logger
    log::init(&settings.log_level, opts.log_dir.as_deref())
        .context("Failed to initialise logging.")?;

    // Load the data to run
    let mut registry =
        load_registry(data_path, current_intake).context("Failed to load registry.")?;
    info!("Loaded data from {}", data_path.display());

    crate::simulation::run(&mut registry, report_kind, &mut io::stdout().lock())
        .context("Failed to run registration round.")
}

/// Handle the `validate` command.
pub fn handle_validate_command(data_path: &Path, settings: Option<Settings>) -> Result<()> {
    // Load program settings, if not provided
    let settings = if let Some(settings) = settings {
        settings
    } else {
        Settings::load().context("Failed to load settings.")?
    };

    // Initialise program logger (we won't save log files when running the validate command)
    log::init(&settings.log_level, None).context("Failed to initialise logging.")?;

    // Load/validate the data file
    let registry = load_registry(data_path, settings.current_intake)
        .context("Failed to validate data file.")?;
    info!(
        "Data file is valid: {} cities, {} clinics",
        registry.cities.len(),
        registry.clinics().count()
    );

    Ok(())
}
