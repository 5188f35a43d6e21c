mod commands;
mod error;
mod help;
mod mode;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

use crate::commands::import::Destination;
use crate::commands::{create_table, import, Context};
use crate::error::{exit_code_for, exit_status_for, report_error, CliError};
use crate::mode::{ModeArgs, RunMode};
use upload_config::{self as config, AppConfig, ConfigSource};
use upload_import::ImportOptions;
use upload_store::Store;

#[derive(Debug, Parser)]
#[command(
    name = "user_upload",
    version,
    about = "Import users from a CSV file into the users table",
    disable_help_flag = true
)]
struct Cli {
    #[command(flatten)]
    mode: ModeArgs,
    /// CSV file of name,surname,email rows
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
    /// Create the users table before processing the file
    #[arg(long = "create_table")]
    create_table: bool,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    json: bool,
    #[arg(long, short)]
    verbose: bool,
}

/// Steps after connecting are independent: a failed step is reported and the
/// next one still runs. The exit code is that of the first failure.
#[derive(Debug, Default)]
struct RunStatus {
    failure: Option<u8>,
}

impl RunStatus {
    fn record(&mut self, result: Result<()>, verbose: bool) {
        if let Err(err) = result {
            report_error(&err, verbose);
            self.failure.get_or_insert(exit_status_for(&err));
        }
    }

    fn exit_code(&self) -> ExitCode {
        match self.failure {
            Some(code) => ExitCode::from(code),
            None => ExitCode::SUCCESS,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(status) => status.exit_code(),
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<RunStatus> {
    let Cli {
        mode,
        file,
        create_table: wants_table,
        config: config_path,
        json,
        verbose,
    } = cli;

    let app_config = if mode.help {
        AppConfig::default()
    } else {
        load_config(config_path.as_deref())?
    };

    let mut store = match RunMode::resolve(mode, &app_config.database)? {
        RunMode::Help => {
            help::print_help();
            return Ok(RunStatus::default());
        }
        RunMode::DryRun => {
            if wants_table {
                return Err(CliError::CreateTableOnDryRun.into());
            }
            debug!("dry run, skipping database connection");
            None
        }
        RunMode::Live(credentials) => {
            debug!(
                host = %credentials.host,
                user = %credentials.username,
                "connecting to database"
            );
            let store = Store::connect(&credentials).with_context(|| {
                format!("Unable to connect to the database at {}", credentials.host)
            })?;
            Some(store)
        }
    };

    let ctx = Context {
        json,
        import: ImportOptions {
            delimiter: app_config.import.delimiter,
            encoding: app_config.import.encoding,
        },
    };
    let mut status = RunStatus::default();

    if wants_table {
        if let Some(store) = store.as_mut() {
            status.record(create_table::create_table(store), verbose);
        }
    }

    if let Some(path) = file {
        let result = if path.as_os_str().is_empty() {
            Err(CliError::InvalidFilePath.into())
        } else {
            let destination = match store.as_mut() {
                Some(store) => Destination::Database(store),
                None => Destination::DryRun,
            };
            import::process_file(&ctx, &path, destination)
        };
        status.record(result, verbose);
    }

    Ok(status)
}

fn load_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let loaded = config::load(config_path)?;
    match &loaded.source {
        ConfigSource::File(path) => debug!(path = %path.display(), "config loaded"),
        ConfigSource::Defaults(Some(path)) => {
            debug!(path = %path.display(), "config missing, using defaults")
        }
        ConfigSource::Defaults(None) => debug!("no config location, using defaults"),
    }
    Ok(loaded.config)
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
