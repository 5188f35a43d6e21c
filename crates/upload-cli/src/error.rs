use anyhow::Error;
use std::process::ExitCode;
use thiserror::Error as ThisError;
use upload_config::ConfigError;
use upload_import::ImportError;
use upload_store::error::{StoreError, StoreErrorKind};

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("Missing required argument(s). Please check --help for more details.")]
    MissingArguments,
    #[error("Can't create table on a dry run.")]
    CreateTableOnDryRun,
    #[error("File path was invalid.")]
    InvalidFilePath,
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        println!("Error: {:#}", err);
    } else {
        println!("Error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status_for(err))
}

pub fn exit_status_for(err: &Error) -> u8 {
    for cause in err.chain() {
        if cause.downcast_ref::<CliError>().is_some() {
            return EXIT_INVALID_INPUT;
        }
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return store_exit_code(store_err);
        }
        if let Some(import_err) = cause.downcast_ref::<ImportError>() {
            return import_exit_code(import_err);
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
    }
    EXIT_FAILURE
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::MissingTable => EXIT_NOT_FOUND,
        StoreErrorKind::InvalidHost
        | StoreErrorKind::TableExists
        | StoreErrorKind::DuplicateEmail => EXIT_INVALID_INPUT,
        StoreErrorKind::Sql | StoreErrorKind::Io => EXIT_FAILURE,
    }
}

fn import_exit_code(err: &ImportError) -> u8 {
    match err {
        ImportError::Open { .. } => EXIT_NOT_FOUND,
        ImportError::Csv(_) => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::Read { .. } => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidDelimiter(_)
        | ConfigError::InvalidEncoding(_)
        | ConfigError::EmptyDatabaseField { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
