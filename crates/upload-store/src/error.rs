use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite error: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("invalid database host: {0:?}")]
    InvalidHost(PathBuf),
    #[error("table {0} already exists")]
    TableExists(&'static str),
    #[error("table {0} does not exist, run with --create_table first")]
    MissingTable(&'static str),
    #[error("duplicate email: {0}")]
    DuplicateEmail(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Sql,
    InvalidHost,
    TableExists,
    MissingTable,
    DuplicateEmail,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Sql(_) => StoreErrorKind::Sql,
            StoreError::InvalidHost(_) => StoreErrorKind::InvalidHost,
            StoreError::TableExists(_) => StoreErrorKind::TableExists,
            StoreError::MissingTable(_) => StoreErrorKind::MissingTable,
            StoreError::DuplicateEmail(_) => StoreErrorKind::DuplicateEmail,
        }
    }
}
