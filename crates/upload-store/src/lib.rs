pub mod credentials;
pub mod db;
pub mod error;
pub mod paths;
pub mod repo;

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;

pub use credentials::Credentials;

pub struct Store {
    conn: Connection,
}

impl Store {
    /// Opens the database named by `credentials.host`.
    ///
    /// The engine is embedded and has no user accounts: access is governed by
    /// the owner-only permissions set on the database file.
    pub fn connect(credentials: &Credentials) -> Result<Self> {
        let path = paths::resolve_db_path(&credentials.host)?;
        Self::open(&path)
    }

    pub fn open(path: &Path) -> Result<Self> {
        let conn = db::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        Ok(Self { conn })
    }

    pub fn users(&mut self) -> repo::UsersRepo<'_> {
        repo::UsersRepo::new(&mut self.conn)
    }
}
