use crate::error::{Result, StoreError};
use rusqlite::{params, Connection, ErrorCode};
use tracing::warn;
use upload_core::UserRecord;

pub const USERS_TABLE: &str = "users";

const CREATE_USERS_TABLE: &str = "CREATE TABLE users (
    name VARCHAR(255) NOT NULL,
    surname VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL PRIMARY KEY
);";

pub struct UsersRepo<'a> {
    conn: &'a mut Connection,
}

impl<'a> UsersRepo<'a> {
    pub fn new(conn: &'a mut Connection) -> Self {
        Self { conn }
    }

    pub fn table_exists(&self) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(1) FROM sqlite_master WHERE type = 'table' AND name = ?1;",
            [USERS_TABLE],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    pub fn create_table(&self) -> Result<()> {
        if self.table_exists()? {
            return Err(StoreError::TableExists(USERS_TABLE));
        }
        self.conn.execute_batch(CREATE_USERS_TABLE)?;
        Ok(())
    }

    /// Inserts the whole batch in one transaction. Any failure rolls the
    /// transaction back, so either every user is stored or none is.
    pub fn save_users(&mut self, users: &[UserRecord]) -> Result<usize> {
        if !self.table_exists()? {
            return Err(StoreError::MissingTable(USERS_TABLE));
        }

        let tx = self.conn.transaction()?;
        match insert_all(&tx, users) {
            Ok(inserted) => {
                tx.commit()?;
                Ok(inserted)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback() {
                    warn!(error = %rollback_err, "rollback after failed insert also failed");
                }
                Err(err)
            }
        }
    }

    pub fn count(&self) -> Result<i64> {
        if !self.table_exists()? {
            return Err(StoreError::MissingTable(USERS_TABLE));
        }
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(1) FROM users;", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn list(&self) -> Result<Vec<UserRecord>> {
        if !self.table_exists()? {
            return Err(StoreError::MissingTable(USERS_TABLE));
        }
        let mut stmt = self
            .conn
            .prepare("SELECT name, surname, email FROM users ORDER BY rowid ASC;")?;
        let mut rows = stmt.query([])?;
        let mut users = Vec::new();
        while let Some(row) = rows.next()? {
            users.push(UserRecord {
                name: row.get(0)?,
                surname: row.get(1)?,
                email: row.get(2)?,
            });
        }
        Ok(users)
    }
}

fn insert_all(conn: &Connection, users: &[UserRecord]) -> Result<usize> {
    let mut stmt =
        conn.prepare("INSERT INTO users (name, surname, email) VALUES (?1, ?2, ?3);")?;
    for user in users {
        stmt.execute(params![user.name, user.surname, user.email])
            .map_err(|err| insert_error(err, &user.email))?;
    }
    Ok(users.len())
}

fn insert_error(err: rusqlite::Error, email: &str) -> StoreError {
    if let rusqlite::Error::SqliteFailure(ref failure, _) = err {
        if failure.code == ErrorCode::ConstraintViolation
            && (failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                || failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE)
        {
            return StoreError::DuplicateEmail(email.to_string());
        }
    }
    err.into()
}
