//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use crate::store::{Persistence, SqliteStore};
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> rusqlite::Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Open the database and bring its schema up to date.
    pub fn open_ready(path: &str) -> AppResult<Self> {
        let pool = Self::new(path)?;
        init_db(&pool.conn)?;
        Ok(pool)
    }

    /// Key-value view over this connection.
    pub fn store(&self) -> SqliteStore<'_> {
        SqliteStore::new(&self.conn)
    }

    /// Run `func` with a [`Persistence`] adapter bound to this database.
    pub fn with_persistence<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(Persistence<'_>) -> AppResult<T>,
    {
        let store = self.store();
        func(Persistence::new(&store))
    }
}
