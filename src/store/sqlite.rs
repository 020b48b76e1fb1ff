//! `kv_store` table backend.

use super::KeyValueStore;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub struct SqliteStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteStore<'c> {
    /// The schema must already exist (see `db::initialize::init_db`).
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteStore<'_> {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT value FROM kv_store WHERE key = ?1")?;
        let value = stmt
            .query_row([key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )?;
        stmt.execute(params![key, value, now])?;
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", [key])?;
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT key FROM kv_store ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut keys = Vec::new();
        for k in rows {
            keys.push(k?);
        }
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;

    fn store_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        conn
    }

    #[test]
    fn set_overwrites_previous_value() {
        let conn = store_conn();
        let store = SqliteStore::new(&conn);

        store.set("corridas", "[]").unwrap();
        store.set("corridas", "[1]").unwrap();

        assert_eq!(store.get("corridas").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.keys().unwrap(), vec!["corridas".to_string()]);
    }

    #[test]
    fn missing_key_is_none_and_remove_is_idempotent() {
        let conn = store_conn();
        let store = SqliteStore::new(&conn);

        assert!(store.get("veiculoConfig").unwrap().is_none());
        store.remove("veiculoConfig").unwrap();
        assert!(store.keys().unwrap().is_empty());
    }
}
