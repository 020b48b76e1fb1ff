//! Flat key-value persistence.
//!
//! Every collection is stored as one JSON blob under a fixed key, exactly as
//! the browser version kept it in local storage. Backends implement
//! [`KeyValueStore`]; callers go through [`Persistence`], which is also
//! usable without any backend (loads return defaults, saves do nothing).

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Sessions of the single local driver.
pub const SESSIONS_KEY: &str = "corridas";
/// Vehicle profile singleton.
pub const VEHICLE_KEY: &str = "veiculoConfig";
/// Legacy registered-user list, only read by the recovery utility.
pub const USERS_KEY: &str = "usuarios_cadastrados";

pub fn user_sessions_key(user_id: &str) -> String {
    format!("corridas_{user_id}")
}

pub fn user_backup_key(user_id: &str) -> String {
    format!("corridas_copia_seguranca_{user_id}")
}

/// Minimal get/set-by-key storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
    /// All keys, in ascending order.
    fn keys(&self) -> AppResult<Vec<String>>;
}

/// A loaded value plus the decode problem that was recovered from, if any.
#[derive(Debug)]
pub struct Loaded<T> {
    pub value: T,
    /// Set when the stored blob was unreadable.
    pub problem: Option<String>,
}

/// A stored array whose entries are decoded one by one.
///
/// Entries that do not decode are kept verbatim in `rejected` and written
/// back after `items`, so a bad record never costs the good ones.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    pub items: Vec<T>,
    pub rejected: Vec<Rejected>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rejected {
    /// `id` field of the entry, when it has a readable one.
    pub id: Option<String>,
    pub raw: Value,
    pub reason: String,
}

impl Rejected {
    /// Id for messages, or the position when the entry has none.
    pub fn label(&self, index: usize) -> String {
        self.id.clone().unwrap_or_else(|| format!("#{index}"))
    }
}

impl<T: DeserializeOwned> Collection<T> {
    pub fn from_values(values: Vec<Value>) -> Self {
        let mut out = Self::default();
        for raw in values {
            match serde_json::from_value::<T>(raw.clone()) {
                Ok(item) => out.items.push(item),
                Err(e) => out.rejected.push(Rejected {
                    id: match raw.get("id") {
                        Some(Value::String(s)) => Some(s.clone()),
                        Some(Value::Number(n)) => Some(n.to_string()),
                        _ => None,
                    },
                    raw,
                    reason: e.to_string(),
                }),
            }
        }
        out
    }
}

impl<T: Serialize> Collection<T> {
    pub fn to_values(&self) -> AppResult<Vec<Value>> {
        let mut out = Vec::with_capacity(self.items.len() + self.rejected.len());
        for item in &self.items {
            out.push(serde_json::to_value(item)?);
        }
        out.extend(self.rejected.iter().map(|r| r.raw.clone()));
        Ok(out)
    }
}

/// JSON (de)serialization on top of an optional backend.
#[derive(Clone, Copy)]
pub struct Persistence<'a> {
    backend: Option<&'a dyn KeyValueStore>,
}

impl<'a> Persistence<'a> {
    pub fn new(backend: &'a dyn KeyValueStore) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// No backend available: loads yield defaults, saves are no-ops.
    pub fn detached() -> Self {
        Self { backend: None }
    }

    pub fn is_attached(&self) -> bool {
        self.backend.is_some()
    }

    pub fn backend(&self) -> Option<&'a dyn KeyValueStore> {
        self.backend
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> AppResult<()> {
        let Some(store) = self.backend else {
            return Ok(());
        };
        let json = serde_json::to_string(value)?;
        store.set(key, &json)
    }

    /// Deserialize the value under `key`, or `default` when absent.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> AppResult<T> {
        let Some(store) = self.backend else {
            return Ok(default);
        };
        match store.get(key)? {
            None => Ok(default),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| AppError::CorruptData {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Like [`load`](Self::load), but an unreadable blob is replaced by
    /// `default` in the store and reported once through `problem`.
    pub fn load_or_reset<T>(&self, key: &str, default: T) -> AppResult<Loaded<T>>
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        match self.load(key, default.clone()) {
            Ok(value) => Ok(Loaded {
                value,
                problem: None,
            }),
            Err(AppError::CorruptData { reason, .. }) => {
                self.save(key, &default)?;
                Ok(Loaded {
                    value: default,
                    problem: Some(reason),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Array under `key`, decoded entry by entry. Only a value that is not
    /// a JSON array at all is an error ([`AppError::CorruptData`]).
    pub fn load_collection<T: DeserializeOwned>(&self, key: &str) -> AppResult<Collection<T>> {
        let values: Vec<Value> = self.load(key, Vec::new())?;
        Ok(Collection::from_values(values))
    }

    /// Like [`load_collection`](Self::load_collection), but a non-array
    /// value is replaced by `[]` and reported through `problem`.
    pub fn load_collection_or_reset<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> AppResult<Loaded<Collection<T>>> {
        let loaded = self.load_or_reset::<Vec<Value>>(key, Vec::new())?;
        Ok(Loaded {
            value: Collection::from_values(loaded.value),
            problem: loaded.problem,
        })
    }

    /// Write `items` followed by the untouched rejected entries.
    pub fn save_collection<T: Serialize>(&self, key: &str, c: &Collection<T>) -> AppResult<()> {
        self.save(key, &c.to_values()?)
    }

    pub fn remove(&self, key: &str) -> AppResult<()> {
        match self.backend {
            Some(store) => store.remove(key),
            None => Ok(()),
        }
    }
}
