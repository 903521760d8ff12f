//! Document store: per-collection records keyed by identifier.
//!
//! Writes are upserts. The store, not the caller, stamps every record.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Collection {
    Attendance,
    Guests,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Attendance => "attendance",
            Collection::Guests => "guests",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub slu_id: String,
    pub name: String,
    pub timestamp: DateTime<Utc>,
}

pub trait DocumentStore {
    /// Create or replace the record for `id`, returning the stored record.
    fn upsert(&mut self, collection: Collection, id: &str, name: &str) -> AppResult<Record>;

    fn get(&self, collection: Collection, id: &str) -> AppResult<Option<Record>>;

    /// All records of a collection, oldest first.
    fn list(&self, collection: Collection) -> AppResult<Vec<Record>>;

    /// Record an operation in the store's internal log. Never fails the caller.
    fn audit(&self, _operation: &str, _target: &str, _message: &str) {}
}
