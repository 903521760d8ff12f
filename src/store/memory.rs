use super::{Collection, DocumentStore, Record};
use crate::errors::{AppError, AppResult};
use chrono::Utc;
use std::collections::HashMap;

/// Volatile store used by `kiosk --dry-run`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: HashMap<(Collection, String), Record>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn upsert(&mut self, collection: Collection, id: &str, name: &str) -> AppResult<Record> {
        if id.is_empty() {
            return Err(AppError::InvalidId(String::new()));
        }
        let record = Record {
            slu_id: id.to_string(),
            name: name.to_string(),
            timestamp: Utc::now(),
        };
        self.docs
            .insert((collection, id.to_string()), record.clone());
        Ok(record)
    }

    fn get(&self, collection: Collection, id: &str) -> AppResult<Option<Record>> {
        Ok(self.docs.get(&(collection, id.to_string())).cloned())
    }

    fn list(&self, collection: Collection) -> AppResult<Vec<Record>> {
        let mut out: Vec<Record> = self
            .docs
            .iter()
            .filter(|((c, _), _)| *c == collection)
            .map(|(_, r)| r.clone())
            .collect();
        out.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.slu_id.cmp(&b.slu_id)));
        Ok(out)
    }
}
