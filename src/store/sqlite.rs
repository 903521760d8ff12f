use super::{Collection, DocumentStore, Record};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension, Row, params};

/// SQLite-backed store; one table per collection, `slu_id` primary key.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::new(path)?,
        })
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

fn parse_timestamp(raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
        })
}

fn map_row(row: &Row) -> rusqlite::Result<Record> {
    let raw: String = row.get("timestamp")?;
    Ok(Record {
        slu_id: row.get("slu_id")?,
        name: row.get("name")?,
        timestamp: parse_timestamp(&raw)?,
    })
}

impl DocumentStore for SqliteStore {
    fn upsert(&mut self, collection: Collection, id: &str, name: &str) -> AppResult<Record> {
        if id.is_empty() {
            return Err(AppError::InvalidId(String::new()));
        }

        // timestamp generated by SQLite at write time
        let sql = format!(
            "INSERT INTO {table} (slu_id, name, timestamp)
             VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
             ON CONFLICT(slu_id) DO UPDATE SET
                 name = excluded.name,
                 timestamp = excluded.timestamp
             RETURNING slu_id, name, timestamp",
            table = collection.as_str()
        );

        let record = self
            .pool
            .conn
            .query_row(&sql, params![id, name], map_row)?;
        Ok(record)
    }

    fn get(&self, collection: Collection, id: &str) -> AppResult<Option<Record>> {
        let sql = format!(
            "SELECT slu_id, name, timestamp FROM {} WHERE slu_id = ?1",
            collection.as_str()
        );
        let rec = self
            .pool
            .conn
            .query_row(&sql, [id], map_row)
            .optional()?;
        Ok(rec)
    }

    fn list(&self, collection: Collection) -> AppResult<Vec<Record>> {
        let sql = format!(
            "SELECT slu_id, name, timestamp FROM {} ORDER BY timestamp ASC, slu_id ASC",
            collection.as_str()
        );
        let mut stmt = self.pool.conn.prepare(&sql)?;
        let rows = stmt.query_map([], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn audit(&self, operation: &str, target: &str, message: &str) {
        ttlog_quiet(&self.pool.conn, operation, target, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SqliteStore {
        SqliteStore::from_pool(DbPool::in_memory().unwrap())
    }

    #[test]
    fn upsert_creates_and_stamps_record() {
        let mut s = store();
        let rec = s.upsert(Collection::Guests, "999999", "John Smith").unwrap();
        assert_eq!(rec.slu_id, "999999");
        assert_eq!(rec.name, "John Smith");

        let fetched = s.get(Collection::Guests, "999999").unwrap().unwrap();
        assert_eq!(fetched, rec);
        assert!(s.get(Collection::Attendance, "999999").unwrap().is_none());
    }

    #[test]
    fn repeat_upsert_replaces_instead_of_appending() {
        let mut s = store();
        let first = s.upsert(Collection::Attendance, "123456", "Jane Doe").unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = s.upsert(Collection::Attendance, "123456", "Jane Doe").unwrap();

        let all = s.list(Collection::Attendance).unwrap();
        assert_eq!(all.len(), 1);
        assert!(second.timestamp > first.timestamp);
        assert_eq!(all[0].timestamp, second.timestamp);
    }

    #[test]
    fn collections_are_independent() {
        let mut s = store();
        s.upsert(Collection::Attendance, "1", "Member").unwrap();
        s.upsert(Collection::Guests, "1", "Guest").unwrap();
        assert_eq!(s.list(Collection::Attendance).unwrap()[0].name, "Member");
        assert_eq!(s.list(Collection::Guests).unwrap()[0].name, "Guest");
    }

    #[test]
    fn audit_writes_into_log_table() {
        let s = store();
        s.audit("present", "123456", "Jane Doe marked present");
        let n: i64 = s
            .pool()
            .conn
            .query_row("SELECT COUNT(*) FROM log WHERE operation = 'present'", [], |r| {
                r.get(0)
            })
            .unwrap();
        assert_eq!(n, 1);
    }
}
