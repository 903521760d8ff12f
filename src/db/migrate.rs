use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::Connection;

/// Ordered schema steps. Index + 1 is the `user_version` after applying it.
const MIGRATIONS: &[(&str, &str)] = &[
    (
        "create_log",
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    ),
    (
        "create_attendance",
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            slu_id     TEXT PRIMARY KEY NOT NULL CHECK(slu_id <> ''),
            name       TEXT NOT NULL,
            timestamp  TEXT NOT NULL
        );
        "#,
    ),
    (
        "create_guests",
        r#"
        CREATE TABLE IF NOT EXISTS guests (
            slu_id     TEXT PRIMARY KEY NOT NULL CHECK(slu_id <> ''),
            name       TEXT NOT NULL,
            timestamp  TEXT NOT NULL
        );
        "#,
    ),
];

fn current_version(conn: &Connection) -> AppResult<usize> {
    let v: i64 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    usize::try_from(v).map_err(|_| AppError::Migration(format!("negative user_version {v}")))
}

pub fn schema_version() -> usize {
    MIGRATIONS.len()
}

/// Apply every migration newer than the store's `user_version`.
/// Returns the names of the applied steps.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    let from = current_version(conn)?;
    if from > MIGRATIONS.len() {
        return Err(AppError::Migration(format!(
            "store schema version {from} is newer than this build ({})",
            MIGRATIONS.len()
        )));
    }

    let mut applied = Vec::new();
    for (idx, (name, sql)) in MIGRATIONS.iter().enumerate().skip(from) {
        let version = idx + 1;
        conn.execute_batch(&format!(
            "BEGIN;\n{sql}\nPRAGMA user_version = {version};\nCOMMIT;"
        ))
        .map_err(|e| AppError::Migration(format!("{name}: {e}")))?;
        applied.push(*name);
    }

    if !applied.is_empty() && from > 0 {
        success(format!("Store schema upgraded to version {}.", MIGRATIONS.len()));
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_store_gets_every_table() {
        let conn = Connection::open_in_memory().unwrap();
        let applied = run_pending_migrations(&conn).unwrap();
        assert_eq!(applied, vec!["create_log", "create_attendance", "create_guests"]);
        assert_eq!(current_version(&conn).unwrap(), schema_version());

        for table in ["log", "attendance", "guests"] {
            let n: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                    |r| r.get(0),
                )
                .unwrap();
            assert_eq!(n, 1, "missing table {table}");
        }
    }

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        assert!(run_pending_migrations(&conn).unwrap().is_empty());
    }

    #[test]
    fn newer_schema_is_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA user_version = 99;").unwrap();
        assert!(matches!(
            run_pending_migrations(&conn),
            Err(AppError::Migration(_))
        ));
    }
}
