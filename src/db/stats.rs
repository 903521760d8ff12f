use crate::db::migrate::schema_version;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::Collection;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW, colorize_optional};
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, table: &str) -> AppResult<i64> {
    let n = pool
        .conn
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
    Ok(n)
}

fn latest(pool: &DbPool, table: &str) -> AppResult<Option<String>> {
    let ts = pool
        .conn
        .query_row(
            &format!("SELECT timestamp FROM {table} ORDER BY timestamp DESC LIMIT 1"),
            [],
            |row| row.get(0),
        )
        .optional()?;
    Ok(ts)
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);
    println!("{}• Schema version:{} {}", CYAN, RESET, schema_version());

    for collection in [Collection::Attendance, Collection::Guests] {
        let table = collection.as_str();
        let n = count(pool, table)?;
        let last = latest(pool, table)?.unwrap_or_else(|| "--".to_string());
        println!(
            "{}• {}:{} {}{}{} records, latest {}",
            CYAN,
            table,
            RESET,
            GREEN,
            n,
            RESET,
            colorize_optional(&last)
        );
    }

    println!("{}• Log entries:{} {}", CYAN, RESET, count(pool, "log")?);

    println!();
    Ok(())
}
