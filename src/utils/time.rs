use chrono::{DateTime, Local, Utc};

/// Store timestamps are UTC; listings show local wall-clock time.
pub fn format_local(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}
