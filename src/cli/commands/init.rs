use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file at `config_path` (skipped in test mode)
///  - the SQLite store with its full schema
pub fn handle(cli: &Cli, config_path: &Path) -> AppResult<()> {
    let db_path = Config::init_all(config_path, cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rollcall…");
    println!("📄 Config file : {}", config_path.display());
    println!("🗄️  Database   : {}", &db_path);

    // opening the pool runs every pending migration
    let pool = DbPool::new(&db_path)?;

    success(format!("Database initialized at {}", &db_path));

    ttlog_quiet(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 rollcall initialization completed!");
    Ok(())
}
