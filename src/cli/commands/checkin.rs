use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::CheckinLogic;
use crate::errors::AppResult;
use crate::roster::load_roster;
use crate::store::SqliteStore;
use crate::ui::messages::success;
use crate::utils::time::format_local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin { id } = cmd {
        let roster = load_roster(cfg)?;
        let mut store = SqliteStore::open(&cfg.database)?;

        let rec = CheckinLogic::mark_present(&mut store, &roster, id)?;
        success(format!(
            "Welcome, {}! You are marked present. ({})",
            rec.name,
            format_local(&rec.timestamp)
        ));
    }

    Ok(())
}
