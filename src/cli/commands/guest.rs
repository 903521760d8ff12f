use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::CheckinLogic;
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Guest { id, name } = cmd {
        let mut store = SqliteStore::open(&cfg.database)?;

        let rec = CheckinLogic::register_guest(&mut store, id, &name.join(" "))?;
        success(format!(
            "Welcome, {}! You are registered as a guest.",
            rec.name
        ));
    }

    Ok(())
}
