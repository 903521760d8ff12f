use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{DocumentStore, SqliteStore};
use crate::ui::messages::{header, info};
use crate::utils::table::Table;
use crate::utils::time::format_local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { collection } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let records = store.list(*collection)?;

        if records.is_empty() {
            info(format!("No {} records.", collection.as_str()));
            return Ok(());
        }

        header(format!("{} ({})", collection.as_str(), records.len()));

        let mut table = Table::new([cfg.id_label.as_str(), "Name", "Last check-in"]);
        for r in &records {
            table.add_row(vec![
                r.slu_id.clone(),
                r.name.clone(),
                format_local(&r.timestamp),
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
