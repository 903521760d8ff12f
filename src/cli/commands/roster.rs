use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::roster::{Roster, is_identifier, load_into, load_roster};
use crate::store::DocumentStore;
use crate::ui::messages::{error, info, warning};
use crate::utils::table::Table;

/// Load the roster for the kiosk. A failing source is reported and logged;
/// whatever was loaded before it stays usable. Returns the failure, if any.
pub(crate) fn load_reporting(
    cfg: &Config,
    store: &dyn DocumentStore,
) -> (Roster, Option<String>) {
    let mut roster = Roster::new();
    match load_into(cfg, &mut roster) {
        Ok(()) => {
            info(format!("Loaded {} people.", roster.len()));
            store.audit("roster_load", "", &format!("Loaded {} people", roster.len()));
            (roster, None)
        }
        Err(e) => {
            error(format!("Error loading roster: {}", e));
            store.audit("roster_load_failed", "", &e.to_string());
            (roster, Some(e.to_string()))
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Roster { lookup } = cmd {
        let roster = load_roster(cfg)?;

        if let Some(id) = lookup {
            let id = id.trim();
            if !is_identifier(id) {
                warning(format!("{} must contain only numbers.", cfg.id_label));
                return Ok(());
            }
            match roster.get(id) {
                Some(name) => println!("{id}  {name}"),
                None => warning(format!("{} {} is not on the roster.", cfg.id_label, id)),
            }
            return Ok(());
        }

        let mut table = Table::new([cfg.id_label.as_str(), "Name"]);
        for (id, name) in roster.sorted() {
            table.add_row(vec![id.to_string(), name.to_string()]);
        }
        print!("{}", table.render());
        info(format!("{} people on the roster.", roster.len()));
    }

    Ok(())
}
