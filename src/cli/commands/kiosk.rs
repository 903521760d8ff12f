use crate::cli::commands::roster::load_reporting;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::kiosk::{CANCEL, KioskSession, QUIT, run_loop};
use crate::store::{DocumentStore, MemoryStore, SqliteStore};
use crate::ui::messages::{header, warning};
use std::io::{self, BufRead, Write};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Kiosk { dry_run } = cmd {
        let mut store: Box<dyn DocumentStore> = if *dry_run {
            warning("Dry run: check-ins are kept in memory and discarded on exit.");
            Box::new(MemoryStore::new())
        } else {
            Box::new(SqliteStore::open(&cfg.database)?)
        };

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let stdout = io::stdout();

        let (roster, failure) = load_reporting(cfg, store.as_ref());
        if failure.is_some() {
            // the operator has to acknowledge a broken roster before check-in starts
            print!("Failed to load the roster lists. Please check the file paths. [Enter] ");
            stdout.lock().flush()?;
            let mut ack = String::new();
            input.read_line(&mut ack)?;
        }

        header("rollcall check-in");
        println!("Type your {} and press Enter. {QUIT} exits, {CANCEL} aborts a guest registration.\n", cfg.id_label);

        let mut session = KioskSession::new(roster, cfg.id_label.clone());
        run_loop(
            &mut session,
            store.as_mut(),
            &cfg.id_label,
            input,
            stdout.lock(),
        )?;
    }

    Ok(())
}
