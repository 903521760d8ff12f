use super::{Roster, parse_roster_text};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fs;

/// Load every configured source, in order, into `roster`.
///
/// Stops at the first unreadable file; entries from earlier sources stay in
/// `roster` so the kiosk can keep serving them.
pub fn load_into(cfg: &Config, roster: &mut Roster) -> AppResult<()> {
    for source in &cfg.rosters {
        let path = cfg.resolve_roster_path(source);
        let text = fs::read_to_string(&path).map_err(|e| AppError::RosterLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        parse_roster_text(&text, source, roster);
    }
    Ok(())
}

pub fn load_roster(cfg: &Config) -> AppResult<Roster> {
    let mut roster = Roster::new();
    load_into(cfg, &mut roster)?;
    Ok(roster)
}
