use crate::errors::{AppError, AppResult};
use crate::roster::{Roster, is_identifier};
use crate::store::{Collection, DocumentStore, Record};

/// Non-interactive check-in, used by the `checkin` and `guest` commands.
pub struct CheckinLogic;

impl CheckinLogic {
    fn validate_id(raw: &str) -> AppResult<String> {
        let id = raw.trim();
        if !is_identifier(id) {
            return Err(AppError::InvalidId(raw.to_string()));
        }
        Ok(id.to_string())
    }

    /// Mark a roster member present. Unknown identifiers are an error.
    pub fn mark_present(
        store: &mut dyn DocumentStore,
        roster: &Roster,
        raw_id: &str,
    ) -> AppResult<Record> {
        let id = Self::validate_id(raw_id)?;
        let name = roster
            .get(&id)
            .ok_or_else(|| AppError::UnknownId(id.clone()))?;

        match store.upsert(Collection::Attendance, &id, name) {
            Ok(rec) => {
                store.audit("present", &id, &format!("{name} marked present"));
                Ok(rec)
            }
            Err(e) => {
                store.audit("present_failed", &id, &e.to_string());
                Err(e)
            }
        }
    }

    /// Register a guest under `raw_id`, whether or not it is on the roster.
    pub fn register_guest(
        store: &mut dyn DocumentStore,
        raw_id: &str,
        name: &str,
    ) -> AppResult<Record> {
        let id = Self::validate_id(raw_id)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyGuestName);
        }

        match store.upsert(Collection::Guests, &id, name) {
            Ok(rec) => {
                store.audit("guest", &id, &format!("{name} registered as guest"));
                Ok(rec)
            }
            Err(e) => {
                store.audit("guest_failed", &id, &e.to_string());
                Err(e)
            }
        }
    }
}
