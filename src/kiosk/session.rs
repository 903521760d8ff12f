//! Check-in state machine.
//!
//! All transient state (typed input, pending selection, guest prompt) lives
//! here and is reset after every terminal action: success, failure or cancel.

use crate::roster::{Roster, is_identifier};
use crate::store::{Collection, DocumentStore};

/// A resolved roster member waiting for "mark present".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Idle,
    Confirmation { name: String },
    GuestPrompt { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    IdInput,
    GuestName,
}

/// What a single action ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing happened besides a status message.
    Rejected,
    /// The identifier resolved to a member; confirmation is shown.
    Found,
    /// Unknown identifier; guest prompt is open.
    GuestPrompt,
    /// A record was written.
    Saved,
    /// The write failed; state was reset anyway.
    Failed,
    Cancelled,
    /// Nothing to act on.
    Ignored,
}

pub struct KioskSession {
    roster: Roster,
    id_label: String,
    pub input: String,
    pub status: String,
    pub view: View,
    pub focus: Focus,
    pending: Option<Selection>,
    guest_id: Option<String>,
}

impl KioskSession {
    pub fn new(roster: Roster, id_label: impl Into<String>) -> Self {
        Self {
            roster,
            id_label: id_label.into(),
            input: String::new(),
            status: String::new(),
            view: View::Idle,
            focus: Focus::IdInput,
            pending: None,
            guest_id: None,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn pending(&self) -> Option<&Selection> {
        self.pending.as_ref()
    }

    pub fn guest_id(&self) -> Option<&str> {
        self.guest_id.as_deref()
    }

    /// Resolve a typed identifier against the roster.
    pub fn submit_id(&mut self, raw: &str) -> Outcome {
        self.input = raw.to_string();
        let entered = raw.trim().to_string();
        self.status.clear();

        if entered.is_empty() {
            self.status = format!("Please enter your {}.", self.id_label);
            return Outcome::Rejected;
        }
        if !is_identifier(&entered) {
            self.status = format!("{} must contain only numbers.", self.id_label);
            self.input.clear();
            return Outcome::Rejected;
        }

        match self.roster.get(&entered) {
            Some(name) => {
                let name = name.to_string();
                self.pending = Some(Selection {
                    id: entered,
                    name: name.clone(),
                });
                self.view = View::Confirmation { name };
                Outcome::Found
            }
            None => {
                self.pending = None;
                self.guest_id = Some(entered.clone());
                self.view = View::GuestPrompt { id: entered };
                self.focus = Focus::GuestName;
                Outcome::GuestPrompt
            }
        }
    }

    /// Write an attendance record for the pending selection.
    pub fn mark_present(&mut self, store: &mut dyn DocumentStore) -> Outcome {
        let Some(sel) = self.pending.clone() else {
            return Outcome::Ignored;
        };

        self.status = "Marking present...".to_string();
        let outcome = match store.upsert(Collection::Attendance, &sel.id, &sel.name) {
            Ok(_) => {
                self.status = format!("Welcome, {}! You are marked present.", sel.name);
                store.audit("present", &sel.id, &format!("{} marked present", sel.name));
                Outcome::Saved
            }
            Err(e) => {
                self.status = "Error saving attendance. Please try again.".to_string();
                store.audit("present_failed", &sel.id, &e.to_string());
                Outcome::Failed
            }
        };

        self.input.clear();
        self.pending = None;
        self.view = View::Idle;
        self.focus = Focus::IdInput;
        outcome
    }

    /// Register the identifier captured by the guest prompt under `name`.
    pub fn confirm_guest(&mut self, name: &str, store: &mut dyn DocumentStore) -> Outcome {
        let guest_name = name.trim().to_string();
        let Some(id) = self.guest_id.clone().filter(|_| !guest_name.is_empty()) else {
            self.status = "Please enter your name.".to_string();
            return Outcome::Rejected;
        };

        self.view = View::Idle;
        self.guest_id = None;

        self.status = "Registering guest...".to_string();
        let outcome = match store.upsert(Collection::Guests, &id, &guest_name) {
            Ok(_) => {
                self.status = format!("Welcome, {guest_name}! You are registered as a guest.");
                store.audit("guest", &id, &format!("{guest_name} registered as guest"));
                Outcome::Saved
            }
            Err(e) => {
                self.status = "Error registering guest. Please try again.".to_string();
                store.audit("guest_failed", &id, &e.to_string());
                Outcome::Failed
            }
        };

        self.input.clear();
        self.focus = Focus::IdInput;
        outcome
    }

    /// Close the guest prompt without writing anything.
    pub fn cancel_guest(&mut self) -> Outcome {
        self.view = View::Idle;
        self.status = "Registration cancelled.".to_string();
        self.input.clear();
        self.focus = Focus::IdInput;
        self.guest_id = None;
        Outcome::Cancelled
    }
}
