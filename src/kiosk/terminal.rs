//! Line-oriented front end for [`KioskSession`].

use super::session::{KioskSession, Outcome, View};
use crate::errors::AppResult;
use crate::store::DocumentStore;
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};
use std::io::{BufRead, Write};

pub const QUIT: &str = "/quit";
pub const CANCEL: &str = "/cancel";

fn prompt(session: &KioskSession, label: &str, out: &mut impl Write) -> AppResult<()> {
    match &session.view {
        View::Idle => write!(out, "{CYAN}{label}>{RESET} ")?,
        View::Confirmation { name } => {
            writeln!(out, "👤 {GREEN}{name}{RESET}")?;
            write!(out, "[Enter] mark present, or type another {label}> ")?;
        }
        View::GuestPrompt { id } => {
            writeln!(out, "❓ {YELLOW}{id}{RESET} is not on the roster.")?;
            write!(out, "Guest name ({CANCEL} to abort)> ")?;
        }
    }
    out.flush()?;
    Ok(())
}

fn show_status(session: &KioskSession, outcome: &Outcome, out: &mut impl Write) -> AppResult<()> {
    if session.status.is_empty() {
        return Ok(());
    }
    let color = match outcome {
        Outcome::Saved => GREEN,
        Outcome::Failed | Outcome::Rejected => RED,
        _ => YELLOW,
    };
    writeln!(out, "{color}{}{RESET}", session.status)?;
    Ok(())
}

/// Drive one action from a single input line.
pub fn handle_line(session: &mut KioskSession, store: &mut dyn DocumentStore, line: &str) -> Outcome {
    match session.view.clone() {
        View::Idle => session.submit_id(line),
        View::Confirmation { .. } => {
            if line.trim().is_empty() {
                session.mark_present(store)
            } else {
                session.submit_id(line)
            }
        }
        View::GuestPrompt { .. } => {
            if line.trim() == CANCEL {
                session.cancel_guest()
            } else {
                session.confirm_guest(line, store)
            }
        }
    }
}

/// Run the kiosk until `/quit` or end of input.
pub fn run_loop<R: BufRead, W: Write>(
    session: &mut KioskSession,
    store: &mut dyn DocumentStore,
    label: &str,
    input: R,
    mut out: W,
) -> AppResult<()> {
    prompt(session, label, &mut out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim() == QUIT {
            break;
        }

        let outcome = handle_line(session, store, &line);
        writeln!(out)?;
        show_status(session, &outcome, &mut out)?;
        prompt(session, label, &mut out)?;
    }

    writeln!(out)?;
    Ok(())
}
