mod session;
mod terminal;

pub use session::{Focus, KioskSession, Outcome, Selection, View};
pub use terminal::{CANCEL, QUIT, handle_line, run_loop};
