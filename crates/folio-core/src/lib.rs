//! Session engine for FOLIO_TERM.
//!
//! A [`Session`] owns the observable terminal state (output history, input
//! buffer, recall buffer, active theme, busy flag) and is the single
//! mutator path for it: every change flows through the transitions on
//! `Session`, so history order always equals submit-completion order.
//!
//! Presentation layers hold the session, forward input through
//! [`Session::update_input`] / [`Session::key_down`], and render from the
//! read-only [`SessionState`] snapshot.

mod boot;
mod session;

pub use boot::{BOOT_PACING, BOOT_SEQUENCE};
pub use session::{HistoryEntry, Session, SessionState};
