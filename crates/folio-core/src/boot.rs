//! Boot sequence -- the autoplay transcript that seeds a new session.
//!
//! The sequence goes through the same `submit` transition as user input,
//! awaiting each command's completion before pacing to the next, so the
//! seeded history is indistinguishable from a typed one.

use std::time::Duration;

use crate::session::Session;

/// Commands submitted automatically at session start, in order.
pub const BOOT_SEQUENCE: &[&str] = &[
    "whoami",
    "experience",
    "projects",
    "skills",
    "certifications",
    "contact",
];

/// Pause after each boot command.
pub const BOOT_PACING: Duration = Duration::from_millis(150);

impl Session {
    /// Run the boot sequence once. Guarded by a one-shot latch: the hosting
    /// view may re-trigger this on re-render, and the second call must not
    /// replay the transcript.
    pub async fn run_boot(&mut self) {
        if self.booted {
            log::debug!("boot sequence already ran; ignoring");
            return;
        }
        self.booted = true;

        log::info!("running boot sequence ({} commands)", BOOT_SEQUENCE.len());
        for line in BOOT_SEQUENCE {
            self.submit(line).await;
            tokio::time::sleep(BOOT_PACING).await;
        }
    }

    /// Whether the boot sequence has been triggered for this session.
    pub fn booted(&self) -> bool {
        self.booted
    }
}
