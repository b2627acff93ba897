//! End-to-end engine flow over the real built-in command set.

use std::sync::Arc;

use folio_core::{BOOT_SEQUENCE, Session};
use folio_terminal::profile::Profile;
use folio_terminal::{CommandOutput, CommandTable, register_builtins};
use folio_theme::ThemeRegistry;
use folio_types::input::Key;

fn session() -> Session {
    let profile = Arc::new(Profile::embedded().unwrap());
    let mut table = CommandTable::new();
    register_builtins(&mut table, profile);
    Session::new(ThemeRegistry::builtin().unwrap(), table)
}

#[tokio::test(start_paused = true)]
async fn boot_then_interact() {
    let mut s = session();
    s.run_boot().await;
    assert_eq!(s.state().history().len(), BOOT_SEQUENCE.len());

    // Switch theme by typing, like a user would.
    s.update_input("theme sunset");
    s.key_down(Key::Enter).await;
    assert_eq!(s.state().theme().name, "sunset");
    assert_eq!(s.state().history().len(), BOOT_SEQUENCE.len() + 1);

    // Clear through the alias: history empties, recall and theme survive.
    s.update_input("cls");
    s.key_down(Key::Enter).await;
    assert!(s.state().history().is_empty());
    assert_eq!(s.state().recall().len(), BOOT_SEQUENCE.len() + 2);
    assert_eq!(s.state().theme().name, "sunset");

    // Recall still walks back through everything, clear included.
    s.key_down(Key::ArrowUp).await;
    assert_eq!(s.state().input(), "cls");
    s.key_down(Key::ArrowUp).await;
    assert_eq!(s.state().input(), "theme sunset");
}

#[tokio::test]
async fn alias_and_canonical_render_the_same_kind() {
    let mut s = session();
    s.submit("certifications").await;
    s.submit("certs").await;
    let history = s.state().history();
    let (CommandOutput::Component(a), CommandOutput::Component(b)) =
        (&history[0].output, &history[1].output)
    else {
        panic!("expected two Component outputs");
    };
    assert_eq!(a.heading, b.heading);
    assert_eq!(a.blocks.len(), b.blocks.len());
}

#[tokio::test]
async fn unknown_command_keeps_the_session_alive() {
    let mut s = session();
    s.submit("sudo rm -rf /").await;
    let history = s.state().history();
    assert_eq!(history.len(), 1);
    assert!(matches!(history[0].output, CommandOutput::Error(_)));

    s.submit("help").await;
    assert_eq!(s.state().history().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn snapshot_serializes_for_the_presentation_bridge() {
    let mut s = session();
    s.run_boot().await;
    s.submit("theme matrix").await;

    let snapshot = serde_json::to_value(s.state()).unwrap();
    let history = snapshot["history"].as_array().unwrap();
    assert_eq!(history.len(), BOOT_SEQUENCE.len() + 1);
    assert_eq!(history[0]["command"], "whoami");
    assert_eq!(history[0]["output"]["kind"], "component");
    assert_eq!(snapshot["theme"]["name"], "matrix");
    assert_eq!(snapshot["theme"]["background"], "#0d0208");
    assert_eq!(snapshot["busy"], false);
    assert_eq!(snapshot["recall_pointer"], -1);
}
