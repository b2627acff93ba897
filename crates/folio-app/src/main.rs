//! FOLIO_TERM console entry point.
//!
//! Reference consumer of the session engine: runs the boot sequence,
//! prints the transcript, then drives a line REPL over stdin. Pass a theme
//! pack path (or set `FOLIO_THEMES`) to layer external themes over the
//! built-ins; pass `--json` to dump the post-boot session snapshot instead
//! of entering the REPL.

mod render;

use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use folio_core::Session;
use folio_terminal::profile::Profile;
use folio_terminal::{CommandTable, register_builtins};
use folio_theme::ThemeRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut json_snapshot = false;
    let mut pack_path: Option<String> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json_snapshot = true,
            other => pack_path = Some(other.to_string()),
        }
    }

    // Themes: built-ins first, then an optional external pack from the
    // CLI arg or the FOLIO_THEMES env var.
    let mut themes = ThemeRegistry::builtin()?;
    if let Some(path) = pack_path.or_else(|| std::env::var("FOLIO_THEMES").ok()) {
        let src = std::fs::read_to_string(&path)?;
        let added = themes.extend_from_toml(&src)?;
        log::info!("Loaded {added} theme(s) from {path}");
    }

    let profile = Arc::new(Profile::embedded()?);
    let mut table = CommandTable::new();
    register_builtins(&mut table, profile);

    let mut session = Session::new(themes, table);
    log::info!(
        "Starting FOLIO_TERM session ({} themes)",
        session.themes().len()
    );

    session.run_boot().await;

    if json_snapshot {
        println!("{}", serde_json::to_string_pretty(session.state())?);
        return Ok(());
    }

    render::transcript(session.state());

    // Line REPL. The driver feeds whole lines, so recall navigation stays
    // an engine-level API for key-aware front-ends; `exit`/`quit` belong to
    // the driver, not the command table.
    render::prompt(session.state());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }
        let before = session.state().history().len();
        session.submit(&line).await;
        render::latest(session.state(), before);
        render::prompt(session.state());
    }

    log::info!("Session ended");
    Ok(())
}
