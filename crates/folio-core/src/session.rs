//! Session state and the transitions that mutate it.
//!
//! The recall pointer uses −1 as the "not navigating" sentinel; recall
//! traversal indexes the buffer with `len - 1 - pointer`, so pointer 0 is
//! the most recent submission and higher pointers walk toward the oldest.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use folio_terminal::{CLEAR_COMMAND, CommandContext, CommandOutput, CommandTable, parse_line};
use folio_theme::{Theme, ThemeRegistry};
use folio_types::input::Key;

/// One transcript entry: a submitted command and its classified output.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    /// Unique entry id.
    pub id: Uuid,
    /// Entry creation time.
    pub timestamp: DateTime<Utc>,
    /// The raw command string as submitted.
    pub command: String,
    /// The classified command output.
    pub output: CommandOutput,
}

/// Observable session state.
///
/// Read-only outside this crate; every mutation goes through a transition
/// on [`Session`], applied atomically under `&mut self`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    history: Vec<HistoryEntry>,
    input: String,
    recall: Vec<String>,
    recall_pointer: isize,
    theme: Theme,
    busy: bool,
}

impl SessionState {
    fn new(theme: Theme) -> Self {
        Self {
            history: Vec::new(),
            input: String::new(),
            recall: Vec::new(),
            recall_pointer: -1,
            theme,
            busy: false,
        }
    }

    /// Output history, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Current input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Previously submitted command strings, oldest first. Survives clear.
    pub fn recall(&self) -> &[String] {
        &self.recall
    }

    /// Recall navigation pointer; −1 when not navigating.
    pub fn recall_pointer(&self) -> isize {
        self.recall_pointer
    }

    /// The active theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Whether a submit is in flight. The input surface is disabled while
    /// this is set.
    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

/// The session engine: owns the state, the theme registry, and the command
/// table for one terminal session.
pub struct Session {
    pub(crate) state: SessionState,
    themes: ThemeRegistry,
    commands: CommandTable,
    pub(crate) booted: bool,
}

impl Session {
    /// Create a session with the registry's default theme active and all
    /// buffers empty.
    pub fn new(themes: ThemeRegistry, commands: CommandTable) -> Self {
        let theme = themes.default_theme().clone();
        Self {
            state: SessionState::new(theme),
            themes,
            commands,
            booted: false,
        }
    }

    /// Read-only snapshot of the current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The theme registry this session cycles over.
    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    /// Submit a raw input line.
    ///
    /// Blank input is a complete no-op. An unresolvable command appends an
    /// error entry; a resolved command executes (possibly suspending) with
    /// the busy flag held, then either clears the history (the designated
    /// clear command, aliases included) or appends an entry with its
    /// output. An execution failure degrades to an error entry. In every
    /// non-blank case the input buffer empties, the recall pointer resets,
    /// and the raw line is appended to the recall buffer -- clear included,
    /// duplicates included.
    pub async fn submit(&mut self, raw: &str) {
        let Some((name, args)) = parse_line(raw) else {
            return;
        };

        let resolved = self.commands.resolve(&name).map(Arc::clone);
        match resolved {
            None => {
                log::debug!("command not found: {name}");
                self.push_entry(
                    raw,
                    CommandOutput::Error(format!(
                        "Command not found: {name}. Type 'help' for available commands."
                    )),
                );
            },
            Some(cmd) => {
                self.state.busy = true;
                let result = {
                    let mut ctx = CommandContext::new(&self.themes, &mut self.state.theme);
                    cmd.execute(&args, &mut ctx).await
                };
                match result {
                    Ok(_) if cmd.name() == CLEAR_COMMAND => {
                        self.state.history.clear();
                    },
                    Ok(output) => self.push_entry(raw, output),
                    Err(e) => self.push_entry(raw, CommandOutput::Error(format!("Error: {e}"))),
                }
                self.state.busy = false;
            },
        }

        // Common epilogue for every non-blank submission, clear included.
        self.state.input.clear();
        self.state.recall_pointer = -1;
        self.state.recall.push(raw.to_string());
    }

    /// Replace the input buffer. No other field changes.
    pub fn update_input(&mut self, text: &str) {
        self.state.input = text.to_string();
    }

    /// Navigate one step toward the oldest recall entry. A no-op once the
    /// oldest entry is shown.
    pub fn recall_previous(&mut self) {
        let next = self.state.recall_pointer + 1;
        let len = self.state.recall.len() as isize;
        if next < len {
            self.state.recall_pointer = next;
            self.state.input = self.state.recall[(len - 1 - next) as usize].clone();
        }
    }

    /// Navigate one step back toward the newest recall entry; stepping past
    /// it leaves navigation and empties the input buffer.
    pub fn recall_next(&mut self) {
        let prev = self.state.recall_pointer - 1;
        if prev >= 0 {
            let len = self.state.recall.len() as isize;
            self.state.recall_pointer = prev;
            self.state.input = self.state.recall[(len - 1 - prev) as usize].clone();
        } else {
            self.state.recall_pointer = -1;
            self.state.input.clear();
        }
    }

    /// Dispatch a key event: Enter submits the current input (ignored
    /// while a submit is in flight), arrows navigate recall.
    pub async fn key_down(&mut self, key: Key) {
        match key {
            Key::Enter => {
                if self.state.busy {
                    return;
                }
                let line = self.state.input.clone();
                self.submit(&line).await;
            },
            Key::ArrowUp => self.recall_previous(),
            Key::ArrowDown => self.recall_next(),
        }
    }

    /// Activate the next theme in registry order, wrapping around.
    pub fn cycle_theme(&mut self) {
        self.state.theme = self.themes.next_after(&self.state.theme.name).clone();
    }

    /// Activate a theme by name. Returns `false` and leaves the theme
    /// unchanged when the name is not in the registry.
    pub fn set_theme(&mut self, name: &str) -> bool {
        match self.themes.get(name) {
            Some(theme) => {
                self.state.theme = theme.clone();
                true
            },
            None => false,
        }
    }

    fn push_entry(&mut self, command: &str, output: CommandOutput) {
        self.state.history.push(HistoryEntry {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            command: command.to_string(),
            output,
        });
    }
}
