//! Plain-text rendering of the engine's output stream.
//!
//! The engine hands over history entries and an opaque component model;
//! everything about how they look on a console lives here.

use std::io::{self, Write};

use folio_core::{HistoryEntry, SessionState};
use folio_terminal::CommandOutput;
use folio_terminal::content::{Block, Card, Component};

/// Print the full transcript, oldest entry first.
pub fn transcript(state: &SessionState) {
    for entry in state.history() {
        entry_lines(entry);
    }
}

/// Print what the last submission produced: the newly appended entry, or a
/// screen wipe when the transcript shrank (the clear command ran).
pub fn latest(state: &SessionState, previous_len: usize) {
    let history = state.history();
    if history.len() <= previous_len {
        print!("\x1b[2J\x1b[H");
        let _ = io::stdout().flush();
        return;
    }
    if let Some(entry) = history.last() {
        entry_lines(entry);
    }
}

/// Print the input prompt, tagged with the active theme.
pub fn prompt(state: &SessionState) {
    print!("[{}] visitor@folio:~$ ", state.theme().name);
    let _ = io::stdout().flush();
}

fn entry_lines(entry: &HistoryEntry) {
    println!("$ {}", entry.command);
    match &entry.output {
        CommandOutput::Text(text) => {
            if !text.is_empty() {
                println!("{text}");
            }
        },
        CommandOutput::Success(line) | CommandOutput::Error(line) => println!("{line}"),
        CommandOutput::Component(component) => component_lines(component),
    }
    println!();
}

fn component_lines(component: &Component) {
    if let Some(heading) = &component.heading {
        println!("== {heading} ==");
    }
    for block in &component.blocks {
        match block {
            Block::Chips { items } => println!("  [{}]", items.join("] [")),
            Block::Card(card) => card_lines(card),
        }
    }
}

fn card_lines(card: &Card) {
    match &card.badge {
        Some(badge) => println!("  * {} ({badge})", card.title),
        None => println!("  * {}", card.title),
    }
    if let Some(subtitle) = &card.subtitle {
        println!("    {subtitle}");
    }
    if let Some(period) = &card.period {
        println!("    {period}");
    }
    if let Some(body) = &card.body {
        println!("    {body}");
    }
    if !card.tags.is_empty() {
        println!("    [{}]", card.tags.join("] ["));
    }
    if let Some(link) = &card.link {
        println!("    -> {link}");
    }
}
