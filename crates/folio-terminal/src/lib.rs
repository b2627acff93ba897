//! Command interpreter for FOLIO_TERM.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! [`Command`] trait and are registered by canonical name plus aliases. The
//! interpreter parses input lines (trim, lowercase, whitespace split),
//! resolves the first token against the table, and dispatches `execute()`.
//!
//! Command output is a closed set of kinds; the [`content`] module holds the
//! renderable payload for the `component` kind, which the engine routes
//! without inspecting.

pub mod commands;
pub mod content;
mod interpreter;
pub mod profile;

/// Canonical name of the designated clear command.
pub use commands::CLEAR_COMMAND;
/// Register all built-in portfolio commands into a table.
pub use commands::register_builtins;
/// A single executable command trait.
pub use interpreter::Command;
/// Mutable session surface exposed to commands during execution.
pub use interpreter::CommandContext;
/// Output produced by a command (text, component, success, error).
pub use interpreter::CommandOutput;
/// Registry of available commands resolved by name or alias.
pub use interpreter::CommandTable;
/// Split a raw line into a lowercased command token and arguments.
pub use interpreter::parse_line;
