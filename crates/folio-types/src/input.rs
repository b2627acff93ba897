//! Input keys the engine dispatches on.
//!
//! The presentation layer owns raw keyboard handling and text entry; only
//! the keys with engine-level meaning are forwarded here. Everything else
//! flows through `on_input_change` as plain text.

use serde::{Deserialize, Serialize};

/// A key event with engine-level meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Submit the current input buffer.
    Enter,
    /// Recall the previous (older) submitted command.
    ArrowUp,
    /// Recall the next (newer) submitted command.
    ArrowDown,
}
