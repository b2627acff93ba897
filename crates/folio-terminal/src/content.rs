//! Renderable component payloads.
//!
//! This module is owned by the presentation side of the system: commands
//! construct these values and renderers consume them. The engine itself
//! treats a [`Component`] as opaque -- it routes the enclosing output by
//! kind and never branches on anything in here.

use serde::Serialize;

/// An opaque renderable payload: an optional section heading followed by
/// a sequence of layout blocks.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Component {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub blocks: Vec<Block>,
}

/// One layout block inside a component.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Row of small pill labels (command names, theme names, tags).
    Chips { items: Vec<String> },
    /// A content card.
    Card(Card),
}

/// A content card: profile entries, projects, certifications, links.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Card {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    /// Small status label, e.g. "Current" on the active position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Component {
    /// Component with no heading.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Component introduced by a section heading.
    pub fn with_heading(title: impl Into<String>) -> Self {
        Self {
            heading: Some(title.into()),
            blocks: Vec::new(),
        }
    }

    /// Append a chips row.
    pub fn chips(mut self, items: Vec<String>) -> Self {
        self.blocks.push(Block::Chips { items });
        self
    }

    /// Append a card.
    pub fn card(mut self, card: Card) -> Self {
        self.blocks.push(Block::Card(card));
        self
    }
}

impl Card {
    /// Card with only a title set.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}
