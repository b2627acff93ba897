//! Theme palette -- authored spec and runtime form.
//!
//! `ThemeSpec` is the serde-facing shape: hex color strings, every field
//! defaulted so a partial TOML table still yields a usable palette.
//! `Theme` is the runtime form with parsed colors, built once per theme.

use serde::{Deserialize, Serialize};

use folio_types::color::Color;
use folio_types::error::Result;

/// Authored color palette for a theme. All fields are hex color strings.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeSpec {
    /// Main background color.
    #[serde(default = "default_background")]
    pub background: String,
    /// Default output text color.
    #[serde(default = "default_foreground")]
    pub foreground: String,
    /// Prompt color.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Accent color (highlights, links).
    #[serde(default = "default_accent")]
    pub accent: String,
    /// Text selection color.
    #[serde(default = "default_selection")]
    pub selection: String,
    /// Cursor color.
    #[serde(default = "default_cursor")]
    pub cursor: String,
    /// Gradient start color (headings, banner).
    #[serde(default = "default_gradient_from")]
    pub gradient_from: String,
    /// Gradient end color.
    #[serde(default = "default_gradient_to")]
    pub gradient_to: String,
}

fn default_background() -> String {
    "#0a0e17".to_string()
}
fn default_foreground() -> String {
    "#e0e6f0".to_string()
}
fn default_prompt() -> String {
    "#00d9ff".to_string()
}
fn default_accent() -> String {
    "#00d9ff".to_string()
}
fn default_selection() -> String {
    "#1a2744".to_string()
}
fn default_cursor() -> String {
    "#00d9ff".to_string()
}
fn default_gradient_from() -> String {
    "#00d9ff".to_string()
}
fn default_gradient_to() -> String {
    "#00ff88".to_string()
}

impl Default for ThemeSpec {
    fn default() -> Self {
        Self {
            background: default_background(),
            foreground: default_foreground(),
            prompt: default_prompt(),
            accent: default_accent(),
            selection: default_selection(),
            cursor: default_cursor(),
            gradient_from: default_gradient_from(),
            gradient_to: default_gradient_to(),
        }
    }
}

/// Runtime theme with parsed colors. Immutable once built; sessions hold
/// clones of registry members, never ad-hoc palettes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    /// Unique registry key.
    pub name: String,
    pub background: Color,
    pub foreground: Color,
    pub prompt: Color,
    pub accent: Color,
    pub selection: Color,
    pub cursor: Color,
    pub gradient_from: Color,
    pub gradient_to: Color,
}

impl Theme {
    /// Build a runtime theme from an authored spec, validating every color.
    pub fn from_spec(name: &str, spec: &ThemeSpec) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            background: Color::from_hex(&spec.background)?,
            foreground: Color::from_hex(&spec.foreground)?,
            prompt: Color::from_hex(&spec.prompt)?,
            accent: Color::from_hex(&spec.accent)?,
            selection: Color::from_hex(&spec.selection)?,
            cursor: Color::from_hex(&spec.cursor)?,
            gradient_from: Color::from_hex(&spec.gradient_from)?,
            gradient_to: Color::from_hex(&spec.gradient_to)?,
        })
    }
}
