//! Ordered theme registry.
//!
//! Themes keep their registration order: `next_after` walks that order with
//! wrap-around, which is what theme cycling in the engine is built on. Names
//! are unique; registration of a duplicate is an error.

use serde::Deserialize;

use folio_types::error::{FolioError, Result};

use crate::builtin;
use crate::theme::{Theme, ThemeSpec};

/// Fixed, ordered set of themes a session can activate.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: Vec<Theme>,
}

/// One entry of an external theme-pack TOML file.
#[derive(Debug, Deserialize)]
struct ThemePackEntry {
    name: String,
    #[serde(flatten)]
    spec: ThemeSpec,
}

/// External theme-pack file: an ordered array of `[[theme]]` tables.
#[derive(Debug, Deserialize)]
struct ThemePack {
    #[serde(default, rename = "theme")]
    themes: Vec<ThemePackEntry>,
}

impl ThemeRegistry {
    /// Registry of the built-in themes, in shipped order.
    pub fn builtin() -> Result<Self> {
        Self::with_themes(builtin::builtin_themes()?)
    }

    /// Registry over an explicit theme list. The first entry is the default
    /// theme; the list must be non-empty and free of duplicate names.
    pub fn with_themes(themes: Vec<Theme>) -> Result<Self> {
        if themes.is_empty() {
            return Err(FolioError::Theme("registry needs at least one theme".into()));
        }
        let mut registry = Self { themes: Vec::new() };
        for theme in themes {
            registry.register(theme)?;
        }
        Ok(registry)
    }

    /// Add a theme at the end of the cycling order.
    pub fn register(&mut self, theme: Theme) -> Result<()> {
        if self.get(&theme.name).is_some() {
            return Err(FolioError::Theme(format!(
                "duplicate theme name: {}",
                theme.name
            )));
        }
        self.themes.push(theme);
        Ok(())
    }

    /// Layer an external theme pack over the current set. Entries keep their
    /// file order; duplicate names (including built-in ones) are rejected.
    /// Returns the number of themes added.
    pub fn extend_from_toml(&mut self, toml_src: &str) -> Result<usize> {
        let pack: ThemePack = toml::from_str(toml_src)?;
        let count = pack.themes.len();
        for entry in &pack.themes {
            self.register(Theme::from_spec(&entry.name, &entry.spec)?)?;
        }
        log::info!("Loaded {count} external theme(s)");
        Ok(count)
    }

    /// Look up a theme by name.
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.name == name)
    }

    /// The designated default theme (first in registry order).
    pub fn default_theme(&self) -> &Theme {
        &self.themes[0]
    }

    /// The theme after `name` in registry order, wrapping around. Unknown
    /// names restart the cycle at the default.
    pub fn next_after(&self, name: &str) -> &Theme {
        match self.themes.iter().position(|t| t.name == name) {
            Some(idx) => &self.themes[(idx + 1) % self.themes.len()],
            None => self.default_theme(),
        }
    }

    /// Theme names in cycling order.
    pub fn names(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
